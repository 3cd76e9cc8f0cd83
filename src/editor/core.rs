// src/editor/core.rs

use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::editor::tools::{ObjectTool, Tool, WallTool};
use crate::errors::PlanError;
use crate::grid::Grid;
use crate::plan::{GridCell, ObjectTemplate, Wall};
use crate::render::{DrawSurface, SceneRenderer};
use crate::store::LayoutStore;
use crate::utils::PixelPos;

/// The two tool modes. Pointer events go to exactly one of them; switching
/// resets both tools' transient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Walls,
    Objects,
}

impl Mode {
    /// Returns a user-friendly name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Walls => "walls",
            Mode::Objects => "objects",
        }
    }

    /// Returns all available modes. Useful for UI elements like toolbars.
    pub fn all() -> &'static [Mode] {
        &[Mode::Walls, Mode::Objects]
    }
}

/// The core `Editor` struct: the shared store handle, the grid, the two
/// tools, and which of them currently receives pointer events.
pub struct Editor {
    store: Arc<RwLock<LayoutStore>>,
    grid: Grid,
    mode: Mode,
    wall_tool: WallTool,
    object_tool: ObjectTool,
    hover_cell: Option<GridCell>,

    /// Messages or status for UI.
    pub status_message: String,
    pub error_message: Option<String>,
}

impl Editor {
    pub fn new(store: Arc<RwLock<LayoutStore>>, grid: Grid) -> Self {
        Self {
            store,
            grid,
            mode: Mode::Walls,
            wall_tool: WallTool::default(),
            object_tool: ObjectTool::default(),
            hover_cell: None,
            status_message: String::new(),
            error_message: None,
        }
    }

    /// Returns the store arc for UI panels that need their own handle.
    pub fn store(&self) -> Arc<RwLock<LayoutStore>> {
        Arc::clone(&self.store)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the active tool mode, resetting both tools' transient drag
    /// state so nothing carries across modes.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.wall_tool.reset();
        self.object_tool.reset();
        self.status_message = format!("Mode: {}", mode.name());
    }

    // --- Pointer dispatch ---

    pub fn pointer_down(&mut self, pos: PixelPos) {
        match self.mode {
            Mode::Walls => self.wall_tool.on_pointer_down(&self.store, &self.grid, pos),
            Mode::Objects => self.object_tool.on_pointer_down(&self.store, &self.grid, pos),
        }
    }

    pub fn pointer_move(&mut self, pos: PixelPos) {
        self.hover_cell = Some(self.grid.pixel_to_cell(pos));
        match self.mode {
            Mode::Walls => self.wall_tool.on_pointer_move(&self.store, &self.grid, pos),
            Mode::Objects => self.object_tool.on_pointer_move(&self.store, &self.grid, pos),
        }
    }

    pub fn pointer_up(&mut self, pos: PixelPos) {
        match self.mode {
            Mode::Walls => self.wall_tool.on_pointer_up(&self.store, &self.grid, pos),
            Mode::Objects => self.object_tool.on_pointer_up(&self.store, &self.grid, pos),
        }
    }

    /// Clears hover feedback when the pointer leaves the canvas.
    pub fn pointer_left(&mut self) {
        self.hover_cell = None;
    }

    pub fn hover_cell(&self) -> Option<GridCell> {
        self.hover_cell
    }

    /// The wall being dragged right now, axis-snapped, for preview.
    pub fn preview_wall(&self) -> Option<Wall> {
        self.wall_tool.preview()
    }

    // --- Operations surfaced to buttons and forms ---

    pub fn undo_last_wall(&mut self) {
        match self.wall_tool.undo_last(&self.store) {
            Some(_) => self.status_message = "Removed last wall.".to_string(),
            None => self.status_message = "No walls to remove.".to_string(),
        }
    }

    pub fn delete_selected(&mut self) {
        self.object_tool.delete_selected(&self.store);
    }

    pub fn rotate_selected(&mut self) {
        self.object_tool.rotate_selected(&self.store);
    }

    /// Adds a validated template to the catalog.
    pub fn add_template(&mut self, name: &str, width: i32, height: i32) {
        match ObjectTemplate::new(name, width, height) {
            Ok(template) => {
                self.status_message = format!("Added '{}' to the catalog.", template.name);
                self.error_message = None;
                self.store.write().add_template(template);
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    /// Stamps an instance of a catalog template onto the canvas.
    pub fn place_object(&mut self, template_name: &str) {
        match self.store.write().add_placed_object(template_name) {
            Ok(_) => {
                self.status_message = format!("Placed '{}'.", template_name);
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub fn save_configuration(&mut self, name: &str) {
        self.store.write().save_configuration(name);
        self.status_message = format!("Saved configuration '{}'.", name);
        self.error_message = None;
    }

    pub fn load_configuration(&mut self, name: &str) {
        match self.store.write().load_configuration(name) {
            Ok(()) => {
                self.status_message = format!("Loaded configuration '{}'.", name);
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub fn delete_configuration(&mut self, name: &str) {
        match self.store.write().delete_configuration(name) {
            Ok(()) => {
                self.status_message = format!("Deleted configuration '{}'.", name);
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    /// Redraws the scene through the renderer: full re-derivation from the
    /// store plus this editor's transient preview and hover state.
    pub fn render(&mut self, renderer: &SceneRenderer, surface: &mut dyn DrawSurface) {
        let store = self.store.read();
        renderer.redraw(
            surface,
            &mut self.grid,
            &store,
            self.wall_tool.preview(),
            self.hover_cell,
        );
    }

    /// Restores persisted state, then seeds the starter template into an
    /// empty catalog so a fresh install has something to place.
    pub fn restore_or_seed(&mut self) -> Result<(), PlanError> {
        let mut store = self.store.write();
        let restored = store.load_persisted()?;
        if store.templates().next().is_none() {
            store.add_template(ObjectTemplate::new("bed", 4, 3)?);
        }
        if restored {
            info!("previous session restored");
        }
        Ok(())
    }
}
