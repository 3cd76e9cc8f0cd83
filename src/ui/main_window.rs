//! # Main Window Module
//!
//! The main user interface for the planner using eframe/egui:
//! - A left side panel for modes, the catalog, and configurations.
//! - A central canvas area for the grid, walls, and furniture.
//! - A bottom status bar for messages and grid dimensions.
//!
//! The module also provides `run_main_window()` to launch the UI as a
//! standalone egui application.

use std::error::Error;
use std::sync::Arc;

use eframe::egui;
use log::warn;
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::grid::Grid;
use crate::store::{FileBackend, LayoutStore, MemoryBackend, StorageBackend};
use crate::ui::central_panel::CentralPanel;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;

// Canvas geometry, mirroring the classic planner layout.
const SURFACE_SIZE: f32 = 520.0;
const CORNER_OFFSET: f32 = 10.0;
const DOT_RADIUS: f32 = 2.0;
const DOT_SPACING: f32 = 16.0;

/// MainWindow wires the shared editor into the three panels.
pub struct MainWindow {
    central_panel: CentralPanel,
    side_panel: SidePanel,
    status_bar: StatusBar,
}

impl MainWindow {
    pub fn new() -> Self {
        let backend: Box<dyn StorageBackend> = match FileBackend::new() {
            Ok(backend) => Box::new(backend),
            Err(err) => {
                warn!("{}; layouts will not survive this session", err);
                Box::new(MemoryBackend::new())
            }
        };
        let store = Arc::new(RwLock::new(LayoutStore::new(backend)));
        let grid = Grid::new(
            SURFACE_SIZE,
            SURFACE_SIZE,
            CORNER_OFFSET,
            DOT_RADIUS,
            DOT_SPACING,
        );

        let mut editor = Editor::new(store, grid);
        if let Err(err) = editor.restore_or_seed() {
            warn!("failed to restore a previous layout: {}", err);
        }
        let editor = Arc::new(RwLock::new(editor));

        Self {
            central_panel: CentralPanel::new(Arc::clone(&editor), SURFACE_SIZE, SURFACE_SIZE),
            side_panel: SidePanel::new(Arc::clone(&editor)),
            status_bar: StatusBar::new(editor),
        }
    }

    /// Draws the complete UI layout.
    pub fn update(&mut self, ctx: &egui::Context) {
        self.side_panel.update(ctx);
        self.status_bar.update(ctx);
        self.central_panel.update(ctx);
    }
}

impl Default for MainWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// A wrapper to integrate MainWindow into an eframe App.
struct PlannerApp {
    window: MainWindow,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.update(ctx);
    }
}

/// Runs the planner UI as a standalone egui application.
pub fn run_main_window() -> Result<(), Box<dyn Error>> {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Room Planner",
        native_options,
        Box::new(|_cc| {
            Box::new(PlannerApp {
                window: MainWindow::new(),
            })
        }),
    );
    // Since run_native returns (), we simply return Ok.
    Ok(())
}
