// src/ui/central_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Context, Sense};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::render::SceneRenderer;
use crate::ui::egui_surface::EguiSurface;
use crate::utils::PixelPos;

/// The canvas area. Allocates the drawing surface, normalizes pointer
/// positions to surface coordinates, feeds them to the editor, and runs the
/// full-scene redraw each frame.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,
    renderer: SceneRenderer,
    surface_width: f32,
    surface_height: f32,
    last_pointer: Option<PixelPos>,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>, surface_width: f32, surface_height: f32) -> Self {
        Self {
            editor,
            renderer: SceneRenderer::new(surface_width, surface_height),
            surface_width,
            surface_height,
            last_pointer: None,
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let size = egui::vec2(self.surface_width, self.surface_height);
            let (response, painter) = ui.allocate_painter(size, Sense::drag());
            let origin = response.rect.min;

            let mut editor = self.editor.write();

            // Viewport-to-surface normalization happens here; the editor and
            // tools only ever see surface-relative pixels.
            match response
                .interact_pointer_pos()
                .or_else(|| response.hover_pos())
            {
                Some(screen_pos) => {
                    let pos = PixelPos::new(screen_pos.x - origin.x, screen_pos.y - origin.y);
                    self.last_pointer = Some(pos);
                    if response.drag_started() {
                        editor.pointer_down(pos);
                    } else {
                        // Covers both an active drag and plain hover; idle
                        // tools ignore it and the hover highlight tracks.
                        editor.pointer_move(pos);
                    }
                }
                None => editor.pointer_left(),
            }
            if response.drag_released() {
                if let Some(pos) = self.last_pointer {
                    editor.pointer_up(pos);
                }
            }

            let mut surface = EguiSurface::new(&painter, origin);
            editor.render(&self.renderer, &mut surface);
        });
    }
}
