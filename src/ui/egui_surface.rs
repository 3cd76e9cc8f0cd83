// src/ui/egui_surface.rs

use eframe::egui;

use crate::plan::Colour;
use crate::render::DrawSurface;
use crate::utils::{PixelPos, PixelRect};

const LABEL_FONT_SIZE: f32 = 12.0;

/// `DrawSurface` adapter over an egui painter. Surface coordinates are
/// relative to the canvas origin; this adds the screen offset back in.
pub struct EguiSurface<'p> {
    painter: &'p egui::Painter,
    origin: egui::Pos2,
}

impl<'p> EguiSurface<'p> {
    pub fn new(painter: &'p egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, pos: PixelPos) -> egui::Pos2 {
        self.origin + egui::vec2(pos.x, pos.y)
    }
}

fn colour32(colour: Colour) -> egui::Color32 {
    egui::Color32::from_rgb(colour.r, colour.g, colour.b)
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self, rect: PixelRect) {
        let rect = egui::Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    }

    fn stroke_line(&mut self, from: PixelPos, to: PixelPos, width: f32, colour: Colour) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, colour32(colour)),
        );
    }

    fn fill_circle(&mut self, center: PixelPos, radius: f32, colour: Colour) {
        self.painter
            .circle_filled(self.to_screen(center), radius, colour32(colour));
    }

    fn fill_text(&mut self, text: &str, pos: PixelPos, max_width: f32) {
        let galley = self.painter.layout(
            text.to_string(),
            egui::FontId::proportional(LABEL_FONT_SIZE),
            egui::Color32::BLACK,
            max_width.max(0.0),
        );
        let mut anchor = self.to_screen(pos);
        anchor.y -= galley.size().y / 2.0;
        self.painter.galley(anchor, galley);
    }
}
