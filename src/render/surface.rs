// src/render/surface.rs

use crate::plan::Colour;
use crate::utils::{PixelPos, PixelRect};

/// The four primitives the planner needs from a 2D drawing surface. Any
/// target that can stroke lines and fill circles and text can render the
/// scene; the egui adapter lives in the UI layer and tests use a recorder.
pub trait DrawSurface {
    fn clear(&mut self, rect: PixelRect);
    fn stroke_line(&mut self, from: PixelPos, to: PixelPos, width: f32, colour: Colour);
    fn fill_circle(&mut self, center: PixelPos, radius: f32, colour: Colour);
    fn fill_text(&mut self, text: &str, pos: PixelPos, max_width: f32);
}
