// src/editor/tools/mod.rs
mod objects;
mod walls;

pub use objects::ObjectTool;
pub use walls::WallTool;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::grid::Grid;
use crate::store::LayoutStore;
use crate::utils::PixelPos;

/// Common pointer contract for the two tool modes. Each tool is a small
/// state machine over transient drag state; committed results go into the
/// store, and switching modes resets both tools through `reset`.
///
/// A pointer released outside the canvas is delivered as an eventual
/// `on_pointer_up`/`on_pointer_down` in an unexpected state; tools treat
/// those as explicit no-ops, never as errors.
pub trait Tool {
    fn name(&self) -> &'static str;
    fn on_pointer_down(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos);
    fn on_pointer_move(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos);
    fn on_pointer_up(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos);
    fn reset(&mut self);
}
