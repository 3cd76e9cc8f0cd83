// src/editor/tools/walls.rs

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::Tool;
use crate::grid::Grid;
use crate::plan::{GridCell, Wall};
use crate::store::LayoutStore;
use crate::utils::PixelPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WallState {
    Idle,
    Dragging { start: GridCell, end: GridCell },
}

/// Drag-to-draw walls. Pointer-down captures the start cell, pointer-move
/// tracks the snapped preview, pointer-up commits the snapped wall.
pub struct WallTool {
    state: WallState,
}

impl Default for WallTool {
    fn default() -> Self {
        Self {
            state: WallState::Idle,
        }
    }
}

impl WallTool {
    /// The axis-snapped wall currently being dragged, if any, for preview
    /// rendering.
    pub fn preview(&self) -> Option<Wall> {
        match self.state {
            WallState::Idle => None,
            WallState::Dragging { start, end } => Some(Wall::snapped(start, end)),
        }
    }

    /// Removes the most recently committed wall. No-op when there is none.
    pub fn undo_last(&mut self, store: &Arc<RwLock<LayoutStore>>) -> Option<Wall> {
        store.write().undo_last_wall()
    }
}

impl Tool for WallTool {
    fn name(&self) -> &'static str {
        "walls"
    }

    fn on_pointer_down(
        &mut self,
        _store: &Arc<RwLock<LayoutStore>>,
        grid: &Grid,
        pos: PixelPos,
    ) {
        match self.state {
            WallState::Idle => {
                let start = grid.pixel_to_cell(pos);
                self.state = WallState::Dragging { start, end: start };
            }
            // The pointer re-entered the canvas with the button still held;
            // the drag in progress simply continues.
            WallState::Dragging { .. } => {}
        }
    }

    fn on_pointer_move(
        &mut self,
        _store: &Arc<RwLock<LayoutStore>>,
        grid: &Grid,
        pos: PixelPos,
    ) {
        if let WallState::Dragging { start, .. } = self.state {
            self.state = WallState::Dragging {
                start,
                end: grid.pixel_to_cell(pos),
            };
        }
    }

    fn on_pointer_up(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos) {
        match self.state {
            // Released outside the canvas earlier, then clicked again: the
            // stray up event is ignored.
            WallState::Idle => {}
            WallState::Dragging { start, .. } => {
                let wall = Wall::snapped(start, grid.pixel_to_cell(pos));
                debug!("committing wall {:?} -> {:?}", wall.start, wall.end);
                store.write().add_wall(wall);
                self.state = WallState::Idle;
            }
        }
    }

    fn reset(&mut self) {
        self.state = WallState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn fixture() -> (WallTool, Arc<RwLock<LayoutStore>>, Grid) {
        let store = Arc::new(RwLock::new(LayoutStore::new(Box::new(MemoryBackend::new()))));
        let grid = Grid::new(200.0, 200.0, 10.0, 2.0, 16.0);
        (WallTool::default(), store, grid)
    }

    // Pixel centre of a lattice cell, for driving the tool with pointer
    // positions instead of raw cells.
    fn at(grid: &Grid, x: i32, y: i32) -> PixelPos {
        grid.cell_to_pixel(GridCell::new(x, y)).unwrap()
    }

    #[test]
    fn test_full_drag_commits_snapped_wall() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_down(&store, &grid, at(&grid, 2, 2));
        tool.on_pointer_move(&store, &grid, at(&grid, 5, 3));
        assert_eq!(
            tool.preview(),
            Some(Wall {
                start: GridCell::new(2, 2),
                end: GridCell::new(5, 2),
            })
        );
        tool.on_pointer_up(&store, &grid, at(&grid, 5, 3));

        let store = store.read();
        assert_eq!(store.walls().len(), 1);
        assert_eq!(store.walls()[0].end, GridCell::new(5, 2));
        assert_eq!(tool.preview(), None);
    }

    #[test]
    fn test_pointer_down_while_dragging_is_noop() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_down(&store, &grid, at(&grid, 2, 2));
        // Pointer left and re-entered without a mouse-up in between.
        tool.on_pointer_down(&store, &grid, at(&grid, 7, 7));
        tool.on_pointer_up(&store, &grid, at(&grid, 2, 6));
        assert_eq!(store.read().walls()[0].start, GridCell::new(2, 2));
    }

    #[test]
    fn test_pointer_up_while_idle_is_noop() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_up(&store, &grid, at(&grid, 4, 4));
        assert!(!store.read().has_walls());
    }

    #[test]
    fn test_drag_leaving_canvas_clamps_to_edge() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_down(&store, &grid, at(&grid, 8, 5));
        tool.on_pointer_up(&store, &grid, PixelPos::new(500.0, 90.0));
        let store = store.read();
        assert_eq!(store.walls()[0].end, GridCell::new(10, 5));
    }

    #[test]
    fn test_undo_last() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_down(&store, &grid, at(&grid, 0, 0));
        tool.on_pointer_up(&store, &grid, at(&grid, 0, 4));
        assert!(tool.undo_last(&store).is_some());
        assert!(tool.undo_last(&store).is_none());
        assert!(!store.read().has_walls());
    }

    #[test]
    fn test_reset_abandons_drag() {
        let (mut tool, store, grid) = fixture();
        tool.on_pointer_down(&store, &grid, at(&grid, 2, 2));
        tool.reset();
        assert_eq!(tool.preview(), None);
        tool.on_pointer_up(&store, &grid, at(&grid, 5, 5));
        assert!(!store.read().has_walls());
    }
}
