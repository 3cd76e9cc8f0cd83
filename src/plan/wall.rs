// src/plan/wall.rs
use serde::{Deserialize, Serialize};

use super::GridCell;

/// An axis-aligned wall between two lattice cells. Immutable once committed;
/// construction goes through `snapped` so `start.x == end.x` or
/// `start.y == end.y` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub start: GridCell,
    pub end: GridCell,
}

impl Wall {
    /// Builds a wall from a drag, forcing the end cell onto the start cell's
    /// row or column. The axis with the smaller absolute delta collapses:
    /// `dx < dy` gives a vertical wall, anything else (ties included) a
    /// horizontal one.
    pub fn snapped(start: GridCell, end: GridCell) -> Self {
        let dx = (end.x_coord - start.x_coord).abs();
        let dy = (end.y_coord - start.y_coord).abs();
        let mut true_end = end;
        if dx < dy {
            true_end.x_coord = start.x_coord;
        } else {
            true_end.y_coord = start.y_coord;
        }
        Self {
            start,
            end: true_end,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y_coord == self.end.y_coord
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x_coord == self.end.x_coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_aligned_drag_is_unchanged() {
        let wall = Wall::snapped(GridCell::new(2, 2), GridCell::new(2, 5));
        assert_eq!(wall.start, GridCell::new(2, 2));
        assert_eq!(wall.end, GridCell::new(2, 5));
        assert!(wall.is_vertical());
    }

    #[test]
    fn test_diagonal_drag_snaps_to_longer_axis() {
        // dx=3, dy=1 -> horizontal
        let wall = Wall::snapped(GridCell::new(2, 2), GridCell::new(5, 3));
        assert_eq!(wall.end, GridCell::new(5, 2));
        assert!(wall.is_horizontal());

        // dx=1, dy=3 -> vertical
        let wall = Wall::snapped(GridCell::new(2, 2), GridCell::new(3, 5));
        assert_eq!(wall.end, GridCell::new(2, 5));
        assert!(wall.is_vertical());
    }

    #[test]
    fn test_tie_breaks_horizontal() {
        let wall = Wall::snapped(GridCell::new(1, 1), GridCell::new(4, 4));
        assert_eq!(wall.end, GridCell::new(4, 1));
        assert!(wall.is_horizontal());
    }

    #[test]
    fn test_every_snap_is_axis_aligned() {
        for ex in -3..6 {
            for ey in -3..6 {
                let wall = Wall::snapped(GridCell::new(1, 2), GridCell::new(ex, ey));
                assert!(
                    wall.is_horizontal() || wall.is_vertical(),
                    "({}, {}) produced a diagonal wall",
                    ex,
                    ey
                );
            }
        }
    }
}
