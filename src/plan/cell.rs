// src/plan/cell.rs
use serde::{Deserialize, Serialize};

/// An integer lattice coordinate, distinct from a pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x_coord: i32,
    pub y_coord: i32,
}

impl GridCell {
    pub fn new(x_coord: i32, y_coord: i32) -> Self {
        Self { x_coord, y_coord }
    }
}
