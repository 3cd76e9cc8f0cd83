// src/plan/colour.rs
use serde::{Deserialize, Serialize};

/// An RGB colour. Dot colours are transient render state; the colour on a
/// placed object marks selection and is normalized away before persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default dot colour.
    pub const DOT: Colour = Colour::new(0x00, 0x00, 0x00);
    /// Nearest-dot hover highlight.
    pub const HOVER: Colour = Colour::new(0xff, 0x00, 0x00);
    /// Dots inside a piece of furniture.
    pub const DIMMED: Colour = Colour::new(0xdd, 0xdd, 0xdd);
    /// Committed walls and the drag preview.
    pub const WALL: Colour = Colour::new(0x00, 0xff, 0x00);
    /// Placed objects in their unselected state.
    pub const OBJECT: Colour = Colour::new(0x00, 0x00, 0xff);
    /// The single selected object.
    pub const SELECTED: Colour = Colour::new(0xff, 0xa5, 0x00);
}

impl Default for Colour {
    fn default() -> Self {
        Colour::DOT
    }
}
