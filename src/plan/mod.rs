// src/plan/mod.rs
pub mod cell;
pub mod colour;
pub mod placed;
pub mod template;
pub mod wall;

pub use cell::GridCell;
pub use colour::Colour;
pub use placed::PlacedObject;
pub use template::ObjectTemplate;
pub use wall::Wall;
