// src/plan/placed.rs
use serde::{Deserialize, Serialize};

use super::{Colour, ObjectTemplate};

/// A furniture instance on the grid. Instances are independent even when
/// they share a template name. The colour tracks selection state and is
/// normalized back to `Colour::OBJECT` before any snapshot is encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub upper_left_x: i32,
    pub upper_left_y: i32,
    pub colour: Colour,
}

impl PlacedObject {
    /// Stamps a new instance from a catalog template at the grid origin.
    pub fn from_template(template: &ObjectTemplate) -> Self {
        Self {
            name: template.name.clone(),
            width: template.width,
            height: template.height,
            upper_left_x: 0,
            upper_left_y: 0,
            colour: Colour::OBJECT,
        }
    }

    /// Lattice x of the right edge.
    pub fn right_x(&self) -> i32 {
        self.upper_left_x + self.width
    }

    /// Lattice y of the bottom edge.
    pub fn bottom_y(&self) -> i32 {
        self.upper_left_y + self.height
    }

    /// Rotation swaps the footprint in place; the anchor corner stays put.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Copy with the selection highlight stripped, for snapshots.
    pub fn normalized(&self) -> Self {
        Self {
            colour: Colour::OBJECT,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_at_origin() {
        let tpl = ObjectTemplate::new("bed", 4, 3).unwrap();
        let obj = PlacedObject::from_template(&tpl);
        assert_eq!((obj.upper_left_x, obj.upper_left_y), (0, 0));
        assert_eq!((obj.right_x(), obj.bottom_y()), (4, 3));
        assert_eq!(obj.colour, Colour::OBJECT);
    }

    #[test]
    fn test_rotate_swaps_footprint() {
        let tpl = ObjectTemplate::new("desk", 5, 2).unwrap();
        let mut obj = PlacedObject::from_template(&tpl);
        obj.rotate();
        assert_eq!((obj.width, obj.height), (2, 5));
        obj.rotate();
        assert_eq!((obj.width, obj.height), (5, 2));
    }

    #[test]
    fn test_normalized_strips_selection_colour() {
        let tpl = ObjectTemplate::new("lamp", 1, 1).unwrap();
        let mut obj = PlacedObject::from_template(&tpl);
        obj.colour = Colour::SELECTED;
        assert_eq!(obj.normalized().colour, Colour::OBJECT);
    }
}
