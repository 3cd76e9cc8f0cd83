// src/editor/tools/objects.rs

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use super::Tool;
use crate::errors::PlanError;
use crate::grid::Grid;
use crate::plan::{GridCell, PlacedObject};
use crate::store::LayoutStore;
use crate::utils::util::clamp_index;
use crate::utils::{PixelPos, PixelRect};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ObjectState {
    Idle,
    Moving {
        pointer_origin: PixelPos,
        original_x: i32,
        original_y: i32,
        target: usize,
    },
}

/// Select, move, rotate and delete placed objects. The moving target is an
/// arena id plus a snapshot of its original position, never a held
/// reference, so a deletion mid-interaction cannot dangle.
pub struct ObjectTool {
    state: ObjectState,
}

impl Default for ObjectTool {
    fn default() -> Self {
        Self {
            state: ObjectState::Idle,
        }
    }
}

impl ObjectTool {
    /// Hit-test in pixel space, most-recently-added first so the object
    /// drawn on top wins, with strict bounding-box containment.
    fn find_containing_object(
        store: &LayoutStore,
        grid: &Grid,
        pos: PixelPos,
    ) -> Option<usize> {
        for (id, object) in store.placed_objects().iter().enumerate().rev() {
            match Self::bounding_box(object, grid) {
                Some(rect) if rect.contains_strict(pos) => return Some(id),
                Some(_) => {}
                None => {
                    // Only reachable if the containment invariant was
                    // broken by a caller bug.
                    warn!("placed object {} ('{}') is outside the lattice", id, object.name);
                }
            }
        }
        None
    }

    fn bounding_box(object: &PlacedObject, grid: &Grid) -> Option<PixelRect> {
        let ul = grid
            .cell_to_pixel(GridCell::new(object.upper_left_x, object.upper_left_y))
            .ok()?;
        let br = grid
            .cell_to_pixel(GridCell::new(object.right_x(), object.bottom_y()))
            .ok()?;
        Some(PixelRect::new(ul, br))
    }

    /// Deletes the selected object. Fails silently (log only) when nothing
    /// is selected or the selection is gone; neither should happen through
    /// normal tool transitions.
    pub fn delete_selected(&mut self, store: &Arc<RwLock<LayoutStore>>) {
        if let Err(err) = self.try_delete_selected(store) {
            debug!("delete ignored: {}", err);
        }
    }

    fn try_delete_selected(&mut self, store: &Arc<RwLock<LayoutStore>>) -> Result<(), PlanError> {
        let mut store = store.write();
        let id = store.selected().ok_or(PlanError::NothingSelected)?;
        let removed = store.delete_placed_object(id)?;
        debug!("deleted object {} ('{}')", id, removed.name);
        // Whatever was in progress no longer refers to a live id.
        self.state = ObjectState::Idle;
        Ok(())
    }

    /// Swaps the selected object's width and height in place. Fails
    /// silently when nothing is selected.
    pub fn rotate_selected(&mut self, store: &Arc<RwLock<LayoutStore>>) {
        if let Err(err) = self.try_rotate_selected(store) {
            debug!("rotate ignored: {}", err);
        }
    }

    fn try_rotate_selected(&mut self, store: &Arc<RwLock<LayoutStore>>) -> Result<(), PlanError> {
        let mut store = store.write();
        let id = store.selected().ok_or(PlanError::NothingSelected)?;
        store.rotate_placed_object(id)
    }
}

impl Tool for ObjectTool {
    fn name(&self) -> &'static str {
        "objects"
    }

    fn on_pointer_down(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos) {
        if let ObjectState::Moving { .. } = self.state {
            // Button already held; ignore the duplicate press.
            return;
        }
        let mut store = store.write();
        let Some(id) = Self::find_containing_object(&store, grid, pos) else {
            return;
        };
        if let Err(err) = store.select_object(Some(id)) {
            warn!("hit-tested object could not be selected: {}", err);
            return;
        }
        let object = &store.placed_objects()[id];
        self.state = ObjectState::Moving {
            pointer_origin: pos,
            original_x: object.upper_left_x,
            original_y: object.upper_left_y,
            target: id,
        };
    }

    fn on_pointer_move(&mut self, store: &Arc<RwLock<LayoutStore>>, grid: &Grid, pos: PixelPos) {
        let ObjectState::Moving {
            pointer_origin,
            original_x,
            original_y,
            target,
        } = self.state
        else {
            return;
        };

        let (dx, dy) = grid.displacement(pointer_origin, pos);
        let (grid_w, grid_h) = grid.dimensions();

        let mut store = store.write();
        let Some(object) = store.placed_object(target) else {
            warn!("moving object {} disappeared mid-drag", target);
            self.state = ObjectState::Idle;
            return;
        };
        // Saturate at the boundary instead of rejecting: the object's whole
        // footprint must stay inside the lattice.
        let new_x = clamp_index(original_x + dx, 0, grid_w as i32 - 1 - object.width);
        let new_y = clamp_index(original_y + dy, 0, grid_h as i32 - 1 - object.height);
        if let Err(err) = store.move_placed_object(target, new_x, new_y) {
            warn!("move failed: {}", err);
            self.state = ObjectState::Idle;
        }
    }

    fn on_pointer_up(&mut self, _store: &Arc<RwLock<LayoutStore>>, _grid: &Grid, _pos: PixelPos) {
        // Valid from any state: releasing outside the canvas lands here too.
        self.state = ObjectState::Idle;
    }

    fn reset(&mut self) {
        self.state = ObjectState::Idle;
    }
}
