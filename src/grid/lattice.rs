// src/grid/lattice.rs

use crate::errors::PlanError;
use crate::plan::{Colour, GridCell};
use crate::utils::util::clamp_index;
use crate::utils::PixelPos;

/// One lattice point: a fixed pixel position plus a transient colour. The
/// colour never survives a redraw; `Grid::reinitialize` resets every dot.
#[derive(Debug, Clone)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub colour: Colour,
}

/// The rectangular dot lattice and the pixel<->cell coordinate mapping.
///
/// Point `(i, j)` sits at pixel
/// `(corner_offset + dot_radius + i * spacing, corner_offset + dot_radius + j * spacing)`
/// for every pixel strictly inside `size - corner_offset - dot_radius`.
pub struct Grid {
    surface_width: f32,
    surface_height: f32,
    corner_offset: f32,
    dot_radius: f32,
    spacing: f32,
    // Indexed points[x_coord][y_coord], matching GridCell.
    points: Vec<Vec<Dot>>,
}

impl Grid {
    pub fn new(
        surface_width: f32,
        surface_height: f32,
        corner_offset: f32,
        dot_radius: f32,
        spacing: f32,
    ) -> Self {
        let mut grid = Self {
            surface_width,
            surface_height,
            corner_offset,
            dot_radius,
            spacing,
            points: Vec::new(),
        };
        grid.reinitialize();
        grid
    }

    /// Rebuilds the lattice, resetting every dot to the default colour.
    /// Called at the start of each redraw so highlighting (hover, interior
    /// dimming) is recomputed from scratch instead of lingering.
    pub fn reinitialize(&mut self) {
        let x_start = self.corner_offset + self.dot_radius;
        let x_end = self.surface_width - self.corner_offset - self.dot_radius;
        let y_start = self.corner_offset + self.dot_radius;
        let y_end = self.surface_height - self.corner_offset - self.dot_radius;

        self.points.clear();
        let mut x = x_start;
        while x < x_end {
            let mut column = Vec::new();
            let mut y = y_start;
            while y < y_end {
                column.push(Dot {
                    x,
                    y,
                    colour: Colour::DOT,
                });
                y += self.spacing;
            }
            self.points.push(column);
            x += self.spacing;
        }
    }

    /// Lattice dimensions as (width, height) in cells.
    pub fn dimensions(&self) -> (usize, usize) {
        let width = self.points.len();
        let height = self.points.first().map_or(0, Vec::len);
        (width, height)
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    // Inverse of the lattice layout along one axis. No clamping here: raw
    // scaling is what `displacement` subtracts.
    fn scale(&self, surface_val: f32) -> i32 {
        ((surface_val - self.corner_offset) / self.spacing).round() as i32
    }

    /// Maps a pixel position to the nearest lattice cell, clamped to
    /// `[0, dimension - 1]` per axis. Clamping rather than rejection is
    /// deliberate: a drag that leaves the surface still resolves to a valid
    /// edge cell.
    pub fn pixel_to_cell(&self, pos: PixelPos) -> GridCell {
        let (width, height) = self.dimensions();
        GridCell {
            x_coord: clamp_index(self.scale(pos.x), 0, width as i32 - 1),
            y_coord: clamp_index(self.scale(pos.y), 0, height as i32 - 1),
        }
    }

    /// Pixel position of a lattice cell. Every producer of cells goes
    /// through `pixel_to_cell` or clamped arithmetic, so an out-of-range
    /// lookup here is a caller bug, not a user-reachable condition.
    pub fn cell_to_pixel(&self, cell: GridCell) -> Result<PixelPos, PlanError> {
        self.dot(cell)
            .map(|dot| PixelPos::new(dot.x, dot.y))
            .ok_or_else(|| self.out_of_range(cell))
    }

    /// Grid-unit delta between two pixel positions. Each endpoint is scaled
    /// and rounded independently before subtracting, so the result can
    /// disagree with a single delta conversion by one cell near rounding
    /// boundaries. That approximation is inherited behavior; downstream
    /// position clamping bounds whatever comes out.
    pub fn displacement(&self, from: PixelPos, to: PixelPos) -> (i32, i32) {
        (
            self.scale(to.x) - self.scale(from.x),
            self.scale(to.y) - self.scale(from.y),
        )
    }

    pub fn set_dot_colour(&mut self, cell: GridCell, colour: Colour) -> Result<(), PlanError> {
        let err = self.out_of_range(cell);
        match self.dot_mut(cell) {
            Some(dot) => {
                if dot.colour != colour {
                    dot.colour = colour;
                }
                Ok(())
            }
            None => Err(err),
        }
    }

    pub fn dot(&self, cell: GridCell) -> Option<&Dot> {
        if cell.x_coord < 0 || cell.y_coord < 0 {
            return None;
        }
        self.points
            .get(cell.x_coord as usize)
            .and_then(|column| column.get(cell.y_coord as usize))
    }

    fn dot_mut(&mut self, cell: GridCell) -> Option<&mut Dot> {
        if cell.x_coord < 0 || cell.y_coord < 0 {
            return None;
        }
        self.points
            .get_mut(cell.x_coord as usize)
            .and_then(|column| column.get_mut(cell.y_coord as usize))
    }

    /// Iterates all dots in column order.
    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.points.iter().flatten()
    }

    fn out_of_range(&self, cell: GridCell) -> PlanError {
        let (width, height) = self.dimensions();
        PlanError::OutOfRange {
            x: cell.x_coord,
            y: cell.y_coord,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    // The reference lattice from the original planner: 200x200 surface,
    // offset 10, radius 2, spacing 16 -> 11x11 cells.
    fn reference_grid() -> Grid {
        Grid::new(200.0, 200.0, 10.0, 2.0, 16.0)
    }

    #[test]
    fn test_reference_dimensions() {
        let grid = reference_grid();
        assert_eq!(grid.dimensions(), (11, 11));
    }

    #[test]
    fn test_dot_pixel_positions() {
        let grid = reference_grid();
        let origin = grid.dot(GridCell::new(0, 0)).unwrap();
        assert_approx_eq!(origin.x, 12.0);
        assert_approx_eq!(origin.y, 12.0);
        let far = grid.dot(GridCell::new(10, 10)).unwrap();
        assert_approx_eq!(far.x, 12.0 + 10.0 * 16.0);
        assert_approx_eq!(far.y, 12.0 + 10.0 * 16.0);
    }

    #[test]
    fn test_pixel_to_cell_reference_points() {
        let grid = reference_grid();
        assert_eq!(
            grid.pixel_to_cell(PixelPos::new(10.0, 10.0)),
            GridCell::new(0, 0)
        );
        // Far outside the surface clamps to the far corner.
        assert_eq!(
            grid.pixel_to_cell(PixelPos::new(300.0, 300.0)),
            GridCell::new(10, 10)
        );
        // Negative positions clamp to the origin.
        assert_eq!(
            grid.pixel_to_cell(PixelPos::new(-50.0, -50.0)),
            GridCell::new(0, 0)
        );
    }

    #[test]
    fn test_pixel_to_cell_always_in_bounds() {
        let grid = reference_grid();
        let (width, height) = grid.dimensions();
        let mut px = -40.0f32;
        while px < 260.0 {
            let cell = grid.pixel_to_cell(PixelPos::new(px, 260.0 - px));
            assert!(cell.x_coord >= 0 && cell.x_coord < width as i32);
            assert!(cell.y_coord >= 0 && cell.y_coord < height as i32);
            px += 7.3;
        }
    }

    #[test]
    fn test_cell_to_pixel_round_trips_through_dots() {
        let grid = reference_grid();
        let pixel = grid.cell_to_pixel(GridCell::new(3, 7)).unwrap();
        assert_eq!(grid.pixel_to_cell(pixel), GridCell::new(3, 7));
    }

    #[test]
    fn test_cell_to_pixel_out_of_range() {
        let grid = reference_grid();
        assert!(matches!(
            grid.cell_to_pixel(GridCell::new(11, 0)),
            Err(PlanError::OutOfRange { .. })
        ));
        assert!(matches!(
            grid.cell_to_pixel(GridCell::new(0, -1)),
            Err(PlanError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_displacement_rounds_per_endpoint() {
        let grid = reference_grid();
        assert_eq!(
            grid.displacement(PixelPos::new(12.0, 12.0), PixelPos::new(44.0, 28.0)),
            (2, 1)
        );
        // Both endpoints round to the same cell even though the raw delta
        // (12.8 px = 0.8 cells) would round to a one-cell move. Inherited
        // per-endpoint rounding, kept on purpose.
        assert_eq!(
            grid.displacement(PixelPos::new(19.6, 12.0), PixelPos::new(32.4, 12.0)),
            (0, 0)
        );
    }

    #[test]
    fn test_reinitialize_resets_colours() {
        let mut grid = reference_grid();
        grid.set_dot_colour(GridCell::new(4, 4), Colour::HOVER).unwrap();
        assert_eq!(grid.dot(GridCell::new(4, 4)).unwrap().colour, Colour::HOVER);
        grid.reinitialize();
        assert_eq!(grid.dot(GridCell::new(4, 4)).unwrap().colour, Colour::DOT);
    }

    #[test]
    fn test_set_dot_colour_out_of_range() {
        let mut grid = reference_grid();
        assert!(grid.set_dot_colour(GridCell::new(40, 4), Colour::HOVER).is_err());
    }
}
