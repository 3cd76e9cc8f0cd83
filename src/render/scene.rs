// src/render/scene.rs

use log::warn;

use crate::grid::Grid;
use crate::plan::{Colour, GridCell, PlacedObject, Wall};
use crate::render::surface::DrawSurface;
use crate::store::LayoutStore;
use crate::utils::{PixelPos, PixelRect};

const WALL_WIDTH: f32 = 3.0;

/// Full-scene redraw orchestration. Every frame re-derives the picture from
/// the store and the grid; nothing incremental, nothing cached. The draw
/// order is objects, then grid dots, then walls, so dots punch through
/// object interiors and walls sit on top of everything.
pub struct SceneRenderer {
    surface_width: f32,
    surface_height: f32,
}

impl SceneRenderer {
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            surface_width,
            surface_height,
        }
    }

    pub fn redraw(
        &self,
        surface: &mut dyn DrawSurface,
        grid: &mut Grid,
        store: &LayoutStore,
        preview_wall: Option<Wall>,
        hover_cell: Option<GridCell>,
    ) {
        surface.clear(PixelRect::from_size(self.surface_width, self.surface_height));
        grid.reinitialize();

        for object in store.placed_objects() {
            self.draw_object(surface, grid, object);
        }
        if let Some(cell) = hover_cell {
            // The hover highlight wins over interior dimming; both are
            // recomputed from scratch each frame.
            let _ = grid.set_dot_colour(cell, Colour::HOVER);
        }
        self.draw_dots(surface, grid);
        for wall in store.walls() {
            self.draw_wall(surface, grid, wall, Colour::WALL);
        }
        if let Some(wall) = preview_wall {
            self.draw_wall(surface, grid, &wall, Colour::WALL);
        }
    }

    fn draw_dots(&self, surface: &mut dyn DrawSurface, grid: &Grid) {
        let radius = grid.dot_radius();
        for dot in grid.dots() {
            surface.fill_circle(PixelPos::new(dot.x, dot.y), radius, dot.colour);
        }
    }

    fn draw_wall(&self, surface: &mut dyn DrawSurface, grid: &Grid, wall: &Wall, colour: Colour) {
        let (Ok(from), Ok(to)) = (grid.cell_to_pixel(wall.start), grid.cell_to_pixel(wall.end))
        else {
            warn!("wall {:?} -> {:?} is outside the lattice", wall.start, wall.end);
            return;
        };
        surface.stroke_line(from, to, WALL_WIDTH, colour);
    }

    fn draw_object(&self, surface: &mut dyn DrawSurface, grid: &mut Grid, object: &PlacedObject) {
        let ul = GridCell::new(object.upper_left_x, object.upper_left_y);
        let ur = GridCell::new(object.right_x(), object.upper_left_y);
        let bl = GridCell::new(object.upper_left_x, object.bottom_y());
        let br = GridCell::new(object.right_x(), object.bottom_y());

        let (Ok(ul_px), Ok(ur_px), Ok(bl_px), Ok(br_px)) = (
            grid.cell_to_pixel(ul),
            grid.cell_to_pixel(ur),
            grid.cell_to_pixel(bl),
            grid.cell_to_pixel(br),
        ) else {
            warn!("object '{}' is outside the lattice", object.name);
            return;
        };

        surface.stroke_line(ul_px, ur_px, WALL_WIDTH, object.colour);
        surface.stroke_line(ur_px, br_px, WALL_WIDTH, object.colour);
        surface.stroke_line(br_px, bl_px, WALL_WIDTH, object.colour);
        surface.stroke_line(bl_px, ul_px, WALL_WIDTH, object.colour);

        // Name at the left edge, vertically centred, width-limited to the
        // object's pixel footprint.
        let radius = grid.dot_radius();
        let name_pos = PixelPos::new(ul_px.x + radius, (ul_px.y + bl_px.y) / 2.0);
        let max_width = grid.spacing() * object.width as f32 - 2.0 * radius;
        surface.fill_text(&object.name, name_pos, max_width);

        // Make dots in the furniture interior less obtrusive.
        for x in (object.upper_left_x + 1)..object.right_x() {
            for y in (object.upper_left_y + 1)..object.bottom_y() {
                let _ = grid.set_dot_colour(GridCell::new(x, y), Colour::DIMMED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ObjectTemplate;
    use crate::store::MemoryBackend;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Line { colour: Colour },
        Circle { colour: Colour },
        Text { text: String, max_width: f32 },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, _rect: PixelRect) {
            self.ops.push(Op::Clear);
        }
        fn stroke_line(&mut self, _from: PixelPos, _to: PixelPos, _width: f32, colour: Colour) {
            self.ops.push(Op::Line { colour });
        }
        fn fill_circle(&mut self, _center: PixelPos, _radius: f32, colour: Colour) {
            self.ops.push(Op::Circle { colour });
        }
        fn fill_text(&mut self, text: &str, _pos: PixelPos, max_width: f32) {
            self.ops.push(Op::Text {
                text: text.to_string(),
                max_width,
            });
        }
    }

    fn fixture() -> (SceneRenderer, Grid, LayoutStore) {
        (
            SceneRenderer::new(200.0, 200.0),
            Grid::new(200.0, 200.0, 10.0, 2.0, 16.0),
            LayoutStore::new(Box::new(MemoryBackend::new())),
        )
    }

    #[test]
    fn test_draw_order_objects_dots_walls() {
        let (renderer, mut grid, mut store) = fixture();
        store.add_template(ObjectTemplate::new("bed", 4, 3).unwrap());
        store.add_placed_object("bed").unwrap();
        store.add_wall(Wall::snapped(GridCell::new(6, 6), GridCell::new(6, 9)));

        let mut surface = Recorder::default();
        renderer.redraw(&mut surface, &mut grid, &store, None, None);

        assert_eq!(surface.ops[0], Op::Clear);
        let first_circle = surface.ops.iter().position(|op| matches!(op, Op::Circle { .. }));
        let last_object_line = surface
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Line { colour } if *colour == Colour::OBJECT));
        let wall_line = surface
            .ops
            .iter()
            .position(|op| matches!(op, Op::Line { colour } if *colour == Colour::WALL));
        assert!(last_object_line.unwrap() < first_circle.unwrap());
        assert!(first_circle.unwrap() < wall_line.unwrap());
    }

    #[test]
    fn test_interior_dots_are_dimmed_and_label_drawn() {
        let (renderer, mut grid, mut store) = fixture();
        store.add_template(ObjectTemplate::new("bed", 4, 3).unwrap());
        store.add_placed_object("bed").unwrap();

        let mut surface = Recorder::default();
        renderer.redraw(&mut surface, &mut grid, &store, None, None);

        // 3x2 interior dots for a 4x3 outline.
        let dimmed = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { colour } if *colour == Colour::DIMMED))
            .count();
        assert_eq!(dimmed, 6);
        assert!(surface.ops.contains(&Op::Text {
            text: "bed".to_string(),
            max_width: 16.0 * 4.0 - 4.0,
        }));
    }

    #[test]
    fn test_selected_object_outline_uses_selection_colour() {
        let (renderer, mut grid, mut store) = fixture();
        store.add_template(ObjectTemplate::new("bed", 4, 3).unwrap());
        let id = store.add_placed_object("bed").unwrap();
        store.select_object(Some(id)).unwrap();

        let mut surface = Recorder::default();
        renderer.redraw(&mut surface, &mut grid, &store, None, None);

        let selected_lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line { colour } if *colour == Colour::SELECTED))
            .count();
        assert_eq!(selected_lines, 4);
    }

    #[test]
    fn test_hover_highlight_wins_over_dimming() {
        let (renderer, mut grid, mut store) = fixture();
        store.add_template(ObjectTemplate::new("bed", 4, 3).unwrap());
        store.add_placed_object("bed").unwrap();

        let mut surface = Recorder::default();
        renderer.redraw(&mut surface, &mut grid, &store, None, Some(GridCell::new(1, 1)));

        let hovered = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { colour } if *colour == Colour::HOVER))
            .count();
        assert_eq!(hovered, 1);
        // One interior dot traded dimming for the highlight.
        let dimmed = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { colour } if *colour == Colour::DIMMED))
            .count();
        assert_eq!(dimmed, 5);
    }

    #[test]
    fn test_preview_wall_is_drawn_without_committing() {
        let (renderer, mut grid, store) = fixture();
        let preview = Wall::snapped(GridCell::new(1, 1), GridCell::new(1, 4));

        let mut surface = Recorder::default();
        renderer.redraw(&mut surface, &mut grid, &store, Some(preview), None);

        let wall_lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line { colour } if *colour == Colour::WALL))
            .count();
        assert_eq!(wall_lines, 1);
        assert!(!store.has_walls());
    }
}
