//! Mapping between terminal cells and the field's virtual pixels.

use ratatui::layout::Rect;
use stardrift_field::Bounds;

/// Virtual pixels per terminal column.
pub const CELL_WIDTH: f32 = 8.0;
/// Virtual pixels per terminal row. Cells are roughly twice as tall as wide.
pub const CELL_HEIGHT: f32 = 16.0;

/// The terminal area the field is drawn into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Field bounds covering the whole area.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.area.width as f32 * CELL_WIDTH,
            self.area.height as f32 * CELL_HEIGHT,
        )
    }

    /// Centre of the cell at absolute terminal position `(column, row)`.
    pub fn cell_center(&self, column: u16, row: u16) -> (f32, f32) {
        let col = column.saturating_sub(self.area.x) as f32;
        let row = row.saturating_sub(self.area.y) as f32;
        ((col + 0.5) * CELL_WIDTH, (row + 0.5) * CELL_HEIGHT)
    }

    /// Absolute terminal cell containing the virtual point, if inside the area.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if self.area.is_empty() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let bounds = self.bounds();
        if !bounds.contains(x, y) {
            return None;
        }
        // The far edges belong to the last column / row.
        let col = ((x / CELL_WIDTH) as u16).min(self.area.width - 1);
        let row = ((y / CELL_HEIGHT) as u16).min(self.area.height - 1);
        Some((self.area.x + col, self.area.y + row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_scale_with_area() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.bounds(), Bounds::new(640.0, 384.0));
    }

    #[test]
    fn test_cell_round_trip() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        let (x, y) = viewport.cell_center(10, 5);
        assert_eq!((x, y), (84.0, 88.0));
        assert_eq!(viewport.cell_at(x, y), Some((10, 5)));
    }

    #[test]
    fn test_edges_and_outside() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.cell_at(640.0, 384.0), Some((79, 23)));
        assert_eq!(viewport.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.cell_at(-1.0, 3.0), None);
        assert_eq!(viewport.cell_at(641.0, 3.0), None);
        assert_eq!(viewport.cell_at(f32::NAN, 3.0), None);
        assert_eq!(Viewport::default().cell_at(0.0, 0.0), None);
    }
}
