use super::grid::{GridCursor, floor_count};
use super::{Polygon, check_tile_size};

/// Axis-aligned squares of side `side`, starting at the origin.
///
/// Each axis runs to index `floor(extent / side) + 1` inclusive, so the last
/// column and row always hang past the canvas edge.
#[derive(Debug, Clone)]
pub struct SquareTiles {
    grid: GridCursor,
    side: f64,
}

impl SquareTiles {
    pub fn new(width: u32, height: u32, side: f64) -> Self {
        check_tile_size(side);
        let grid = if width == 0 || height == 0 {
            GridCursor::empty()
        } else {
            let cols = floor_count(f64::from(width) / side) + 2;
            let rows = floor_count(f64::from(height) / side) + 2;
            GridCursor::new(0, 1, cols, 0, rows)
        };
        Self { grid, side }
    }
}

impl Iterator for SquareTiles {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        let (i, j) = self.grid.next()?;
        let (x, y) = (i as f64, j as f64);
        // Clockwise from the top-left corner.
        Some(Polygon::from_units(
            &[(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)],
            self.side,
            self.side,
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.grid.size_hint()
    }
}
