use super::grid::{GridCursor, ceil_count, floor_count};
use super::{Polygon, SIN_60, check_tile_size};

/// Equilateral triangles with one side parallel to the x-axis.
///
/// Every grid cell `(x, y)` contributes a pair sharing an edge:
///
/// ```text
///           (x, y) +-----+ (x + 1, y)
///                   \   / \
///                    \ /   \
///    (x + 1/2, y + 1) +-----+ (x + 3/2, y + 1)
/// ```
///
/// Odd rows shift right by half a side so they interlock with the row above.
/// Columns start at -1 to cover the left edge.
#[derive(Debug, Clone)]
pub struct TriangleTiles {
    grid: GridCursor,
    side: f64,
    row_height: f64,
    pending: Option<Polygon>,
}

impl TriangleTiles {
    pub fn new(width: u32, height: u32, side: f64) -> Self {
        check_tile_size(side);
        let row_height = side * SIN_60;
        let grid = if width == 0 || height == 0 {
            GridCursor::empty()
        } else {
            let cols = floor_count(f64::from(width) / side) + 2;
            let rows = ceil_count(f64::from(height) / row_height) + 1;
            GridCursor::new(-1, 1, cols, 0, rows)
        };
        Self { grid, side, row_height, pending: None }
    }

    #[inline]
    pub fn row_height(&self) -> f64 {
        self.row_height
    }
}

impl Iterator for TriangleTiles {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if let Some(up) = self.pending.take() {
            return Some(up);
        }

        let (col, row) = self.grid.next()?;
        let x = col as f64 + if row.rem_euclid(2) == 1 { 0.5 } else { 0.0 };
        let y = row as f64;

        let down = Polygon::from_units(
            &[(x, y), (x + 1.0, y), (x + 0.5, y + 1.0)],
            self.side,
            self.row_height,
        );
        self.pending = Some(Polygon::from_units(
            &[(x + 1.0, y), (x + 1.5, y + 1.0), (x + 0.5, y + 1.0)],
            self.side,
            self.row_height,
        ));
        Some(down)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.remaining() * 2 + usize::from(self.pending.is_some());
        (n, Some(n))
    }
}
