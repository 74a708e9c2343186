use super::grid::{GridCursor, ceil_count};
use super::{Polygon, SIN_60, check_tile_size};

/// Regular flat-top hexagons.
///
/// With `s` the side and `h` the full height, the vertices around `(x, y)` are
///
/// ```text
///                     (x, y) +-----+ (x + s, y)
///                           /       \
///    (x - s/2, y + h / 2)  +         +  (x + 3s/2, y + h/2)
///                           \       /
///                 (x, y + h) +-----+ (x + s, y + h)
/// ```
///
/// Columns advance three sides at a time. Each row sits half a hexagon below
/// the previous one, and odd rows shift right by `3s/2` to fill the gaps.
/// Rows start at -1 so the top edge has no notches.
#[derive(Debug, Clone)]
pub struct HexagonTiles {
    grid: GridCursor,
    side: f64,
    hex_height: f64,
}

impl HexagonTiles {
    pub fn new(width: u32, height: u32, side: f64) -> Self {
        check_tile_size(side);
        let hex_height = 2.0 * side * SIN_60;
        let grid = if width == 0 || height == 0 {
            GridCursor::empty()
        } else {
            // Keep adding columns while the even-row hexagon's left tip is
            // inside the canvas; the last one then reaches `width`.
            let cols = ceil_count((f64::from(width) / side + 1.5) / 3.0);
            let rows = 2 * ceil_count(f64::from(height) / hex_height) + 2;
            GridCursor::new(-1, 3, cols, -1, rows)
        };
        Self { grid, side, hex_height }
    }

    #[inline]
    pub fn hex_height(&self) -> f64 {
        self.hex_height
    }
}

impl Iterator for HexagonTiles {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        let (col, row) = self.grid.next()?;
        let x = col as f64 + if row.rem_euclid(2) == 1 { 1.5 } else { 0.0 };
        // Row offset applied in tile units so shared vertices stay exact.
        let top = row as f64 * 0.5;
        let mid = top + 0.5;
        let bottom = top + 1.0;

        Some(Polygon::from_units(
            &[
                (x, top),
                (x + 1.0, top),
                (x + 1.5, mid),
                (x + 1.0, bottom),
                (x, bottom),
                (x - 0.5, mid),
            ],
            self.side,
            self.hex_height,
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.grid.size_hint()
    }
}
