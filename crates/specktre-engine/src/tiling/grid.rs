/// Column-major walk over a rectangular range of grid indices.
///
/// Columns are the outer loop and rows the inner one, so `next` yields
/// `(first_col, first_row)`, `(first_col, first_row + 1)`, ...
#[derive(Debug, Clone)]
pub(crate) struct GridCursor {
    first_col: i64,
    col_step: i64,
    first_row: i64,
    cols: usize,
    rows: usize,
    index: usize,
}

impl GridCursor {
    pub(crate) fn new(first_col: i64, col_step: i64, cols: usize, first_row: i64, rows: usize) -> Self {
        Self { first_col, col_step, first_row, cols, rows, index: 0 }
    }

    pub(crate) fn empty() -> Self {
        Self::new(0, 1, 0, 0, 0)
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.cols * self.rows - self.index
    }
}

impl Iterator for GridCursor {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.remaining() == 0 {
            return None;
        }
        let col = self.first_col + (self.index / self.rows) as i64 * self.col_step;
        let row = self.first_row + (self.index % self.rows) as i64;
        self.index += 1;
        Some((col, row))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// `ceil(x)` as a count, for positive finite `x`.
#[inline]
pub(crate) fn ceil_count(x: f64) -> usize {
    x.ceil() as usize
}

/// `floor(x)` as a count, for positive finite `x`.
#[inline]
pub(crate) fn floor_count(x: f64) -> usize {
    x.floor() as usize
}
