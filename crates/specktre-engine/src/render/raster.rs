//! Scanline polygon fill.
//!
//! A pixel `(x, y)` belongs to a polygon when its centre `(x + 0.5, y + 0.5)`
//! is inside. Edges are half-open: a centre exactly on a left or top edge is
//! inside, on a right or bottom edge it is not. Two tiles sharing an edge
//! therefore split the pixels along it with neither gaps nor double writes,
//! provided the shared vertices are bit-identical.

use std::ops::Range;

use crate::tiling::Polygon;

/// Calls `visit(row, columns)` for every horizontal span of pixels covered by
/// `polygon`, clipped to a `width` x `height` canvas.
///
/// Spans are reported top to bottom, left to right. Self-intersecting
/// polygons are filled with the even-odd rule.
pub fn fill_polygon(polygon: &Polygon, width: u32, height: u32, mut visit: impl FnMut(u32, Range<u32>)) {
    let bounds = polygon.bounds();
    let first_row = first_center_at_or_after(bounds.min().y, height);
    let last_row = first_center_at_or_after(bounds.max().y, height);

    let mut crossings: Vec<f64> = Vec::with_capacity(polygon.len());

    for row in first_row..last_row {
        let yc = f64::from(row) + 0.5;

        crossings.clear();
        for (a, b) in polygon.edges() {
            // Orient every edge top to bottom so both tiles sharing it
            // compute the same crossing.
            let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
            if top.y == bottom.y || yc < top.y || yc >= bottom.y {
                continue;
            }
            let x = top.x + (yc - top.y) * (bottom.x - top.x) / (bottom.y - top.y);
            crossings.push(x);
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = first_center_at_or_after(pair[0], width);
            let end = first_center_at_or_after(pair[1], width);
            if start < end {
                visit(row, start..end);
            }
        }
    }
}

/// Index of the first pixel whose centre is `>= coord`, clamped to `[0, limit]`.
#[inline]
fn first_center_at_or_after(coord: f64, limit: u32) -> u32 {
    let i = (coord - 0.5).ceil();
    if i <= 0.0 {
        0
    } else if i >= f64::from(limit) {
        limit
    } else {
        i as u32
    }
}
