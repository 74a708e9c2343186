use crate::coords::{Point, Rect};

/// Closed polygon given by its vertices in order.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// # Panics
    /// Panics if fewer than three vertices are given.
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(
            vertices.len() >= 3,
            "a polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        Self { vertices }
    }

    /// Builds a polygon from tile-unit coordinates scaled by `(sx, sy)`.
    pub(crate) fn from_units(units: &[(f64, f64)], sx: f64, sy: f64) -> Self {
        Self::new(units.iter().map(|&(x, y)| Point::new(x, y).scale(sx, sy)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Rect {
        // Non-empty by construction.
        Rect::bounding(self.vertices.iter().copied()).unwrap_or_default()
    }

    /// Shoelace area. Positive means clockwise on screen (y-down).
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() * 0.5
    }

    /// Closed containment: points on an edge count as inside.
    pub fn contains(&self, p: Point) -> bool {
        if self.edges().any(|(a, b)| on_segment(a, b, p)) {
            return true;
        }

        // Even-odd ray cast towards +X.
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len = a.distance(b);
    let eps = 1e-9 * (1.0 + len + p.x.abs() + p.y.abs());
    let cross = ab.x * ap.y - ab.y * ap.x;
    if cross.abs() > eps * len.max(1.0) {
        return false;
    }
    let dot = ab.x * ap.x + ab.y * ap.y;
    dot >= -eps && dot <= len * len + eps
}
