//! Regular tilings of the canvas.
//!
//! Responsibilities:
//! - one lazy generator per shape family (`squares`, `triangles`, `hexagons`)
//! - cover `[0, width) x [0, height)` with no gaps and no overlaps
//! - keep geometry in unrounded canvas coordinates
//!
//! Tiles may hang past the canvas edge. Every family emits clockwise polygons
//! (positive [`Polygon::signed_area`]), and vertices shared by neighbouring
//! tiles are bit-identical so a rasterizer sees identical edges from both sides.

mod grid;
mod hexagons;
mod polygon;
mod squares;
mod triangles;

use std::fmt;
use std::str::FromStr;

pub use hexagons::HexagonTiles;
pub use polygon::Polygon;
pub use squares::SquareTiles;
pub use triangles::TriangleTiles;

/// Side length used when the caller does not pick one.
pub const DEFAULT_TILE_SIZE: f64 = 25.0;

/// sin(60°), the height of an equilateral triangle with unit side.
pub(crate) const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Tile family.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Squares,
    Triangles,
    Hexagons,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Squares, Shape::Triangles, Shape::Hexagons];

    /// Vertices per emitted polygon.
    pub const fn vertex_count(self) -> usize {
        match self {
            Shape::Squares => 4,
            Shape::Triangles => 3,
            Shape::Hexagons => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Squares => "squares",
            Shape::Triangles => "triangles",
            Shape::Hexagons => "hexagons",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownShape(s.to_owned()))
    }
}

/// A shape name outside the three supported families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape {:?} (expected squares, triangles or hexagons)", self.0)
    }
}

impl std::error::Error for UnknownShape {}

/// Lazy, finite sequence of tiles for one shape family.
///
/// The size hint is exact.
#[derive(Debug, Clone)]
pub enum Tiling {
    Squares(SquareTiles),
    Triangles(TriangleTiles),
    Hexagons(HexagonTiles),
}

impl Iterator for Tiling {
    type Item = Polygon;

    #[inline]
    fn next(&mut self) -> Option<Polygon> {
        match self {
            Tiling::Squares(t) => t.next(),
            Tiling::Triangles(t) => t.next(),
            Tiling::Hexagons(t) => t.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Tiling::Squares(t) => t.size_hint(),
            Tiling::Triangles(t) => t.size_hint(),
            Tiling::Hexagons(t) => t.size_hint(),
        }
    }
}

impl ExactSizeIterator for Tiling {}

/// Tiles a `width` x `height` canvas with `shape`.
///
/// A zero dimension yields no tiles.
///
/// # Panics
/// Panics if `tile_size` is not a positive finite number.
pub fn generate(shape: Shape, width: u32, height: u32, tile_size: f64) -> Tiling {
    match shape {
        Shape::Squares => Tiling::Squares(generate_squares(width, height, tile_size)),
        Shape::Triangles => Tiling::Triangles(generate_triangles(width, height, tile_size)),
        Shape::Hexagons => Tiling::Hexagons(generate_hexagons(width, height, tile_size)),
    }
}

pub fn generate_squares(width: u32, height: u32, tile_size: f64) -> SquareTiles {
    SquareTiles::new(width, height, tile_size)
}

pub fn generate_triangles(width: u32, height: u32, tile_size: f64) -> TriangleTiles {
    TriangleTiles::new(width, height, tile_size)
}

pub fn generate_hexagons(width: u32, height: u32, tile_size: f64) -> HexagonTiles {
    HexagonTiles::new(width, height, tile_size)
}

#[inline]
pub(crate) fn check_tile_size(tile_size: f64) {
    assert!(
        tile_size.is_finite() && tile_size > 0.0,
        "tile size must be positive and finite, got {tile_size}"
    );
}
