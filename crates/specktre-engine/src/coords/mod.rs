//! Coordinate and geometry types shared by the tiling generators and the rasterizer.
//!
//! Canonical canvas space:
//! - Pixels, real-valued
//! - Origin top-left
//! - +X right, +Y down
//!
//! Tiles are generated in this space unrounded; quantization to pixels happens
//! only in `render::raster`.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
