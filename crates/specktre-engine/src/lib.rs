//! Specktre engine crate.
//!
//! This crate owns the rendering core: regular tilings of the canvas, random
//! gradient colors, and the compositor that fills one with the other.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod tiling;

pub use paint::{Color, GradientSampler, GradientSpec, SamplingPolicy, sample_gradient};
pub use render::{PixelBuffer, WallpaperSpec, render};
pub use tiling::{
    DEFAULT_TILE_SIZE, Polygon, Shape, Tiling, generate, generate_hexagons, generate_squares,
    generate_triangles,
};
