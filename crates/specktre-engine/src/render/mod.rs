//! CPU rendering of tilings into pixel buffers.
//!
//! Responsibilities:
//! - own the pixel storage handed back to callers (`buffer`)
//! - quantize polygons to pixels without gaps, seams or outlines (`raster`)
//! - pair tiles with sampled colors and paint them (`compositor`)

mod buffer;
mod compositor;
pub mod raster;

pub use buffer::PixelBuffer;
pub use compositor::{WallpaperSpec, paint_tiles, render, render_with};
