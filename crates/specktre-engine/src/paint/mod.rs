//! Color model and gradient sampling.
//!
//! Scope:
//! - 8-bit RGB color representation
//! - random draws between two endpoint colors
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{
    GradientSampler, GradientSpec, SamplingPolicy, UnknownPolicy, sample_gradient,
};
