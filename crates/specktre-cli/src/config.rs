//! Validation of raw command-line options into a render request.
//!
//! Nothing here exits the process: every problem is a [`ConfigError`] that
//! `main` reports before any rendering starts.

use specktre_engine::paint::{ColorParseError, UnknownPolicy};
use specktre_engine::{Color, GradientSpec, SamplingPolicy, Shape, WallpaperSpec};
use thiserror::Error;

use crate::args::NewArgs;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--size should be in the form WxH; got {0:?}")]
    InvalidSize(String),

    #[error("{name} should be an integer; got {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("{name} should be positive; got {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("{name} is too large; got {value}")]
    TooLarge { name: &'static str, value: i64 },

    #[error("--tile-size should be a positive number; got {0}")]
    InvalidTileSize(f64),

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    #[error(transparent)]
    InvalidPolicy(#[from] UnknownPolicy),
}

/// A validated render request plus where to save it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub spec: WallpaperSpec,
    /// Output file; `None` means pick a fresh name.
    pub name: Option<String>,
}

impl Settings {
    pub fn from_args(args: &NewArgs) -> Result<Self, ConfigError> {
        let shape = if args.triangles {
            Shape::Triangles
        } else if args.hexagons {
            Shape::Hexagons
        } else {
            Shape::Squares
        };

        let (width, height) = parse_size(&args.size)?;

        if !(args.tile_size.is_finite() && args.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(args.tile_size));
        }

        let gradient = GradientSpec::new(parse_color(&args.start)?, parse_color(&args.end)?);
        let policy: SamplingPolicy = args.policy.parse()?;

        let mut spec = WallpaperSpec::new(shape, width, height, gradient)
            .with_tile_size(args.tile_size)
            .with_policy(policy);
        spec.seed = args.seed;

        Ok(Settings {
            spec,
            name: args.name.clone().filter(|n| !n.is_empty()),
        })
    }
}

/// Parses `WxH`, e.g. `2560x1440`.
pub fn parse_size(value: &str) -> Result<(u32, u32), ConfigError> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| ConfigError::InvalidSize(value.to_owned()))?;
    Ok((
        check_positive_integer("Width", w)?,
        check_positive_integer("Height", h)?,
    ))
}

pub fn check_positive_integer(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    let parsed: i64 = value.trim().parse().map_err(|_| ConfigError::NotAnInteger {
        name,
        value: value.to_owned(),
    })?;
    if parsed <= 0 {
        return Err(ConfigError::NotPositive { name, value: parsed });
    }
    u32::try_from(parsed).map_err(|_| ConfigError::TooLarge { name, value: parsed })
}

pub fn parse_color(value: &str) -> Result<Color, ConfigError> {
    Ok(Color::from_hex(value.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(size: &str, start: &str, end: &str) -> NewArgs {
        NewArgs {
            size: size.into(),
            start: start.into(),
            end: end.into(),
            squares: false,
            triangles: false,
            hexagons: false,
            tile_size: 25.0,
            policy: "linear".into(),
            seed: None,
            name: None,
        }
    }

    // ── positive integers ─────────────────────────────────────────────────

    #[test]
    fn positive_integers_pass_through() {
        for v in [1, 7, 2560, u32::MAX as i64] {
            assert_eq!(check_positive_integer("test", &v.to_string()), Ok(v as u32));
        }
    }

    #[test]
    fn non_positive_integers_are_rejected() {
        for v in ["0", "-1", "-2560"] {
            let err = check_positive_integer("test", v).unwrap_err();
            assert!(err.to_string().contains("should be positive"), "{err}");
        }
    }

    #[test]
    fn non_integers_are_rejected() {
        for v in ["", "abc", "1.5", "12px"] {
            let err = check_positive_integer("test", v).unwrap_err();
            assert!(err.to_string().contains("should be an integer"), "{err}");
        }
    }

    #[test]
    fn too_large_is_rejected() {
        assert!(matches!(
            check_positive_integer("Width", "99999999999"),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[test]
    fn size_parses() {
        assert_eq!(parse_size("100x200"), Ok((100, 200)));
        assert_eq!(parse_size("2560X1440"), Ok((2560, 1440)));
    }

    #[test]
    fn size_without_separator() {
        assert_eq!(parse_size("100"), Err(ConfigError::InvalidSize("100".into())));
    }

    #[test]
    fn size_with_zero_height() {
        assert_eq!(
            parse_size("100x0"),
            Err(ConfigError::NotPositive { name: "Height", value: 0 })
        );
    }

    // ── settings ──────────────────────────────────────────────────────────

    #[test]
    fn defaults_to_squares() {
        let s = Settings::from_args(&args("200x300", "#0000ff", "#000000")).unwrap();
        assert_eq!(s.spec.shape, Shape::Squares);
        assert_eq!((s.spec.width, s.spec.height), (200, 300));
        assert_eq!(s.spec.gradient, GradientSpec::new(Color::new(0, 0, 255), Color::BLACK));
        assert_eq!(s.spec.policy, SamplingPolicy::Linear);
        assert_eq!(s.name, None);
    }

    #[test]
    fn shape_flags_select_family() {
        let mut a = args("10x10", "000", "fff");
        a.triangles = true;
        assert_eq!(Settings::from_args(&a).unwrap().spec.shape, Shape::Triangles);
        a.triangles = false;
        a.hexagons = true;
        assert_eq!(Settings::from_args(&a).unwrap().spec.shape, Shape::Hexagons);
    }

    #[test]
    fn carries_seed_policy_and_name() {
        let mut a = args("10x10", "000", "fff");
        a.seed = Some(5);
        a.policy = "squared".into();
        a.name = Some("wall.png".into());
        let s = Settings::from_args(&a).unwrap();
        assert_eq!(s.spec.seed, Some(5));
        assert_eq!(s.spec.policy, SamplingPolicy::Squared);
        assert_eq!(s.name.as_deref(), Some("wall.png"));
    }

    #[test]
    fn bad_color_is_reported() {
        let err = Settings::from_args(&args("10x10", "#12345", "fff")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(_)));
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn bad_policy_is_reported() {
        let mut a = args("10x10", "000", "fff");
        a.policy = "cubic".into();
        assert!(matches!(Settings::from_args(&a), Err(ConfigError::InvalidPolicy(_))));
    }

    #[test]
    fn bad_tile_size_is_reported() {
        for bad in [0.0, -3.0, f64::INFINITY] {
            let mut a = args("10x10", "000", "fff");
            a.tile_size = bad;
            assert!(matches!(Settings::from_args(&a), Err(ConfigError::InvalidTileSize(_))));
        }
    }
}
