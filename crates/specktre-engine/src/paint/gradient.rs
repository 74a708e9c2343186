use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Color;

/// Endpoint colors of a gradient.
///
/// Order is irrelevant to the bounds of sampled colors: every channel of every
/// sample lies within `[min(start, end), max(start, end)]` for that channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
}

impl GradientSpec {
    #[inline]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }
}

/// How a sample's interpolation fraction is drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// One uniform fraction `t` per color; every channel moves from `start`
    /// towards `end` by the same `t`.
    #[default]
    Linear,
    /// Each channel is drawn independently, uniformly in the squared
    /// normalized range, then square-rooted. Biases samples towards the
    /// brighter end of each channel.
    Squared,
}

impl SamplingPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            SamplingPolicy::Linear => "linear",
            SamplingPolicy::Squared => "squared",
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(SamplingPolicy::Linear),
            "squared" => Ok(SamplingPolicy::Squared),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}

/// A sampling policy name that is neither `linear` nor `squared`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sampling policy {:?} (expected linear or squared)", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

/// Infinite stream of random colors between two endpoints.
///
/// Draws are independent: the sampler never walks the gradient in order.
/// The only state is the owned generator, so a fixed seed reproduces the
/// exact sequence.
#[derive(Debug, Clone)]
pub struct GradientSampler<R = StdRng> {
    spec: GradientSpec,
    policy: SamplingPolicy,
    rng: R,
}

impl GradientSampler<StdRng> {
    /// Creates a sampler backed by a `StdRng` seeded with `seed`.
    pub fn seeded(spec: GradientSpec, policy: SamplingPolicy, seed: u64) -> Self {
        Self::with_rng(spec, policy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GradientSampler<R> {
    pub fn with_rng(spec: GradientSpec, policy: SamplingPolicy, rng: R) -> Self {
        Self { spec, policy, rng }
    }

    #[inline]
    pub fn spec(&self) -> GradientSpec {
        self.spec
    }

    #[inline]
    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Draws the next color.
    pub fn draw(&mut self) -> Color {
        let GradientSpec { start, end } = self.spec;
        match self.policy {
            SamplingPolicy::Linear => {
                let t: f64 = self.rng.gen_range(0.0..=1.0);
                Color::new(
                    lerp_channel(start.r, end.r, t),
                    lerp_channel(start.g, end.g, t),
                    lerp_channel(start.b, end.b, t),
                )
            }
            SamplingPolicy::Squared => Color::new(
                squared_channel(&mut self.rng, start.r, end.r),
                squared_channel(&mut self.rng, start.g, end.g),
                squared_channel(&mut self.rng, start.b, end.b),
            ),
        }
    }
}

impl<R: Rng> Iterator for GradientSampler<R> {
    type Item = Color;

    #[inline]
    fn next(&mut self) -> Option<Color> {
        Some(self.draw())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Linear-policy sampler over `start..end`, seeded from OS entropy.
///
/// Use [`GradientSampler::seeded`] when the sequence must be reproducible.
pub fn sample_gradient(start: Color, end: Color) -> GradientSampler<StdRng> {
    GradientSampler::with_rng(
        GradientSpec::new(start, end),
        SamplingPolicy::Linear,
        StdRng::from_entropy(),
    )
}

/// `start - (start - end) * t`, rounded down.
#[inline]
fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let (s, e) = (f64::from(start), f64::from(end));
    let v = (s - (s - e) * t).floor();
    clamp_channel(v, start.min(end), start.max(end))
}

fn squared_channel<R: Rng>(rng: &mut R, a: u8, b: u8) -> u8 {
    let (lo, hi) = (a.min(b), a.max(b));
    let lo_sq = (f64::from(lo) / 255.0).powi(2);
    let hi_sq = (f64::from(hi) / 255.0).powi(2);
    let v: f64 = rng.gen_range(lo_sq..=hi_sq);
    // sqrt(lo^2) * 255 can land a hair below `lo`; clamp back into range.
    clamp_channel((v.sqrt() * 255.0).floor(), lo, hi)
}

#[inline]
fn clamp_channel(v: f64, lo: u8, hi: u8) -> u8 {
    v.clamp(f64::from(lo), f64::from(hi)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(c: Color, a: Color, b: Color) -> bool {
        let ok = |v: u8, x: u8, y: u8| v >= x.min(y) && v <= x.max(y);
        ok(c.r, a.r, b.r) && ok(c.g, a.g, b.g) && ok(c.b, a.b, b.b)
    }

    const PAIRS: [(Color, Color); 5] = [
        (Color::new(0, 0, 255), Color::new(0, 0, 0)),
        (Color::new(0, 0, 0), Color::new(0, 0, 255)),
        (Color::new(178, 26, 16), Color::new(136, 25, 17)),
        (Color::new(55, 19, 78), Color::new(72, 27, 100)),
        (Color::BLACK, Color::WHITE),
    ];

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn linear_samples_stay_within_channel_bounds() {
        for (seed, &(a, b)) in PAIRS.iter().enumerate() {
            let sampler = GradientSampler::seeded(GradientSpec::new(a, b), SamplingPolicy::Linear, seed as u64);
            for c in sampler.take(2_000) {
                assert!(within(c, a, b), "{c} not within {a}..{b}");
            }
        }
    }

    #[test]
    fn squared_samples_stay_within_channel_bounds() {
        for (seed, &(a, b)) in PAIRS.iter().enumerate() {
            let sampler = GradientSampler::seeded(GradientSpec::new(a, b), SamplingPolicy::Squared, seed as u64);
            for c in sampler.take(2_000) {
                assert!(within(c, a, b), "{c} not within {a}..{b}");
            }
        }
    }

    #[test]
    fn blue_to_black_only_varies_blue() {
        let sampler = sample_gradient(Color::new(0, 0, 255), Color::new(0, 0, 0));
        for c in sampler.take(1_000) {
            assert_eq!((c.r, c.g), (0, 0));
        }
    }

    #[test]
    fn identical_endpoints_yield_that_color() {
        let c = Color::new(12, 200, 77);
        for policy in [SamplingPolicy::Linear, SamplingPolicy::Squared] {
            let mut s = GradientSampler::seeded(GradientSpec::new(c, c), policy, 3);
            assert!(s.by_ref().take(100).all(|x| x == c));
        }
    }

    #[test]
    fn linear_moves_all_channels_together() {
        // One shared t: a channel closer to `end` implies the others are too.
        let a = Color::new(0, 0, 0);
        let b = Color::new(200, 200, 200);
        let sampler = GradientSampler::seeded(GradientSpec::new(a, b), SamplingPolicy::Linear, 11);
        for c in sampler.take(500) {
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
        }
    }

    #[test]
    fn samples_spread_across_the_range() {
        let sampler = sample_gradient(Color::BLACK, Color::WHITE);
        let (lo, hi) = sampler
            .take(5_000)
            .fold((255u8, 0u8), |(lo, hi), c| (lo.min(c.r), hi.max(c.r)));
        assert!(lo < 20 && hi > 235, "range {lo}..{hi} is suspiciously narrow");
    }

    #[test]
    fn squared_policy_favours_the_bright_end() {
        let spec = GradientSpec::new(Color::BLACK, Color::WHITE);
        let mean = |policy| {
            let s = GradientSampler::seeded(spec, policy, 5);
            s.take(10_000).map(|c| f64::from(c.r)).sum::<f64>() / 10_000.0
        };
        assert!(mean(SamplingPolicy::Squared) > mean(SamplingPolicy::Linear) + 20.0);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn same_seed_same_sequence() {
        let spec = GradientSpec::new(Color::new(13, 16, 155), Color::new(14, 58, 180));
        for policy in [SamplingPolicy::Linear, SamplingPolicy::Squared] {
            let a: Vec<_> = GradientSampler::seeded(spec, policy, 42).take(64).collect();
            let b: Vec<_> = GradientSampler::seeded(spec, policy, 42).take(64).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn lerp_rounds_down() {
        assert_eq!(lerp_channel(0, 255, 0.5), 127);
        assert_eq!(lerp_channel(255, 0, 0.5), 127);
        assert_eq!(lerp_channel(10, 20, 0.0), 10);
        assert_eq!(lerp_channel(10, 20, 1.0), 20);
    }

    // ── policy names ──────────────────────────────────────────────────────

    #[test]
    fn policy_from_str() {
        assert_eq!("linear".parse::<SamplingPolicy>(), Ok(SamplingPolicy::Linear));
        assert_eq!("Squared".parse::<SamplingPolicy>(), Ok(SamplingPolicy::Squared));
        assert!("cubic".parse::<SamplingPolicy>().is_err());
        assert_eq!(SamplingPolicy::default(), SamplingPolicy::Linear);
    }
}
