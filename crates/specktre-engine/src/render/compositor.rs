use std::time::Instant;

use crate::paint::{Color, GradientSampler, GradientSpec, SamplingPolicy};
use crate::tiling::{self, DEFAULT_TILE_SIZE, Polygon, Shape};

use super::{PixelBuffer, raster};

/// Everything needed for one render.
///
/// Built by a caller that has already validated its input: dimensions and
/// `tile_size` are expected to be positive.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperSpec {
    pub shape: Shape,
    pub width: u32,
    pub height: u32,
    pub tile_size: f64,
    pub gradient: GradientSpec,
    pub policy: SamplingPolicy,
    /// Seed for the color sampler. `None` draws a fresh one, which is logged.
    pub seed: Option<u64>,
}

impl WallpaperSpec {
    /// Spec with the default tile size, linear sampling and no fixed seed.
    pub fn new(shape: Shape, width: u32, height: u32, gradient: GradientSpec) -> Self {
        Self {
            shape,
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            gradient,
            policy: SamplingPolicy::default(),
            seed: None,
        }
    }

    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Renders `spec` into a new buffer.
///
/// With the same seed, output is byte-identical across runs.
pub fn render(spec: WallpaperSpec) -> PixelBuffer {
    let seed = spec.seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("sampling colors with seed {seed}");
        seed
    });
    let colors = GradientSampler::seeded(spec.gradient, spec.policy, seed);
    render_with(&spec, colors)
}

/// Renders the tiling described by `spec`, taking one color per tile from
/// `colors`.
///
/// `spec.gradient`, `spec.policy` and `spec.seed` are ignored. Rendering stops
/// early if `colors` runs out.
pub fn render_with(spec: &WallpaperSpec, colors: impl IntoIterator<Item = Color>) -> PixelBuffer {
    let started = Instant::now();
    let mut buffer = PixelBuffer::new(spec.width, spec.height);
    let tiles = tiling::generate(spec.shape, spec.width, spec.height, spec.tile_size);

    let painted = paint_tiles(&mut buffer, tiles, colors);

    log::debug!(
        "rendered {} {} tiles onto {}x{} in {:?}",
        painted,
        spec.shape,
        spec.width,
        spec.height,
        started.elapsed()
    );
    buffer
}

/// Pairs tiles with colors and fills each tile on `buffer`.
///
/// Returns the number of tiles painted. Later tiles overwrite earlier ones
/// without blending.
pub fn paint_tiles(
    buffer: &mut PixelBuffer,
    tiles: impl IntoIterator<Item = Polygon>,
    colors: impl IntoIterator<Item = Color>,
) -> usize {
    let (width, height) = (buffer.width(), buffer.height());
    let mut painted = 0;
    for (tile, color) in tiles.into_iter().zip(colors) {
        raster::fill_polygon(&tile, width, height, |row, cols| buffer.fill_span(row, cols, color));
        painted += 1;
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Color = Color::new(0, 0, 255);
    const MAGENTA: Color = Color::new(255, 0, 255);

    fn blue_to_black(shape: Shape, width: u32, height: u32) -> WallpaperSpec {
        WallpaperSpec::new(shape, width, height, GradientSpec::new(BLUE, Color::BLACK))
    }

    fn pixel_coverage(shape: Shape, w: u32, h: u32, side: f64) -> Vec<u32> {
        let mut counts = vec![0u32; w as usize * h as usize];
        for tile in tiling::generate(shape, w, h, side) {
            raster::fill_polygon(&tile, w, h, |row, cols| {
                for x in cols {
                    counts[row as usize * w as usize + x as usize] += 1;
                }
            });
        }
        counts
    }

    // ── example render ────────────────────────────────────────────────────

    #[test]
    fn triangles_example_fills_every_pixel() {
        let spec = blue_to_black(Shape::Triangles, 200, 300).with_seed(7);
        let mut buffer = PixelBuffer::filled(200, 300, MAGENTA);
        let tiles = tiling::generate(spec.shape, spec.width, spec.height, spec.tile_size);
        let colors = GradientSampler::seeded(spec.gradient, spec.policy, 7);
        paint_tiles(&mut buffer, tiles, colors);

        assert!(buffer.pixels().iter().all(|&c| c != MAGENTA));

        let out = render(spec);
        assert_eq!((out.width(), out.height()), (200, 300));
        assert_eq!(out.pixels().len(), 200 * 300);
        assert_eq!(out, buffer);
    }

    #[test]
    fn every_pixel_painted_exactly_once() {
        for shape in Shape::ALL {
            for (w, h, side) in [(200, 300, 25.0), (97, 61, 9.5), (64, 64, 16.0), (3, 200, 7.0)] {
                let counts = pixel_coverage(shape, w, h, side);
                if let Some(i) = counts.iter().position(|&n| n != 1) {
                    panic!(
                        "{shape} {w}x{h}@{side}: pixel ({}, {}) painted {} times",
                        i % w as usize,
                        i / w as usize,
                        counts[i]
                    );
                }
            }
        }
    }

    #[test]
    fn squares_are_solid_blocks() {
        // Distinct color per tile, in generation order (column-major, 6 rows).
        let spec = blue_to_black(Shape::Squares, 100, 100);
        let colors = (0u8..).map(|i| Color::new(i, 0, 0));
        let out = render_with(&spec, colors);
        for y in 0..100 {
            for x in 0..100 {
                let tile = (x / 25) * 6 + y / 25;
                assert_eq!(out.get(x, y), Some(Color::new(tile as u8, 0, 0)), "({x}, {y})");
            }
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn pixels_stay_within_gradient() {
        let start = Color::new(11, 153, 46);
        let end = Color::new(6, 86, 9);
        for policy in [SamplingPolicy::Linear, SamplingPolicy::Squared] {
            let spec = WallpaperSpec::new(Shape::Hexagons, 120, 80, GradientSpec::new(start, end))
                .with_tile_size(12.0)
                .with_policy(policy)
                .with_seed(1);
            for c in render(spec).pixels() {
                assert!((6..=11).contains(&c.r) && (86..=153).contains(&c.g) && (9..=46).contains(&c.b));
            }
        }
    }

    #[test]
    fn same_seed_is_byte_identical() {
        for shape in Shape::ALL {
            let spec = blue_to_black(shape, 150, 90).with_seed(2024);
            assert_eq!(render(spec.clone()).to_rgb8(), render(spec).to_rgb8());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = render(blue_to_black(Shape::Squares, 100, 100).with_seed(1));
        let b = render(blue_to_black(Shape::Squares, 100, 100).with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn unseeded_render_is_well_formed() {
        let out = render(blue_to_black(Shape::Hexagons, 40, 30));
        assert_eq!(out.pixels().len(), 1200);
        assert!(out.pixels().iter().all(|c| c.r == 0 && c.g == 0));
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_size_renders_empty_buffer() {
        assert!(render(blue_to_black(Shape::Squares, 0, 50).with_seed(0)).is_empty());
        assert!(render(blue_to_black(Shape::Triangles, 50, 0).with_seed(0)).is_empty());
    }

    #[test]
    fn paint_stops_when_colors_run_out() {
        let mut buffer = PixelBuffer::filled(50, 50, MAGENTA);
        let tiles = tiling::generate_squares(50, 50, 25.0);
        assert_eq!(paint_tiles(&mut buffer, tiles, [BLUE]), 1);
        assert_eq!(buffer.get(0, 0), Some(BLUE));
        assert_eq!(buffer.get(30, 30), Some(MAGENTA));
    }

    #[test]
    fn spec_defaults() {
        let spec = blue_to_black(Shape::Triangles, 10, 20);
        assert_eq!(spec.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(spec.policy, SamplingPolicy::Linear);
        assert_eq!(spec.seed, None);
    }
}
