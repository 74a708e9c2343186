//! Output naming and image encoding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use rand::distributions::Alphanumeric;
use specktre_engine::PixelBuffer;

/// Random characters in a generated filename. 62^5 is ~916 million names.
const STUB_LEN: usize = 5;

/// A filename of the form `specktre_123AB.png`.
pub fn candidate_filename<R: Rng>(rng: &mut R) -> String {
    let stub: String = rng
        .sample_iter(&Alphanumeric)
        .take(STUB_LEN)
        .map(char::from)
        .collect();
    format!("specktre_{stub}.png")
}

/// A path in `dir` that does not exist yet when this returns.
pub fn new_filename(dir: &Path) -> PathBuf {
    new_filename_with(dir, &mut rand::thread_rng())
}

pub fn new_filename_with<R: Rng>(dir: &Path, rng: &mut R) -> PathBuf {
    loop {
        let path = dir.join(candidate_filename(rng));
        if !path.exists() {
            return path;
        }
        log::debug!("{} already exists, trying another name", path.display());
    }
}

/// Encodes `buffer` to `path`; the format follows the file extension.
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgb8())
        .context("pixel buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
