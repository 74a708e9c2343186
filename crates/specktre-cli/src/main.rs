//! `specktre` renders speckled wallpapers: a canvas tiled with squares,
//! triangles or hexagons, each tile a random color between two endpoints.

mod args;
mod config;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use specktre_engine::logging::{LoggingConfig, init_logging};
use specktre_engine::render;

use crate::args::{Cli, Command, NewArgs};
use crate::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    match cli.command {
        Command::New(args) => new_wallpaper(&args),
    }
}

fn new_wallpaper(args: &NewArgs) -> Result<()> {
    let settings = Settings::from_args(args).context("invalid arguments")?;

    let path = match settings.name {
        Some(name) => PathBuf::from(name),
        None => output::new_filename(Path::new(".")),
    };

    let spec = settings.spec;
    log::info!(
        "rendering {}x{} {} (tile {}, {} to {}, {} sampling)",
        spec.width,
        spec.height,
        spec.shape,
        spec.tile_size,
        spec.gradient.start,
        spec.gradient.end,
        spec.policy
    );

    let buffer = render(spec);
    output::save(&buffer, &path)?;

    println!("Saved new wallpaper as {}", path.display());
    Ok(())
}
