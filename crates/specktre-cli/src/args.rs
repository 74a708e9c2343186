use clap::{ArgGroup, Args, Parser, Subcommand};
use specktre_engine::DEFAULT_TILE_SIZE;

/// Generate speckled wallpaper images.
#[derive(Parser, Debug)]
#[command(name = "specktre", author, version, about)]
pub struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG), e.g. "debug"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a new wallpaper and save it to a file
    New(NewArgs),
}

/// Raw, unvalidated options for `specktre new`.
///
/// Values stay as strings where validation needs to report a descriptive
/// error; see `config::Settings::from_args`.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("shape").args(["squares", "triangles", "hexagons"])))]
pub struct NewArgs {
    /// Size in pixels, WxH (e.g. 100x200)
    #[arg(long, value_name = "WxH")]
    pub size: String,

    /// Start of the color range (hex, e.g. #01ab23)
    #[arg(long, value_name = "HEX")]
    pub start: String,

    /// End of the color range (hex, e.g. #01ab23)
    #[arg(long, value_name = "HEX")]
    pub end: String,

    /// Tile with squares (default)
    #[arg(long)]
    pub squares: bool,

    /// Tile with triangles
    #[arg(long)]
    pub triangles: bool,

    /// Tile with hexagons
    #[arg(long)]
    pub hexagons: bool,

    /// Side length of each tile in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f64,

    /// Color sampling policy: linear or squared
    #[arg(long, default_value = "linear")]
    pub policy: String,

    /// Seed for the color sampler, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name of the file to save to (format follows the extension)
    #[arg(long)]
    pub name: Option<String>,
}
