use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "panel-bitmap", version)]
#[command(about = "Convert PNG/JPEG images to a monochrome bitmap that fits in a 576x136 window")]
pub struct Cli {
    /// Path to the input PNG or JPEG image
    pub input_image: PathBuf,

    /// Path to save the output bitmap (default: input path with a .bmp extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum output width in pixels (overrides PANEL_MAX_WIDTH)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=65535))]
    pub max_width: Option<u32>,

    /// Maximum output height in pixels (overrides PANEL_MAX_HEIGHT)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=65535))]
    pub max_height: Option<u32>,

    /// Luminance (0-255) at or above which a pixel becomes white (overrides MONO_THRESHOLD)
    #[arg(long)]
    pub threshold: Option<u8>,
}
