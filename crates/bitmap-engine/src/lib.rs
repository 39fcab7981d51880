//! Image to monochrome bitmap conversion for fixed-size display panels.
//!
//! Provides aspect-preserving resizing (Lanczos3), grayscale reduction,
//! hard-threshold binarization and 1-bit BMP encoding.

pub mod bmp;
pub mod bounds;
mod error;
pub mod mono;
pub mod output;
pub mod pipeline;
pub mod resize;
pub mod source;

// Re-exports for convenience
pub use bmp::encode_bitmap;
pub use bounds::BoundingBox;
pub use error::{ConvertError, Result};
pub use mono::{MonochromeImage, to_grayscale, to_monochrome};
pub use pipeline::Converter;
pub use resize::{LanczosResampler, Resampler, compute_dimensions, resize_to_fit};
pub use source::{FileSource, ImageSource, check_input, derive_output_path};

/// Panel width in pixels.
pub const PANEL_WIDTH: u32 = 576;

/// Panel height in pixels.
pub const PANEL_HEIGHT: u32 = 136;

/// Luminance at or above which a pixel becomes white.
pub const DEFAULT_THRESHOLD: u8 = 128;
