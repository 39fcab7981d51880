//! Input validation and decoding.

use std::path::{Path, PathBuf};

use image::error::ImageFormatHint;
use image::{DynamicImage, ImageError, ImageFormat};
use tracing::debug;

use crate::{ConvertError, Result};

/// Input extensions accepted (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Extension written for derived output paths.
pub const OUTPUT_EXTENSION: &str = "bmp";

/// Check that `path` exists and names a PNG or JPEG file.
///
/// Existence is checked first, then the extension; nothing is decoded.
pub fn check_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
        return Err(ConvertError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }
    Ok(())
}

/// Output path next to the input with its extension replaced by `.bmp`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Produces decoded images for the pipeline.
pub trait ImageSource {
    fn load(&self, path: &Path) -> Result<DynamicImage>;
}

/// Decodes PNG and JPEG files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl ImageSource for FileSource {
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let decode_err = |source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let reader = image::ImageReader::open(path)
            .map_err(|e| decode_err(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(ImageError::IoError(e)))?;

        // Content sniffing wins over the extension; only PNG and JPEG pass.
        match reader.format() {
            Some(ImageFormat::Png | ImageFormat::Jpeg) => {}
            other => {
                let hint = other.map_or(ImageFormatHint::Unknown, ImageFormatHint::Exact);
                return Err(decode_err(ImageError::Unsupported(hint.into())));
            }
        }

        let img = reader.decode().map_err(decode_err)?;

        debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "Decoded source image"
        );
        Ok(img)
    }
}
