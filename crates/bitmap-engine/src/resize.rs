//! Aspect-ratio-preserving resize into a bounding box.
//!
//! The scale factor is `min(max_width / width, max_height / height)`, so
//! images smaller than the box are scaled up until they touch it on their
//! limiting axis. The arithmetic is done exactly in integers; each axis is
//! clamped to at least one pixel.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::{BoundingBox, ConvertError, Result};

/// Resamples an image to exact target dimensions.
pub trait Resampler {
    fn resample(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage;
}

/// Lanczos3 resampler backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanczosResampler;

impl Resampler for LanczosResampler {
    fn resample(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if img.width() == width && img.height() == height {
            debug!(width, height, "Image already at target size, skipping resample");
            return img.clone();
        }
        img.resize_exact(width, height, FilterType::Lanczos3)
    }
}

/// Scale factor that fits `width`x`height` into `bounds`.
pub fn scale_factor(width: u32, height: u32, bounds: &BoundingBox) -> f64 {
    let width_ratio = f64::from(bounds.max_width) / f64::from(width);
    let height_ratio = f64::from(bounds.max_height) / f64::from(height);
    width_ratio.min(height_ratio)
}

/// Compute the target dimensions of a `width`x`height` source inside `bounds`.
///
/// Returns `floor(width * scale)` and `floor(height * scale)`, each at least 1.
/// Fails with [`ConvertError::MalformedImage`] for a zero-sized source.
pub fn compute_dimensions(width: u32, height: u32, bounds: &BoundingBox) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(ConvertError::MalformedImage(format!(
            "source dimensions must be positive, got {width}x{height}"
        )));
    }
    if bounds.max_width == 0 || bounds.max_height == 0 {
        return Err(ConvertError::MalformedImage(format!(
            "bounding box must be non-empty, got {}x{}",
            bounds.max_width, bounds.max_height
        )));
    }

    let (w, h) = (u64::from(width), u64::from(height));
    let (max_w, max_h) = (u64::from(bounds.max_width), u64::from(bounds.max_height));

    // max_w / w <= max_h / h, cross-multiplied
    let (target_w, target_h) = if max_w * h <= max_h * w {
        (max_w, h * max_w / w)
    } else {
        (w * max_h / h, max_h)
    };

    // Both are bounded by the box sides, which are u32.
    let target_w = target_w.max(1) as u32;
    let target_h = target_h.max(1) as u32;

    debug!(
        width,
        height,
        target_w,
        target_h,
        scale = scale_factor(width, height, bounds),
        upscale = bounds.contains(width, height),
        "Computed target dimensions"
    );

    Ok((target_w, target_h))
}

/// Resize an image so it fits inside `bounds` while maintaining aspect ratio.
pub fn resize_to_fit(
    img: &DynamicImage,
    bounds: &BoundingBox,
    resampler: &dyn Resampler,
) -> Result<DynamicImage> {
    let (target_w, target_h) = compute_dimensions(img.width(), img.height(), bounds)?;
    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        target_w,
        target_h,
        "Resizing image to fit bounding box"
    );
    let resized = resampler.resample(img, target_w, target_h);
    if (resized.width(), resized.height()) != (target_w, target_h) {
        return Err(ConvertError::MalformedImage(format!(
            "resampler returned {}x{}, expected {target_w}x{target_h}",
            resized.width(),
            resized.height()
        )));
    }
    Ok(resized)
}
