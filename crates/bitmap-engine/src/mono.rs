//! Color to grayscale to 1-bit reduction.
//!
//! Grayscale uses the ITU-R BT.601 luma weights. Binarization is a hard
//! threshold: no error diffusion is applied.

use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::{ConvertError, Result};

/// A binary image, one flag per pixel in row-major order (`true` = white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl MonochromeImage {
    /// Build an image from row-major pixel flags.
    ///
    /// Fails if either dimension is zero or the buffer length is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::MalformedImage(format!(
                "monochrome image must be non-empty, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ConvertError::MalformedImage(format!(
                "pixel buffer holds {} values, expected {expected} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at `(x, y)` is white.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Row `y` as a slice of pixel flags.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[bool] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }
}

/// BT.601 luma of an sRGB triple, rounded to the nearest integer.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

/// Reduce an image to a single luminance channel.
///
/// Alpha, if present, is ignored and the color treated as opaque.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!(width, height, "Converting to grayscale (BT.601)");

    let mut output = GrayImage::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        output.put_pixel(x, y, Luma([luminance(r, g, b)]));
    }
    output
}

/// Threshold a grayscale image to black and white.
///
/// Pixels with values >= `threshold` become white, others become black.
pub fn to_monochrome(img: &GrayImage, threshold: u8) -> Result<MonochromeImage> {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    let pixels = img.pixels().map(|p| p.0[0] >= threshold).collect();
    MonochromeImage::from_raw(width, height, pixels)
}
