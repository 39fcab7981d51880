//! End-to-end conversion: decode, resize, grayscale, threshold, encode, write.
//!
//! A [`Converter`] carries configuration only; every call runs the whole
//! pipeline on its own buffers, so one converter can serve any number of
//! independent conversions.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::info;

use crate::output::write_atomic;
use crate::{
    BoundingBox, DEFAULT_THRESHOLD, FileSource, ImageSource, LanczosResampler, MonochromeImage,
    Resampler, Result, check_input, derive_output_path, encode_bitmap, resize_to_fit,
    to_grayscale, to_monochrome,
};

/// Image to monochrome bitmap converter.
pub struct Converter {
    bounds: BoundingBox,
    threshold: u8,
    resampler: Box<dyn Resampler>,
    source: Box<dyn ImageSource>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(BoundingBox::default())
    }
}

impl Converter {
    /// Converter with the Lanczos3 resampler, file decoder and threshold 128.
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            threshold: DEFAULT_THRESHOLD,
            resampler: Box::new(LanczosResampler),
            source: Box::new(FileSource),
        }
    }

    /// Builder: set the black/white threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: replace the resampler.
    pub fn with_resampler(mut self, resampler: impl Resampler + 'static) -> Self {
        self.resampler = Box::new(resampler);
        self
    }

    /// Builder: replace the image source.
    pub fn with_source(mut self, source: impl ImageSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Resize, reduce to grayscale and threshold an in-memory image.
    pub fn convert_image(&self, img: &DynamicImage) -> Result<MonochromeImage> {
        let resized = resize_to_fit(img, &self.bounds, self.resampler.as_ref())?;
        let gray = to_grayscale(&resized);
        to_monochrome(&gray, self.threshold)
    }

    /// Convert an in-memory image all the way to BMP bytes.
    pub fn encode_image(&self, img: &DynamicImage) -> Result<Vec<u8>> {
        let mono = self.convert_image(img)?;
        encode_bitmap(&mono)
    }

    /// Convert `input` and write the bitmap to `output`, or next to the
    /// input with a `.bmp` extension. Returns the path written.
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        check_input(input)?;
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| derive_output_path(input));

        let img = self.source.load(input)?;
        let bytes = self.encode_image(&img)?;
        write_atomic(&output, &bytes)?;

        info!(
            input = %input.display(),
            output = %output.display(),
            bytes = bytes.len(),
            "Converted image to bitmap"
        );
        Ok(output)
    }
}
