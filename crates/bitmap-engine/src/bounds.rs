//! Bounding box the converted image must fit inside.

use crate::{ConvertError, PANEL_HEIGHT, PANEL_WIDTH, Result};

/// Maximum output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            max_width: PANEL_WIDTH,
            max_height: PANEL_HEIGHT,
        }
    }
}

impl BoundingBox {
    /// Create a bounding box. Both sides must be non-zero.
    pub fn new(max_width: u32, max_height: u32) -> Result<Self> {
        if max_width == 0 || max_height == 0 {
            return Err(ConvertError::MalformedImage(format!(
                "bounding box must be non-empty, got {max_width}x{max_height}"
            )));
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }

    /// Whether an image of the given size already fits without scaling down.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_panel_size() {
        let b = BoundingBox::default();
        assert_eq!((b.max_width, b.max_height), (576, 136));
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(BoundingBox::new(0, 10).is_err());
        assert!(BoundingBox::new(10, 0).is_err());
        assert_eq!(BoundingBox::new(3, 4).unwrap().max_height, 4);
    }

    #[test]
    fn test_contains() {
        let b = BoundingBox::default();
        assert!(b.contains(576, 136));
        assert!(b.contains(1, 1));
        assert!(!b.contains(577, 10));
        assert!(!b.contains(10, 137));
    }
}
