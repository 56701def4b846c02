use image::{DynamicImage, GenericImageView, GrayImage};

use super::errors::RecognitionError;

/// A decoded product photograph with non-zero width and height.
#[derive(Debug, Clone)]
pub struct Image {
    inner: DynamicImage,
}

impl Image {
    /// Wraps an already decoded image, rejecting empty geometry.
    pub fn new(inner: DynamicImage) -> Result<Self, RecognitionError> {
        let (width, height) = inner.dimensions();
        if width == 0 || height == 0 {
            return Err(RecognitionError::Geometry { width, height });
        }
        Ok(Self { inner })
    }

    /// Decodes raw upload bytes, guessing the format from the content.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecognitionError> {
        let inner =
            image::load_from_memory(bytes).map_err(|e| RecognitionError::Decode(e.to_string()))?;
        Self::new(inner)
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.inner
    }
}

/// Single-channel, binarized and rotation-corrected image ready for OCR.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pixels: GrayImage,
    skew_degrees: f32,
}

impl NormalizedImage {
    pub fn new(pixels: GrayImage, skew_degrees: f32) -> Self {
        Self {
            pixels,
            skew_degrees,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    /// Skew that was detected and corrected, in degrees within (-45, 45].
    pub fn skew_degrees(&self) -> f32 {
        self.skew_degrees
    }

    pub fn into_pixels(self) -> GrayImage {
        self.pixels
    }
}
