//! Preprocessed image frames and the model's required input shape
//!
//! Resizing and pixel-format conversion happen upstream (JS canvas or the
//! native capture stage). This module only checks that what arrives matches
//! what the model was trained on.

use super::model::ClassifierError;

/// Model input width in pixels
pub const MODEL_INPUT_WIDTH: u32 = 299;

/// Model input height in pixels
pub const MODEL_INPUT_HEIGHT: u32 = 299;

/// Pixel layout of a frame buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit alpha, red, green, blue (alpha ignored)
    Argb32,
    /// 8-bit red, green, blue, alpha as delivered by canvas `getImageData`
    Rgba32,
    Rgb24,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Argb32 | PixelFormat::Rgba32 => 4,
            PixelFormat::Rgb24 => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Argb32 => "ARGB32",
            PixelFormat::Rgba32 => "RGBA32",
            PixelFormat::Rgb24 => "RGB24",
        }
    }
}

/// Fixed input contract declared by a classifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputShape {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl InputShape {
    pub const fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self { width, height, format }
    }

    /// Expected buffer length in bytes, `None` if it doesn't fit in `usize`
    pub fn byte_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.format.bytes_per_pixel())
    }

    /// Reject frames that were not preprocessed to this shape
    pub fn check(&self, frame: &ImageFrame) -> Result<(), ClassifierError> {
        if frame.width != self.width || frame.height != self.height {
            return Err(ClassifierError::InvalidInput(format!(
                "frame is {}x{}, model expects {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        if frame.format != self.format {
            return Err(ClassifierError::InvalidInput(format!(
                "frame is {}, model expects {}",
                frame.format.as_str(),
                self.format.as_str()
            )));
        }
        match self.byte_len() {
            Some(expected) if expected == frame.data.len() => Ok(()),
            Some(expected) => Err(ClassifierError::InvalidInput(format!(
                "pixel buffer is {} bytes, model expects {}",
                frame.data.len(),
                expected
            ))),
            None => Err(ClassifierError::InvalidInput(format!(
                "{}x{} frame is too large",
                self.width, self.height
            ))),
        }
    }
}

impl Default for InputShape {
    fn default() -> Self {
        Self::new(MODEL_INPUT_WIDTH, MODEL_INPUT_HEIGHT, PixelFormat::Argb32)
    }
}

/// One preprocessed camera frame
#[derive(Clone, Debug)]
pub struct ImageFrame {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl ImageFrame {
    /// Wrap a pixel buffer. Fails if the length doesn't match the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, ClassifierError> {
        let Some(expected) = InputShape::new(width, height, format).byte_len() else {
            return Err(ClassifierError::InvalidInput(format!(
                "{}x{} frame is too large",
                width, height
            )));
        };
        if data.len() != expected || expected == 0 {
            return Err(ClassifierError::InvalidInput(format!(
                "pixel buffer is {} bytes, expected {} for {}x{} {}",
                data.len(),
                expected,
                width,
                height,
                format.as_str()
            )));
        }
        Ok(Self { width, height, format, data })
    }

    /// Zeroed frame matching `shape`. A shape too large to allocate gets an
    /// empty buffer, which `InputShape::check` rejects.
    pub fn blank(shape: InputShape) -> Self {
        Self {
            width: shape.width,
            height: shape.height,
            format: shape.format,
            data: vec![0; shape.byte_len().unwrap_or(0)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_299_square_argb() {
        let shape = InputShape::default();
        assert_eq!((shape.width, shape.height), (299, 299));
        assert_eq!(shape.byte_len(), Some(299 * 299 * 4));
    }

    #[test]
    fn frame_length_must_match_dimensions() {
        let err = ImageFrame::new(2, 2, PixelFormat::Rgb24, vec![0; 11]).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
        assert!(ImageFrame::new(2, 2, PixelFormat::Rgb24, vec![0; 12]).is_ok());
        assert!(ImageFrame::new(0, 0, PixelFormat::Rgb24, Vec::new()).is_err());
    }

    #[test]
    fn shape_check_rejects_wrong_size_and_format() {
        let shape = InputShape::new(4, 4, PixelFormat::Rgba32);
        assert!(shape.check(&ImageFrame::blank(shape)).is_ok());

        let resized = ImageFrame::blank(InputShape::new(8, 4, PixelFormat::Rgba32));
        assert!(matches!(shape.check(&resized), Err(ClassifierError::InvalidInput(_))));

        let wrong_format = ImageFrame::blank(InputShape::new(4, 4, PixelFormat::Argb32));
        assert!(matches!(shape.check(&wrong_format), Err(ClassifierError::InvalidInput(_))));
    }

    #[test]
    fn oversized_dimensions_are_invalid_not_a_panic() {
        let huge = InputShape::new(u32::MAX, u32::MAX, PixelFormat::Argb32);
        assert_eq!(huge.byte_len(), None);

        let err = ImageFrame::new(u32::MAX, u32::MAX, PixelFormat::Argb32, Vec::new()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));

        assert!(matches!(
            huge.check(&ImageFrame::blank(huge)),
            Err(ClassifierError::InvalidInput(_))
        ));
    }
}
