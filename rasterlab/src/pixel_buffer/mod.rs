
use crate::error::{Error, Result};

/// Bytes per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// Index of the alpha byte inside a pixel. Filters never write it.
pub const ALPHA: usize = 3;

pub type Rgba = [u8; CHANNELS];

/// Row-major RGBA8 pixel buffer with fixed dimensions.
///
/// The byte length always equals `width * height * 4`; both dimensions are
/// positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    pub fn new_with_data(width: usize, height: usize, bytes: Vec<u8>) -> Result<PixelBuffer> {
        let expected = Self::expected_len(width, height)?;

        if bytes.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "bytes length {} does not match expected size {} for {}x{}",
                bytes.len(),
                expected,
                width,
                height
            )));
        }

        Ok(PixelBuffer {
            width,
            height,
            bytes,
        })
    }

    pub fn new_filled(width: usize, height: usize, rgba: Rgba) -> Result<PixelBuffer> {
        let expected = Self::expected_len(width, height)?;
        let bytes = rgba
            .iter()
            .copied()
            .cycle()
            .take(expected)
            .collect::<Vec<u8>>();

        Ok(PixelBuffer {
            width,
            height,
            bytes,
        })
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<PixelBuffer>
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let expected = Self::expected_len(width, height)?;
        let mut bytes = Vec::with_capacity(expected);
        for y in 0..height {
            for x in 0..width {
                bytes.extend_from_slice(&f(x, y));
            }
        }

        Ok(PixelBuffer {
            width,
            height,
            bytes,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of bytes in one row.
    pub fn row_bytes(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn take_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = self.offset(x, y);
        let mut rgba = [0u8; CHANNELS];
        rgba.copy_from_slice(&self.bytes[offset..offset + CHANNELS]);
        Some(rgba)
    }

    /// # Panics
    /// Panics if `(x, y)` lies outside the buffer.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: Rgba) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );

        let offset = self.offset(x, y);
        self.bytes[offset..offset + CHANNELS].copy_from_slice(&rgba);
    }

    /// Byte offset of the first channel of `(x, y)`.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }

    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let row_bytes = self.row_bytes();
        &self.bytes[y * row_bytes..(y + 1) * row_bytes]
    }

    /// Wraps bytes produced by a filter that kept this buffer's dimensions.
    pub(crate) fn with_same_dimensions(&self, bytes: Vec<u8>) -> PixelBuffer {
        debug_assert_eq!(bytes.len(), self.bytes.len());

        PixelBuffer {
            width: self.width,
            height: self.height,
            bytes,
        }
    }

    fn expected_len(width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBuffer(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                Error::InvalidBuffer(format!("dimensions {}x{} overflow", width, height))
            })
    }
}

impl std::fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} RGBA8", self.width, self.height)
    }
}
