//! Owned 8-bit grayscale grid in row-major layout (stride == width).
use super::traits::{ImageView, ImageViewMut};
use crate::error::{ProcessError, Result};

/// Default PGM intensity ceiling.
pub const DEFAULT_MAX_VALUE: u16 = 255;

/// Owned single-channel 8-bit image with its PGM intensity ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of samples between consecutive rows (equals `w`)
    pub stride: usize,
    /// Intensity ceiling written to the PGM header
    pub max_value: u16,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Zero-initialized `w × h` image with `max_value = 255`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0)
    }

    /// `w × h` image where every sample equals `value`.
    pub fn filled(w: usize, h: usize, value: u8) -> Self {
        Self {
            w,
            h,
            stride: w,
            max_value: DEFAULT_MAX_VALUE,
            data: vec![value; w * h],
        }
    }

    /// Wrap raw row-major samples. Returns `None` when `data.len() != w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            max_value: DEFAULT_MAX_VALUE,
            data,
        })
    }

    pub fn with_max_value(mut self, max_value: u16) -> Self {
        self.max_value = max_value;
        self
    }

    /// Zero-filled image of the given size inheriting this image's `max_value`.
    pub fn blank_like(&self, w: usize, h: usize) -> Self {
        Self::new(w, h).with_max_value(self.max_value)
    }

    /// Zero-filled `w × h` image that reports allocation failure instead of
    /// aborting.
    pub fn try_new(w: usize, h: usize) -> Result<Self> {
        let len = w.checked_mul(h).ok_or(ProcessError::Allocation {
            what: "gray image",
            bytes: usize::MAX,
        })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ProcessError::Allocation {
                what: "gray image",
                bytes: len,
            })?;
        data.resize(len, 0);
        Ok(Self {
            w,
            h,
            stride: w,
            max_value: DEFAULT_MAX_VALUE,
            data,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl ImageView for GrayImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl ImageViewMut for GrayImage {
    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
