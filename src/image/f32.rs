//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Holds the Canny intermediates: the blurred image, the gradient magnitude
//! and the gradient angle in degrees.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{ProcessError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Zero-initialized buffer that reports allocation failure as an error.
    pub fn try_new(w: usize, h: usize) -> Result<Self> {
        let len = w.checked_mul(h).ok_or(ProcessError::Allocation {
            what: "float image",
            bytes: usize::MAX,
        })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ProcessError::Allocation {
                what: "float image",
                bytes: len.saturating_mul(std::mem::size_of::<f32>()),
            })?;
        data.resize(len, 0.0);
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Largest sample, or 0.0 for an empty image.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

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
    fn data(&self) -> &[f32] {
        &self.data
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
