//! 3×3 image gradients.
//!
//! - `gradient_magnitude_l1`: standalone Sobel/Prewitt operator on 8-bit
//!   input, `|gx| + |gy|` clamped to 255.
//! - `sobel_gradient_f32`: Canny stage on the blurred float image with
//!   Euclidean magnitude `sqrt(gx² + gy²)` and `atan2(gy, gx)` in degrees.
//!
//! Only interior pixels are computed; the 1-pixel frame stays zero.
use crate::error::Result;
use crate::image::rows::fill_rows;
use crate::image::{GrayImage, ImageF32, ImageView, ImageViewMut};
use crate::kernels::{Kernel3, PREWITT_X, PREWITT_Y, SOBEL_X, SOBEL_Y};
use serde::Deserialize;

/// Derivative kernel pair used by [`gradient_magnitude_l1`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKernel {
    /// Centre row/column weighted by 2
    Sobel,
    /// Uniform weights
    Prewitt,
}

impl GradientKernel {
    /// `(X, Y)` kernels.
    pub fn kernels(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            Self::Sobel => (&SOBEL_X, &SOBEL_Y),
            Self::Prewitt => (&PREWITT_X, &PREWITT_Y),
        }
    }
}

/// L1 gradient magnitude, clamped to `[0, 255]`, on a zeroed output.
///
/// The output spans the full byte range, so its `max_value` is 255
/// whatever the source's ceiling.
pub fn gradient_magnitude_l1(src: &GrayImage, kernel: GradientKernel) -> GrayImage {
    let mut out = GrayImage::new(src.w, src.h);
    if !src.has_interior() {
        return out;
    }
    let (kx, ky) = kernel.kernels();
    let (w, h, stride) = (src.w, src.h, out.stride);
    fill_rows(&mut out.data, stride, 1..h - 1, |y, dst_row| {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        for x in 1..w - 1 {
            let gx = kx.response_u8(&rows, x);
            let gy = ky.response_u8(&rows, x);
            dst_row[x] = (gx.abs() + gy.abs()).min(255) as u8;
        }
    });
    out
}

/// Sobel edge magnitude.
pub fn sobel(src: &GrayImage) -> GrayImage {
    gradient_magnitude_l1(src, GradientKernel::Sobel)
}

/// Prewitt edge magnitude.
pub fn prewitt(src: &GrayImage) -> GrayImage {
    gradient_magnitude_l1(src, GradientKernel::Prewitt)
}

/// Euclidean gradient magnitude and direction of a float image.
#[derive(Clone, Debug)]
pub struct Gradient {
    /// `sqrt(gx² + gy²)` per pixel
    pub magnitude: ImageF32,
    /// `atan2(gy, gx)` in degrees, range `[-180, 180]`
    pub angle_deg: ImageF32,
}

/// Sobel gradient of the blurred image for the Canny pipeline.
pub fn sobel_gradient_f32(blurred: &ImageF32) -> Result<Gradient> {
    let (w, h) = (blurred.w, blurred.h);
    let mut magnitude = ImageF32::try_new(w, h)?;
    let mut angle_deg = ImageF32::try_new(w, h)?;

    if blurred.has_interior() {
        for y in 1..h - 1 {
            let rows = [blurred.row(y - 1), blurred.row(y), blurred.row(y + 1)];
            let mag_row = magnitude.row_mut(y);
            let ang_row = angle_deg.row_mut(y);
            for x in 1..w - 1 {
                let gx = SOBEL_X.response_f32(&rows, x);
                let gy = SOBEL_Y.response_f32(&rows, x);
                mag_row[x] = (gx * gx + gy * gy).sqrt();
                ang_row[x] = gy.atan2(gx).to_degrees();
            }
        }
    }

    Ok(Gradient {
        magnitude,
        angle_deg,
    })
}
