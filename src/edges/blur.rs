//! Fixed-point 5×5 Gaussian smoothing, the first Canny stage.
use crate::error::Result;
use crate::image::{GrayImage, ImageF32, ImageView, ImageViewMut};
use crate::kernels::{Kernel5, GAUSSIAN_5X5};

/// Smooth `src` with the 5×5 Gaussian, dividing each response by 159.
///
/// Only pixels whose full window fits are computed (rows and columns
/// `2..dim-2`); the 2-pixel frame stays 0.0.
pub fn gaussian_blur_5x5(src: &GrayImage) -> Result<ImageF32> {
    convolve_5x5(src, &GAUSSIAN_5X5)
}

fn convolve_5x5(src: &GrayImage, kernel: &Kernel5) -> Result<ImageF32> {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::try_new(w, h)?;
    if w < 5 || h < 5 {
        return Ok(out);
    }
    let divisor = kernel.divisor as f32;
    for y in 2..h - 2 {
        let rows = [
            src.row(y - 2),
            src.row(y - 1),
            src.row(y),
            src.row(y + 1),
            src.row(y + 2),
        ];
        let dst = out.row_mut(y);
        for x in 2..w - 2 {
            dst[x] = kernel.response_u8(&rows, x) as f32 / divisor;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_keeps_level_inside_and_zero_frame() {
        let src = GrayImage::filled(7, 6, 80);
        let out = gaussian_blur_5x5(&src).unwrap();
        for y in 0..6 {
            for x in 0..7 {
                let inside = (2..5).contains(&x) && (2..4).contains(&y);
                let expected = if inside { 80.0 } else { 0.0 };
                assert!((out.get(x, y) - expected).abs() < 1e-4, "({x},{y})");
            }
        }
    }

    #[test]
    fn impulse_spreads_kernel_weights() {
        let mut src = GrayImage::new(9, 9);
        src.set(4, 4, 159);
        let out = gaussian_blur_5x5(&src).unwrap();
        assert!((out.get(4, 4) - 15.0).abs() < 1e-5);
        assert!((out.get(3, 4) - 12.0).abs() < 1e-5);
        assert!((out.get(2, 2) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn small_images_stay_zero() {
        let src = GrayImage::filled(4, 10, 255);
        let out = gaussian_blur_5x5(&src).unwrap();
        assert!(out.data.iter().all(|&v| v == 0.0));
    }
}
