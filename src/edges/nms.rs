//! Non-maximum suppression on the Canny gradient magnitude.
//!
//! The gradient angle is folded into `[0, 180]` and quantised into four
//! 45° buckets. A pixel survives when its magnitude is at least as large as
//! both neighbours along that direction; the survivor is clamped to 255.
//! Ties survive, so plateaus stay two pixels wide until hysteresis.
use crate::angle::{fold_half_turn_deg, Direction};
use crate::edges::grad::Gradient;
use crate::error::Result;
use crate::image::{GrayImage, ImageView, ImageViewMut};

/// Thin the gradient magnitude to local maxima along the gradient direction.
///
/// The output has `max_value = 255` and a zero 1-pixel frame.
pub fn non_maximum_suppression(gradient: &Gradient) -> Result<GrayImage> {
    let mag = &gradient.magnitude;
    let (w, h) = (mag.w, mag.h);
    let mut out = GrayImage::try_new(w, h)?;
    if !mag.has_interior() {
        return Ok(out);
    }

    for y in 1..h - 1 {
        let angle_row = gradient.angle_deg.row(y);
        let mag_row = mag.row(y);
        let dst = out.row_mut(y);
        for x in 1..w - 1 {
            let m = mag_row[x];
            let direction = Direction::from_folded_deg(fold_half_turn_deg(angle_row[x]));
            let is_max = direction.neighbor_offsets().iter().all(|&(dy, dx)| {
                let ny = y.wrapping_add_signed(dy);
                let nx = x.wrapping_add_signed(dx);
                m >= mag.get(nx, ny)
            });
            dst[x] = if is_max { m.min(255.0) as u8 } else { 0 };
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    fn gradient_with(mag: Vec<f32>, angle: f32, w: usize, h: usize) -> Gradient {
        let mut magnitude = ImageF32::new(w, h);
        magnitude.data = mag;
        let mut angle_deg = ImageF32::new(w, h);
        angle_deg.data.fill(angle);
        Gradient {
            magnitude,
            angle_deg,
        }
    }

    #[test]
    fn keeps_ridge_across_horizontal_gradient() {
        // columns carry 10, 50, 30 along a horizontal gradient
        let row = [10.0, 50.0, 30.0, 5.0];
        let mag: Vec<f32> = row.iter().cycle().take(12).copied().collect();
        let grad = gradient_with(mag, 0.0, 4, 3);
        let out = non_maximum_suppression(&grad).unwrap();
        assert_eq!(out.get(1, 1), 50);
        assert_eq!(out.get(2, 1), 0);
        assert_eq!(out.get(1, 0), 0);
    }

    #[test]
    fn negative_angles_fold_and_values_clamp() {
        // vertical ridge through the middle row; angle -90 folds to 90
        let mag = vec![1.0, 1.0, 1.0, 400.0, 400.0, 400.0, 2.0, 2.0, 2.0];
        let grad = gradient_with(mag, -90.0, 3, 3);
        let out = non_maximum_suppression(&grad).unwrap();
        assert_eq!(out.get(1, 1), 255);
    }

    #[test]
    fn diagonal_neighbours_follow_bucket() {
        // 45° compares up-right (2,0) and down-left (0,2)
        let mut mag = vec![0.0; 9];
        mag[4] = 20.0;
        mag[2] = 30.0;
        let grad = gradient_with(mag.clone(), 45.0, 3, 3);
        let out = non_maximum_suppression(&grad).unwrap();
        assert_eq!(out.get(1, 1), 0);
        // 135° compares up-left and down-right, which are both 0
        let grad = gradient_with(mag, 135.0, 3, 3);
        let out = non_maximum_suppression(&grad).unwrap();
        assert_eq!(out.get(1, 1), 20);
    }
}
