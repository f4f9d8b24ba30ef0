use crate::image::rows::fill_rows;
use crate::image::{GrayImage, ImageView};

/// Box filter: each interior pixel becomes the truncated mean of its 3×3
/// neighbourhood.
pub fn mean_filter_3x3(src: &GrayImage) -> GrayImage {
    let mut out = src.clone();
    if !src.has_interior() {
        return out;
    }
    let (w, h, stride) = (src.w, src.h, out.stride);
    fill_rows(&mut out.data, stride, 1..h - 1, |y, dst_row| {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        for x in 1..w - 1 {
            let sum: u32 = rows
                .iter()
                .map(|r| r[x - 1] as u32 + r[x] as u32 + r[x + 1] as u32)
                .sum();
            dst_row[x] = (sum / 9) as u8;
        }
    });
    out
}
