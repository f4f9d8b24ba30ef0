use crate::image::rows::fill_rows;
use crate::image::{GrayImage, ImageView};

/// Median filter: each interior pixel becomes the 5th smallest of its 3×3
/// neighbourhood.
pub fn median_filter_3x3(src: &GrayImage) -> GrayImage {
    let mut out = src.clone();
    if !src.has_interior() {
        return out;
    }
    let (w, h, stride) = (src.w, src.h, out.stride);
    fill_rows(&mut out.data, stride, 1..h - 1, |y, dst_row| {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        let mut window = [0u8; 9];
        for x in 1..w - 1 {
            for (dst, row) in window.chunks_exact_mut(3).zip(rows.iter()) {
                dst.copy_from_slice(&row[x - 1..=x + 1]);
            }
            window.sort_unstable();
            dst_row[x] = window[4];
        }
    });
    out
}
