//! Local Binary Pattern texture codes.
//!
//! Each interior pixel is compared with its 8 neighbours, visited clockwise
//! from the top-left. Neighbour `k` contributes bit `7 - k` when it is at
//! least as bright as the centre, so a flat patch codes to 255. Border
//! pixels stay 0.
use crate::image::rows::fill_rows;
use crate::image::{GrayImage, ImageView};

/// `(dy, dx)` neighbour offsets, clockwise from the top-left; index `k`
/// maps to bit `7 - k`.
pub const LBP_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// 8-bit LBP code of the pixel at `(x, y)`. Requires an interior position.
#[inline]
pub fn lbp_code(src: &GrayImage, x: usize, y: usize) -> u8 {
    let center = src.get(x, y);
    LBP_OFFSETS
        .iter()
        .enumerate()
        .fold(0u8, |code, (k, &(dy, dx))| {
            let neighbor = src.get(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
            if neighbor >= center {
                code | (1 << (7 - k))
            } else {
                code
            }
        })
}

/// LBP code image of `src`.
pub fn local_binary_pattern(src: &GrayImage) -> GrayImage {
    // codes use all eight bits
    let mut out = GrayImage::new(src.w, src.h);
    if !src.has_interior() {
        return out;
    }
    let (w, h, stride) = (src.w, src.h, out.stride);
    fill_rows(&mut out.data, stride, 1..h - 1, |y, dst_row| {
        for x in 1..w - 1 {
            dst_row[x] = lbp_code(src, x, y);
        }
    });
    out
}
