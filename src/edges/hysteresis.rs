//! Double thresholding and edge tracking, the last Canny stage.
//!
//! Thresholds are relative to the strongest suppressed response:
//! `high = peak * 0.18`, `low = peak * 0.09`. Pixels at or above `high` are
//! strong, pixels at or above `low` are weak. Weak pixels survive only when
//! 8-connected (through other weak pixels) to a strong interior pixel.
//!
//! Tracking uses an explicit work-list, so stack usage does not grow with
//! the size of a connected edge.
use crate::error::Result;
use crate::image::{GrayImage, ImageView};
use log::debug;

/// Output value of a confirmed edge pixel.
pub const STRONG_EDGE: u8 = 255;
/// Provisional value of a weak pixel before tracking.
pub const WEAK_EDGE: u8 = 100;

pub const HIGH_THRESHOLD_RATIO: f32 = 0.18;
pub const LOW_THRESHOLD_RATIO: f32 = 0.09;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Strong/weak thresholds derived from the peak response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HysteresisThresholds {
    pub low: f32,
    pub high: f32,
}

impl HysteresisThresholds {
    pub fn from_peak(peak: u8) -> Self {
        let peak = peak as f32;
        Self {
            low: peak * LOW_THRESHOLD_RATIO,
            high: peak * HIGH_THRESHOLD_RATIO,
        }
    }

    #[inline]
    fn classify(&self, value: u8) -> u8 {
        let v = value as f32;
        if v >= self.high {
            STRONG_EDGE
        } else if v >= self.low {
            WEAK_EDGE
        } else {
            0
        }
    }
}

/// Classify, track and finalise edges. The result holds only 0 and 255.
///
/// An all-zero input yields an all-zero result.
pub fn hysteresis_threshold(suppressed: &GrayImage) -> Result<GrayImage> {
    let (w, h) = (suppressed.w, suppressed.h);
    let mut edges = GrayImage::try_new(w, h)?;
    let peak = suppressed.data.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return Ok(edges);
    }

    let thresholds = HysteresisThresholds::from_peak(peak);
    for (dst, &src) in edges.data.iter_mut().zip(suppressed.data.iter()) {
        *dst = thresholds.classify(src);
    }
    debug!(
        "hysteresis peak={} low={:.2} high={:.2}",
        peak, thresholds.low, thresholds.high
    );

    if edges.has_interior() {
        let promoted = track_edges(&mut edges);
        debug!("hysteresis promoted {} weak pixels", promoted);
    }

    for px in edges.data.iter_mut() {
        if *px == WEAK_EDGE {
            *px = 0;
        }
    }
    Ok(edges)
}

/// Promote weak interior pixels reachable from strong interior pixels.
/// Returns the number of promoted pixels.
fn track_edges(edges: &mut GrayImage) -> usize {
    let (w, h, stride) = (edges.w, edges.h, edges.stride);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut promoted = 0usize;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if edges.data[y * stride + x] != STRONG_EDGE {
                continue;
            }
            stack.push((x, y));
            while let Some((cx, cy)) = stack.pop() {
                for &(dy, dx) in NEIGHBORS_8.iter() {
                    let nx = cx.wrapping_add_signed(dx);
                    let ny = cy.wrapping_add_signed(dy);
                    if nx == 0 || ny == 0 || nx >= w - 1 || ny >= h - 1 {
                        continue;
                    }
                    let i = ny * stride + nx;
                    if edges.data[i] == WEAK_EDGE {
                        edges.data[i] = STRONG_EDGE;
                        promoted += 1;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }
    promoted
}
