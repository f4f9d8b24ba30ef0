//! Four-stage Canny edge detector.
//!
//! `Blur → GradientMagnitude → NonMaxSuppression → Hysteresis → Done`.
//! Each stage consumes the full output of the previous one and allocates
//! its own buffer; the source image is never modified. If any buffer cannot
//! be allocated the whole run fails with `ProcessError::Allocation`.
use super::blur::gaussian_blur_5x5;
use super::grad::{sobel_gradient_f32, Gradient};
use super::hysteresis::hysteresis_threshold;
use super::nms::non_maximum_suppression;
use crate::diagnostics::TimingBreakdown;
use crate::error::Result;
use crate::image::{GrayImage, ImageF32};
use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CannyStage {
    Blur,
    GradientMagnitude,
    NonMaxSuppression,
    Hysteresis,
    Done,
}

impl CannyStage {
    pub fn next(self) -> Self {
        match self {
            Self::Blur => Self::GradientMagnitude,
            Self::GradientMagnitude => Self::NonMaxSuppression,
            Self::NonMaxSuppression => Self::Hysteresis,
            Self::Hysteresis | Self::Done => Self::Done,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blur => "gaussian_blur",
            Self::GradientMagnitude => "gradient",
            Self::NonMaxSuppression => "non_max_suppression",
            Self::Hysteresis => "hysteresis",
            Self::Done => "done",
        }
    }
}

/// Every intermediate of one Canny run plus its stage timings.
#[derive(Clone, Debug)]
pub struct CannyResult {
    pub blurred: ImageF32,
    pub gradient: Gradient,
    pub suppressed: GrayImage,
    /// Final binary edge map (0 or 255)
    pub edges: GrayImage,
    pub timing: TimingBreakdown,
}

/// Run all stages and keep the intermediates.
pub fn canny_detailed(src: &GrayImage) -> Result<CannyResult> {
    let mut timing = TimingBreakdown::default();
    let mut stage = CannyStage::Blur;

    let blurred = timing.time(stage.label(), || gaussian_blur_5x5(src))?;
    stage = stage.next();

    let gradient = timing.time(stage.label(), || sobel_gradient_f32(&blurred))?;
    stage = stage.next();

    let suppressed = timing.time(stage.label(), || non_maximum_suppression(&gradient))?;
    stage = stage.next();

    let edges = timing.time(stage.label(), || hysteresis_threshold(&suppressed))?;
    stage = stage.next();
    debug_assert_eq!(stage, CannyStage::Done);

    debug!(
        "canny {}x{} finished in {:.3} ms ({} edge pixels)",
        src.w,
        src.h,
        timing.total_ms,
        edges.data.iter().filter(|&&v| v != 0).count()
    );

    Ok(CannyResult {
        blurred,
        gradient,
        suppressed,
        edges,
        timing,
    })
}

/// Canny edge map of `src`.
pub fn canny(src: &GrayImage) -> Result<GrayImage> {
    canny_detailed(src).map(|result| result.edges)
}
