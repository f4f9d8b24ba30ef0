//! Edge detection: 3×3 gradient operators and the four-stage Canny detector.
//!
//! - `grad`: Sobel/Prewitt L1 magnitude on 8-bit images, and the Euclidean
//!   Sobel gradient with angle used inside Canny.
//! - `blur`: 5×5 fixed-point Gaussian smoothing into a float buffer.
//! - `nms`: direction-aligned non-maximum suppression.
//! - `hysteresis`: double thresholding with explicit-stack edge tracking.
//! - `canny`: runs the stages in order and records per-stage timings.
//!
//! Border handling: no operator reads outside the image. Pixels whose window
//! would leave the image are not computed and stay zero in freshly allocated
//! outputs.

pub mod blur;
pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use blur::gaussian_blur_5x5;
pub use canny::{canny, canny_detailed, CannyResult, CannyStage};
pub use grad::{gradient_magnitude_l1, prewitt, sobel, sobel_gradient_f32, Gradient, GradientKernel};
pub use hysteresis::{hysteresis_threshold, HysteresisThresholds, STRONG_EDGE, WEAK_EDGE};
pub use nms::non_maximum_suppression;

use crate::error::{ProcessError, Result};
use crate::image::GrayImage;
use serde::Deserialize;
use std::fmt;

/// Edge detector selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDetector {
    Sobel,
    Prewitt,
    Canny,
}

impl EdgeDetector {
    /// Map the interactive sub-menu choice (`1` Sobel, `2` Prewitt, `3` Canny).
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(Self::Sobel),
            2 => Ok(Self::Prewitt),
            3 => Ok(Self::Canny),
            other => Err(ProcessError::UnsupportedFactor(format!(
                "edge detection choice {other}"
            ))),
        }
    }

    pub fn apply(self, src: &GrayImage) -> Result<GrayImage> {
        match self {
            Self::Sobel => Ok(sobel(src)),
            Self::Prewitt => Ok(prewitt(src)),
            Self::Canny => canny(src),
        }
    }
}

impl fmt::Display for EdgeDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sobel => f.write_str("Sobel"),
            Self::Prewitt => f.write_str("Prewitt"),
            Self::Canny => f.write_str("Canny"),
        }
    }
}
