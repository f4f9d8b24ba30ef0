//! Run reports: per-stage timings and a summary of each applied operation.
//!
//! Reports are serializable so the batch tool can write them as JSON.

pub mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};

use crate::image::GrayImage;
use serde::Serialize;

/// Size and intensity ceiling of an image at a point in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub width: usize,
    pub height: usize,
    pub max_value: u16,
}

impl From<&GrayImage> for ImageDescriptor {
    fn from(image: &GrayImage) -> Self {
        Self {
            width: image.w,
            height: image.h,
            max_value: image.max_value,
        }
    }
}

/// One applied operation: what ran, input and output shape, and how long
/// each of its stages took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReport {
    pub operation: String,
    pub input: ImageDescriptor,
    pub output: ImageDescriptor,
    pub timing: TimingBreakdown,
}

/// Full batch run: the loaded image, each operation, and the saved result.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input_path: String,
    pub output_path: String,
    pub operations: Vec<OperationReport>,
    pub total_ms: f64,
}
