#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod session;

// Algorithms. Each takes a borrowed image and returns a new one.
pub mod angle;
pub mod edges;
pub mod filters;
pub mod kernels;
pub mod lbp;
pub mod resample;

// Tool configuration (batch binary).
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{CodecError, ProcessError, Result};
pub use crate::image::{GrayImage, ImageF32};
pub use crate::session::{Operation, Session};

pub use crate::edges::{canny, prewitt, sobel, EdgeDetector};
pub use crate::filters::{mean_filter_3x3, median_filter_3x3, FilterKind};
pub use crate::lbp::local_binary_pattern;
pub use crate::resample::{resize, shrink_subsample, zoom_nearest, ScaleFactor};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pgm_processor::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> pgm_processor::Result<()> {
/// let mut session = Session::new();
/// session.load(Path::new("lena.pgm"))?;
/// session.apply(Operation::Filter { kind: FilterKind::Median })?;
/// session.apply(Operation::Edge { detector: EdgeDetector::Canny })?;
/// session.save(Path::new("lena_edges.pgm"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImage, ImageView, ImageViewMut};
    pub use crate::{EdgeDetector, FilterKind, Operation, ScaleFactor, Session};
}
