//! The "current image" slot driven by the interactive shell and the batch tool.
//!
//! Operations run against a borrowed image and produce a new one; the slot is
//! only replaced when the operation succeeds, so a failed load, resize or
//! Canny run leaves the previous image in place.
use crate::diagnostics::{ImageDescriptor, OperationReport, TimingBreakdown};
use crate::edges::{canny_detailed, CannyResult, EdgeDetector};
use crate::error::{ProcessError, Result};
use crate::filters::FilterKind;
use crate::image::io::{load_raster, save_raster};
use crate::image::GrayImage;
use crate::lbp::local_binary_pattern;
use crate::resample::{resize, ScaleFactor};
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// One image transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Resize { factor: ScaleFactor },
    Filter { kind: FilterKind },
    Edge { detector: EdgeDetector },
    Lbp,
}

impl Operation {
    /// Apply to `src`, returning the new image and per-stage timings.
    pub fn run(self, src: &GrayImage) -> Result<(GrayImage, TimingBreakdown)> {
        let mut timing = TimingBreakdown::default();
        let out = match self {
            Self::Resize { factor } => timing.time("resize", || resize(src, factor))?,
            Self::Filter { kind } => timing.time("filter", || kind.apply(src)),
            Self::Edge {
                detector: EdgeDetector::Canny,
            } => {
                let result = canny_detailed(src)?;
                timing = result.timing;
                result.edges
            }
            Self::Edge { detector } => timing.time("edge", || detector.apply(src))?,
            Self::Lbp => timing.time("lbp", || local_binary_pattern(src)),
        };
        Ok((out, timing))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize { factor } if factor.is_zoom() => write!(f, "zoom {factor}"),
            Self::Resize { factor } => write!(f, "shrink {factor}"),
            Self::Filter { kind } => write!(f, "{kind} filter"),
            Self::Edge { detector } => write!(f, "{detector} edge detection"),
            Self::Lbp => f.write_str("local binary pattern"),
        }
    }
}

/// Holds at most one image; empty until the first successful load.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: Option<GrayImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(image: GrayImage) -> Self {
        Self {
            current: Some(image),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&GrayImage> {
        self.current.as_ref()
    }

    /// The current image, or `NoImageLoaded`.
    pub fn image(&self) -> Result<&GrayImage> {
        self.current.as_ref().ok_or(ProcessError::NoImageLoaded)
    }

    /// Load `path` into the slot. The previous image is kept on failure.
    pub fn load(&mut self, path: &Path) -> Result<&GrayImage> {
        let image = load_raster(path).inspect_err(|e| {
            warn!("failed to load {}: {e}", path.display());
        })?;
        info!(
            "loaded {} ({}x{}, max {})",
            path.display(),
            image.w,
            image.h,
            image.max_value
        );
        Ok(self.current.insert(image))
    }

    /// Write the current image to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let image = self.image()?;
        save_raster(image, path)?;
        info!("saved {} ({}x{})", path.display(), image.w, image.h);
        Ok(())
    }

    /// Apply `op` and swap the result in on success.
    pub fn apply(&mut self, op: Operation) -> Result<OperationReport> {
        let src = self.image()?;
        let input = ImageDescriptor::from(src);
        let (out, timing) = op.run(src)?;
        Ok(self.commit(op, input, out, timing))
    }

    /// Run Canny once, keep the edge map as the current image and return
    /// every intermediate alongside the report.
    pub fn apply_canny(&mut self) -> Result<(OperationReport, CannyResult)> {
        let src = self.image()?;
        let input = ImageDescriptor::from(src);
        let detailed = canny_detailed(src)?;
        let op = Operation::Edge {
            detector: EdgeDetector::Canny,
        };
        let report = self.commit(op, input, detailed.edges.clone(), detailed.timing.clone());
        Ok((report, detailed))
    }

    fn commit(
        &mut self,
        op: Operation,
        input: ImageDescriptor,
        out: GrayImage,
        timing: TimingBreakdown,
    ) -> OperationReport {
        let report = OperationReport {
            operation: op.to_string(),
            input,
            output: ImageDescriptor::from(&out),
            timing,
        };
        info!(
            "{}: {}x{} -> {}x{} in {:.3} ms",
            report.operation,
            input.width,
            input.height,
            report.output.width,
            report.output.height,
            report.timing.total_ms
        );
        self.current = Some(out);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> GrayImage {
        let data = (0..w * h).map(|i| (i * 7 % 256) as u8).collect();
        GrayImage::from_raw(w, h, data).unwrap()
    }

    #[test]
    fn empty_session_reports_no_image() {
        let mut session = Session::new();
        assert!(!session.is_loaded());
        assert!(matches!(
            session.apply(Operation::Lbp),
            Err(ProcessError::NoImageLoaded)
        ));
        assert!(matches!(
            session.save(Path::new("unused.pgm")),
            Err(ProcessError::NoImageLoaded)
        ));
    }

    #[test]
    fn failed_operation_keeps_current_image() {
        let src = ramp(6, 5);
        let mut session = Session::with_image(src.clone());
        let err = session
            .apply(Operation::Resize {
                factor: ScaleFactor::ShrinkHalf,
            })
            .unwrap_err();
        assert!(matches!(err, ProcessError::Dimension { .. }));
        assert_eq!(session.current(), Some(&src));
    }

    #[test]
    fn failed_load_keeps_current_image() {
        let src = ramp(4, 4);
        let mut session = Session::with_image(src.clone());
        let err = session
            .load(Path::new("/definitely/not/here.pgm"))
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Codec(crate::error::CodecError::NotFound(_))
        ));
        assert_eq!(session.current(), Some(&src));
    }

    #[test]
    fn successful_operation_replaces_image_and_reports() {
        let mut session = Session::with_image(ramp(4, 4));
        let report = session
            .apply(Operation::Resize {
                factor: ScaleFactor::Zoom3,
            })
            .unwrap();
        assert_eq!(report.operation, "zoom 3x");
        assert_eq!((report.input.width, report.output.width), (4, 12));
        assert_eq!(session.image().unwrap().dimensions(), (12, 12));

        let report = session
            .apply(Operation::Edge {
                detector: EdgeDetector::Canny,
            })
            .unwrap();
        assert_eq!(report.timing.stages.len(), 4);
    }

    #[test]
    fn failed_canny_keeps_current_image() {
        // header claims more pixels than the float scratch buffers can hold
        let huge = GrayImage {
            w: usize::MAX / 4,
            h: 2,
            stride: usize::MAX / 4,
            max_value: 255,
            data: Vec::new(),
        };
        let mut session = Session::with_image(huge.clone());
        let err = session
            .apply(Operation::Edge {
                detector: EdgeDetector::Canny,
            })
            .unwrap_err();
        assert!(matches!(err, ProcessError::Allocation { .. }));
        assert!(matches!(
            session.apply_canny(),
            Err(ProcessError::Allocation { .. })
        ));
        assert_eq!(session.current(), Some(&huge));
    }

    #[test]
    fn apply_canny_returns_intermediates_and_keeps_edges() {
        let mut session = Session::with_image(ramp(8, 8));
        let (report, detailed) = session.apply_canny().unwrap();
        assert_eq!(report.operation, "Canny edge detection");
        assert_eq!(report.timing.stages.len(), 4);
        assert_eq!(detailed.suppressed.dimensions(), (8, 8));
        assert_eq!(session.current(), Some(&detailed.edges));
    }

    #[test]
    fn operations_deserialize_from_tagged_json() {
        let ops: Vec<Operation> = serde_json::from_str(
            r#"[
                {"op": "resize", "factor": "0.5"},
                {"op": "filter", "kind": "median"},
                {"op": "edge", "detector": "prewitt"},
                {"op": "lbp"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            ops,
            vec![
                Operation::Resize {
                    factor: ScaleFactor::ShrinkHalf
                },
                Operation::Filter {
                    kind: FilterKind::Median
                },
                Operation::Edge {
                    detector: EdgeDetector::Prewitt
                },
                Operation::Lbp,
            ]
        );
        let bad: std::result::Result<Operation, _> =
            serde_json::from_str(r#"{"op": "resize", "factor": "4"}"#);
        assert!(bad.is_err());
    }
}
