//! 3×3 smoothing filters.
//!
//! Both filters seed the output with a copy of the source, so the outermost
//! ring keeps its original samples; only interior pixels are recomputed.
//! Images narrower or shorter than 3 pixels come back unchanged.

pub mod mean;
pub mod median;

pub use mean::mean_filter_3x3;
pub use median::median_filter_3x3;

use crate::error::{ProcessError, Result};
use crate::image::GrayImage;
use serde::Deserialize;
use std::fmt;

/// Smoothing filter selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Mean,
    Median,
}

impl FilterKind {
    /// Map the interactive sub-menu choice (`1` mean, `2` median).
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(Self::Mean),
            2 => Ok(Self::Median),
            other => Err(ProcessError::UnsupportedFactor(format!(
                "filter choice {other}"
            ))),
        }
    }

    pub fn apply(self, src: &GrayImage) -> GrayImage {
        match self {
            Self::Mean => mean_filter_3x3(src),
            Self::Median => median_filter_3x3(src),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => f.write_str("mean 3x3"),
            Self::Median => f.write_str("median 3x3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn noisy(w: usize, h: usize) -> GrayImage {
        let data = (0..w * h).map(|i| ((i * 37 + 11) % 251) as u8).collect();
        GrayImage::from_raw(w, h, data).unwrap()
    }

    fn border(img: &GrayImage) -> Vec<u8> {
        let mut ring = Vec::new();
        for y in 0..img.h {
            for x in 0..img.w {
                if x == 0 || y == 0 || x == img.w - 1 || y == img.h - 1 {
                    ring.push(img.get(x, y));
                }
            }
        }
        ring
    }

    #[test]
    fn both_filters_preserve_border_ring() {
        let src = noisy(9, 7);
        for kind in [FilterKind::Mean, FilterKind::Median] {
            let out = kind.apply(&src);
            assert_eq!(out.dimensions(), src.dimensions());
            assert_eq!(border(&out), border(&src), "{kind} changed the border");
        }
    }

    #[test]
    fn tiny_images_pass_through() {
        let src = noisy(2, 5);
        assert_eq!(mean_filter_3x3(&src), src);
        assert_eq!(median_filter_3x3(&src), src);
    }

    #[test]
    fn menu_choices() {
        assert_eq!(FilterKind::from_choice(1).unwrap(), FilterKind::Mean);
        assert_eq!(FilterKind::from_choice(2).unwrap(), FilterKind::Median);
        assert!(FilterKind::from_choice(3).is_err());
    }
}
