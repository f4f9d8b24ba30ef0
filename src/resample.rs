//! Integer-factor resampling: nearest-neighbour zoom and subsample shrink.
//!
//! Only the four interactive ratios are accepted through [`ScaleFactor`];
//! the underlying functions take any integer factor.
use crate::error::{ProcessError, Result};
use crate::image::rows::fill_rows;
use crate::image::{GrayImage, ImageView};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Supported resize ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ScaleFactor {
    /// ×2 nearest-neighbour zoom
    Zoom2,
    /// ×3 nearest-neighbour zoom
    Zoom3,
    /// ×0.5 shrink, keeps every 2nd sample
    ShrinkHalf,
    /// ×0.25 shrink, keeps every 4th sample
    ShrinkQuarter,
}

impl ScaleFactor {
    /// Integer stride applied by zoom or shrink.
    pub fn factor(self) -> usize {
        match self {
            Self::Zoom2 | Self::ShrinkHalf => 2,
            Self::Zoom3 => 3,
            Self::ShrinkQuarter => 4,
        }
    }

    pub fn is_zoom(self) -> bool {
        matches!(self, Self::Zoom2 | Self::Zoom3)
    }

    /// The text token this factor is entered as.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zoom2 => "2",
            Self::Zoom3 => "3",
            Self::ShrinkHalf => "0.5",
            Self::ShrinkQuarter => "0.25",
        }
    }
}

impl FromStr for ScaleFactor {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2" => Ok(Self::Zoom2),
            "3" => Ok(Self::Zoom3),
            "0.5" => Ok(Self::ShrinkHalf),
            "0.25" => Ok(Self::ShrinkQuarter),
            other => Err(ProcessError::UnsupportedFactor(format!(
                "scaling factor '{other}' (supported: 2, 3, 0.5, 0.25)"
            ))),
        }
    }
}

impl TryFrom<String> for ScaleFactor {
    type Error = ProcessError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_str())
    }
}

/// Enlarge by `factor`, copying each source sample into a `factor × factor` block.
pub fn zoom_nearest(src: &GrayImage, factor: usize) -> Result<GrayImage> {
    if factor < 2 {
        return Err(ProcessError::UnsupportedFactor(format!(
            "zoom factor {factor} (must be at least 2)"
        )));
    }
    let (nw, nh) = (src.w * factor, src.h * factor);
    let mut out = src.blank_like(nw, nh);
    let stride = out.stride;
    fill_rows(&mut out.data, stride, 0..nh, |y, dst_row| {
        let src_row = src.row(y / factor);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            *dst_px = src_row[x / factor];
        }
    });
    Ok(out)
}

/// Reduce by `factor`, keeping the sample at every `factor`-th row and column.
///
/// Fails with [`ProcessError::Dimension`] unless both dimensions are divisible
/// by `factor`.
pub fn shrink_subsample(src: &GrayImage, factor: usize) -> Result<GrayImage> {
    if factor == 0 {
        return Err(ProcessError::UnsupportedFactor(
            "shrink factor 0".to_string(),
        ));
    }
    if src.w % factor != 0 || src.h % factor != 0 {
        return Err(ProcessError::Dimension {
            width: src.w,
            height: src.h,
            factor,
        });
    }
    let (nw, nh) = (src.w / factor, src.h / factor);
    let mut out = src.blank_like(nw, nh);
    let stride = out.stride;
    fill_rows(&mut out.data, stride, 0..nh, |y, dst_row| {
        let src_row = src.row(y * factor);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            *dst_px = src_row[x * factor];
        }
    });
    Ok(out)
}

/// Apply one of the supported resize ratios.
pub fn resize(src: &GrayImage, scale: ScaleFactor) -> Result<GrayImage> {
    if scale.is_zoom() {
        zoom_nearest(src, scale.factor())
    } else {
        shrink_subsample(src, scale.factor())
    }
}
