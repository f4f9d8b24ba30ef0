//! Gradient-direction helpers used by non-maximum suppression.

/// Fold an `atan2` angle in degrees from `[-180, 180]` into `[0, 180]`.
#[inline]
pub fn fold_half_turn_deg(angle: f32) -> f32 {
    if angle < 0.0 {
        angle + 180.0
    } else {
        angle
    }
}

/// Gradient direction quantised into four 45° buckets, each ±22.5° wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// 0° / 180°
    Horizontal,
    /// 45°
    Diagonal45,
    /// 90°
    Vertical,
    /// 135°
    Diagonal135,
}

impl Direction {
    /// Bucket for an angle already folded into `[0, 180]`.
    #[inline]
    pub fn from_folded_deg(angle: f32) -> Self {
        if !(22.5..157.5).contains(&angle) {
            Self::Horizontal
        } else if angle < 67.5 {
            Self::Diagonal45
        } else if angle < 112.5 {
            Self::Vertical
        } else {
            Self::Diagonal135
        }
    }

    /// `(dy, dx)` offsets of the two neighbours along the gradient.
    ///
    /// Rows grow downward, so the 45° neighbours are up-right and down-left.
    #[inline]
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        match self {
            Self::Horizontal => [(0, 1), (0, -1)],
            Self::Diagonal45 => [(-1, 1), (1, -1)],
            Self::Vertical => [(-1, 0), (1, 0)],
            Self::Diagonal135 => [(-1, -1), (1, 1)],
        }
    }
}
