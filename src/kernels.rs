//! Fixed-point convolution kernels.
//!
//! Kernels are static tables of integer weights. `Kernel5` carries the
//! divisor that normalises its response; the 3×3 derivative kernels sum to
//! zero and are used unnormalised.

/// 3×3 integer kernel, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel3 {
    pub weights: [[i32; 3]; 3],
}

impl Kernel3 {
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Weighted sum of the 3×3 window centred on column `x` of `rows[1]`.
    #[inline]
    pub fn response_u8(&self, rows: &[&[u8]; 3], x: usize) -> i32 {
        let mut sum = 0i32;
        for (row, w) in rows.iter().zip(self.weights.iter()) {
            sum += row[x - 1] as i32 * w[0] + row[x] as i32 * w[1] + row[x + 1] as i32 * w[2];
        }
        sum
    }

    /// Float counterpart of [`Kernel3::response_u8`].
    #[inline]
    pub fn response_f32(&self, rows: &[&[f32]; 3], x: usize) -> f32 {
        let mut sum = 0.0f32;
        for (row, w) in rows.iter().zip(self.weights.iter()) {
            sum += row[x - 1] * w[0] as f32 + row[x] * w[1] as f32 + row[x + 1] * w[2] as f32;
        }
        sum
    }
}

/// 5×5 integer kernel with its normalisation divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel5 {
    pub weights: [[i32; 5]; 5],
    pub divisor: i32,
}

impl Kernel5 {
    pub const fn new(weights: [[i32; 5]; 5], divisor: i32) -> Self {
        Self { weights, divisor }
    }

    /// Unnormalised weighted sum of the 5×5 window centred on column `x` of `rows[2]`.
    #[inline]
    pub fn response_u8(&self, rows: &[&[u8]; 5], x: usize) -> i32 {
        let mut sum = 0i32;
        for (row, w) in rows.iter().zip(self.weights.iter()) {
            let window = &row[x - 2..=x + 2];
            sum += window
                .iter()
                .zip(w.iter())
                .map(|(&px, &k)| px as i32 * k)
                .sum::<i32>();
        }
        sum
    }
}

pub const SOBEL_X: Kernel3 = Kernel3::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);
pub const SOBEL_Y: Kernel3 = Kernel3::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]]);

pub const PREWITT_X: Kernel3 = Kernel3::new([[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]]);
pub const PREWITT_Y: Kernel3 = Kernel3::new([[-1, -1, -1], [0, 0, 0], [1, 1, 1]]);

/// Integer approximation of a σ≈1.4 Gaussian; weights sum to the divisor.
pub const GAUSSIAN_5X5: Kernel5 = Kernel5::new(
    [
        [2, 4, 5, 4, 2],
        [4, 9, 12, 9, 4],
        [5, 12, 15, 12, 5],
        [4, 9, 12, 9, 4],
        [2, 4, 5, 4, 2],
    ],
    159,
);
