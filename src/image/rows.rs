//! Row-wise output filling shared by the 3×3 and 5×5 operators.
//!
//! Every operator writes one output row from a read-only source, so rows are
//! independent. With the `parallel` feature the rows are distributed with
//! rayon; otherwise they are visited in order.
use std::ops::Range;

/// Call `f(y, row)` for each row index in `rows`, where `row` is the mutable
/// slice of `stride` samples starting at `y * stride` in `out`.
pub fn fill_rows<P, F>(out: &mut [P], stride: usize, rows: Range<usize>, f: F)
where
    P: Send,
    F: Fn(usize, &mut [P]) + Send + Sync,
{
    if stride == 0 || rows.is_empty() {
        return;
    }
    let first = rows.start;
    let band = &mut out[rows.start * stride..rows.end * stride];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        band.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(i, row)| f(first + i, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, row) in band.chunks_mut(stride).enumerate() {
            f(first + i, row);
        }
    }
}
