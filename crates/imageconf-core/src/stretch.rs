use ndarray::{ArrayBase, Data, Dimension};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{ImageConfError, Result};

/// Display limits for a contrast stretch of `level_percent` percent.
///
/// `level_percent <= 0` (the "None" choice) gives the finite min/max.
/// Otherwise the limits are the `level_percent` and `100 - level_percent`
/// percentiles of the finite values. Non-finite pixels are ignored.
pub fn contrast_limits<S, D>(data: &ArrayBase<S, D>, level_percent: f64) -> Result<(f32, f32)>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    let mut sorted: Vec<f32> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(ImageConfError::EmptyImage);
    }
    if sorted.len() >= PARALLEL_PIXEL_THRESHOLD {
        sorted.par_sort_unstable_by(f32::total_cmp);
    } else {
        sorted.sort_unstable_by(f32::total_cmp);
    }

    let n = sorted.len();
    if level_percent.is_nan() || level_percent <= 0.0 {
        return Ok((sorted[0], sorted[n - 1]));
    }

    let fraction = (level_percent / 100.0).min(0.5);
    let last = (n - 1) as f64;
    let lo_idx = (last * fraction).round() as usize;
    let hi_idx = (last * (1.0 - fraction)).round() as usize;

    Ok((sorted[lo_idx.min(n - 1)], sorted[hi_idx.min(n - 1)]))
}
