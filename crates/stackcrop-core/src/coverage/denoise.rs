use ndarray::{Array2, ArrayViewMut1, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// 3x3 median filter over a coverage grid.
///
/// Suppresses isolated hot pixels and thin rejection artifacts so that a
/// failed crop detection can be retried on a cleaner grid. Out-of-bounds
/// neighbors are skipped rather than mirrored.
pub fn median_denoise(grid: &Array2<f32>) -> Array2<f32> {
    let (h, w) = grid.dim();
    let mut result = Array2::zeros((h, w));

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, out)| denoise_row(grid, row, out));
    } else {
        for (row, out) in result.axis_iter_mut(Axis(0)).enumerate() {
            denoise_row(grid, row, out);
        }
    }

    result
}

fn denoise_row(grid: &Array2<f32>, row: usize, mut out: ArrayViewMut1<'_, f32>) {
    let (h, w) = grid.dim();
    let mut neighborhood = Vec::with_capacity(9);

    for col in 0..w {
        neighborhood.clear();
        for dr in -1..=1_i32 {
            for dc in -1..=1_i32 {
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr >= 0 && nr < h as i32 && nc >= 0 && nc < w as i32 {
                    neighborhood.push(grid[[nr as usize, nc as usize]]);
                }
            }
        }
        neighborhood
            .sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        out[col] = neighborhood[neighborhood.len() / 2];
    }
}
