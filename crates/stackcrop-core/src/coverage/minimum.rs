use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::{Result, StackCropError};
use crate::frame::Frame;

/// Combine aligned frames by taking the minimum at each pixel.
///
/// The result is the coverage grid: a pixel keeps a positive value only if
/// every contributing frame had signal there, so uncovered borders from
/// dithering or field rotation drop to the background level.
pub fn minimum_combine(frames: &[Frame]) -> Result<Frame> {
    if frames.is_empty() {
        return Err(StackCropError::EmptySequence);
    }

    let (h, w) = frames[0].data.dim();
    for frame in &frames[1..] {
        let (fh, fw) = frame.data.dim();
        if (fh, fw) != (h, w) {
            return Err(StackCropError::DimensionMismatch {
                expected_width: w,
                expected_height: h,
                width: fw,
                height: fh,
            });
        }
    }

    let min = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames
            .par_iter()
            .map(|f| f.data.clone())
            .reduce_with(elementwise_min)
            .unwrap_or_else(|| frames[0].data.clone())
    } else {
        let mut acc = frames[0].data.clone();
        for frame in &frames[1..] {
            acc = elementwise_min(acc, frame.data.clone());
        }
        acc
    };

    Ok(Frame::new(min, frames[0].original_bit_depth))
}

fn elementwise_min(mut a: Array2<f32>, b: Array2<f32>) -> Array2<f32> {
    a.zip_mut_with(&b, |x, &y| *x = x.min(y));
    a
}
