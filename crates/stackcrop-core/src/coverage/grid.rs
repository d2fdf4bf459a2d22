use ndarray::Array2;

use crate::frame::Frame;

/// Read-only 2D scalar array sampled by the crop detection algorithm.
///
/// One value per pixel, indicating how well that pixel is covered by the
/// contributing frames of a stack. The grid is never written during a
/// computation.
pub trait CoverageGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sample the value at (column, row).
    fn sample(&self, col: usize, row: usize) -> f32;
}

impl CoverageGrid for Array2<f32> {
    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn sample(&self, col: usize, row: usize) -> f32 {
        self[[row, col]]
    }
}

impl CoverageGrid for Frame {
    fn width(&self) -> usize {
        self.data.ncols()
    }

    fn height(&self) -> usize {
        self.data.nrows()
    }

    fn sample(&self, col: usize, row: usize) -> f32 {
        self.data[[row, col]]
    }
}
