use crate::coverage::CoverageGrid;

use super::config::{ToleranceConfig, ValidityMode};

/// Which axis a scan walks along. The other coordinate stays fixed.
#[derive(Clone, Copy, Debug)]
pub(super) enum ScanAxis {
    /// Walk along a row: the scanned index is a column, `fixed` is the row.
    Row,
    /// Walk along a column: the scanned index is a row, `fixed` is the column.
    Column,
}

#[derive(Clone, Copy, Debug)]
pub(super) enum ScanDirection {
    Forward,
    Backward,
}

/// Walk outward from `start` one step at a time and return the farthest
/// index still considered inside the covered region.
///
/// A contiguous-invalid counter resets on every valid sample. Once the
/// counter exceeds `tolerance.max_contiguous_invalid`, the edge is the last
/// index before the invalid run began. Reaching the grid boundary without
/// exceeding the tolerance makes the boundary index itself the edge.
pub(super) fn scan_to_edge<G: CoverageGrid>(
    grid: &G,
    axis: ScanAxis,
    fixed: usize,
    start: usize,
    direction: ScanDirection,
    mode: &ValidityMode,
    tolerance: &ToleranceConfig,
) -> usize {
    let len = match axis {
        ScanAxis::Row => grid.width(),
        ScanAxis::Column => grid.height(),
    };
    let (step, boundary) = match direction {
        ScanDirection::Forward => (1_isize, len as isize - 1),
        ScanDirection::Backward => (-1_isize, 0),
    };

    let mut pos = start as isize;
    let mut invalid_run = 0_u32;

    loop {
        let sample = match axis {
            ScanAxis::Row => grid.sample(pos as usize, fixed),
            ScanAxis::Column => grid.sample(fixed, pos as usize),
        };

        if mode.is_valid(sample) {
            invalid_run = 0;
        } else {
            invalid_run += 1;
            if invalid_run > tolerance.max_contiguous_invalid {
                // One step back from where the invalid run began.
                let edge = pos - step * invalid_run as isize;
                return edge.clamp(0, len as isize - 1) as usize;
            }
        }

        if pos == boundary {
            return pos as usize;
        }
        pos += step;
    }
}
