use crate::consts::NON_VALID_COUNT_LIMIT;
use crate::coverage::CoverageGrid;
use crate::error::{Result, StackCropError};

use super::config::{CropConfig, ValidityMode};
use super::margins::BoundingBox;

/// Shrink the box until every pixel on each of its four border lines is
/// valid, within the wiggle tolerance.
///
/// A border line is acceptable when it has no invalid pixels, or exactly
/// one contiguous invalid run no longer than [`NON_VALID_COUNT_LIMIT`].
/// An unacceptable line moves its own edge inward by one. Passes repeat
/// while any edge moved; exceeding the pass cap fails with `TooWiggly`.
pub(super) fn validate_borders<G: CoverageGrid>(
    grid: &G,
    mut bbox: BoundingBox,
    mode: &ValidityMode,
    config: &CropConfig,
) -> Result<BoundingBox> {
    for _ in 0..config.wiggle_pass_limit {
        let mut moved = false;

        // Top row.
        if !line_acceptable(
            (bbox.left..=bbox.right).map(|col| grid.sample(col, bbox.top)),
            mode,
        ) {
            bbox.top += 1;
            moved = true;
        }
        // Bottom row.
        if !line_acceptable(
            (bbox.left..=bbox.right).map(|col| grid.sample(col, bbox.bottom)),
            mode,
        ) {
            bbox.bottom = bbox.bottom.saturating_sub(1);
            moved = true;
        }
        // Left column.
        if !line_acceptable(
            (bbox.top..=bbox.bottom).map(|row| grid.sample(bbox.left, row)),
            mode,
        ) {
            bbox.left += 1;
            moved = true;
        }
        // Right column.
        if !line_acceptable(
            (bbox.top..=bbox.bottom).map(|row| grid.sample(bbox.right, row)),
            mode,
        ) {
            bbox.right = bbox.right.saturating_sub(1);
            moved = true;
        }

        if !moved {
            return Ok(bbox);
        }
        if bbox.left > bbox.right || bbox.top > bbox.bottom {
            return Err(StackCropError::NoOverlap);
        }
    }

    Err(StackCropError::TooWiggly {
        passes: config.wiggle_pass_limit,
    })
}

/// A line is acceptable with zero invalid runs, or a single run of length
/// at most [`NON_VALID_COUNT_LIMIT`]. Two separate invalid pixels on one
/// line are two runs and reject it.
fn line_acceptable(samples: impl Iterator<Item = f32>, mode: &ValidityMode) -> bool {
    let mut run_count = 0_u32;
    let mut longest_run = 0_u32;
    let mut current_run = 0_u32;

    for sample in samples {
        if mode.is_valid(sample) {
            if current_run > 0 {
                run_count += 1;
                longest_run = longest_run.max(current_run);
                current_run = 0;
            }
        } else {
            current_run += 1;
        }
    }
    if current_run > 0 {
        run_count += 1;
        longest_run = longest_run.max(current_run);
    }

    run_count == 0 || (run_count == 1 && longest_run <= NON_VALID_COUNT_LIMIT)
}
