//! Crop-to-common-area detection.
//!
//! After integration, border pixels not covered by every aligned frame
//! must be excluded. Starting from a valid interior anchor, the detector
//! scans outward to a maximal candidate box, shrinks it until all four
//! corners are valid, then shrinks further until every border line is
//! valid within a small wiggle tolerance, and finally converts the box
//! into per-edge crop margins with truncation diagnostics.

pub mod apply;
pub mod config;
pub mod context;

mod border;
mod corners;
mod finder;
mod margins;
mod scan;

use tracing::debug;

use crate::coverage::CoverageGrid;
use crate::error::Result;

pub use config::{CropConfig, ToleranceConfig, ValidityMode};
pub use context::{detect_with_retry, CropContext};
pub use finder::find_candidate_box;
pub use margins::{compute_crop_amount, crop_from_rect, BoundingBox, CropMargins, CropResult};

/// Detect the largest axis-aligned rectangle, containing the grid center,
/// that is valid across all contributing frames.
pub fn detect_crop<G: CoverageGrid>(grid: &G, config: &CropConfig) -> Result<CropResult> {
    let candidate = find_candidate_box(grid, config)?;
    debug!(
        "candidate box ({},{})..({},{})",
        candidate.left, candidate.top, candidate.right, candidate.bottom
    );

    let converged = corners::converge_corners(grid, candidate, &config.validity);
    let validated = border::validate_borders(grid, converged, &config.validity, config)?;

    compute_crop_amount(
        &validated,
        grid.width(),
        grid.height(),
        config.crop_check_limit,
    )
}
