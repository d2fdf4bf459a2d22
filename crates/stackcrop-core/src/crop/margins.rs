use serde::{Deserialize, Serialize};

use crate::error::{Result, StackCropError};

/// Axis-aligned box in grid coordinates, all bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.left && col <= self.right && row >= self.top && row <= self.bottom
    }

    /// True if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

/// Pixel counts to trim from each image edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropMargins {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

/// Outcome of a successful crop computation. Fatal conditions are reported
/// through the error enum instead.
#[derive(Clone, Debug)]
pub struct CropResult {
    pub bounding_box: BoundingBox,
    pub margins: CropMargins,
    /// Human-readable summary of the box, margins, and truncation.
    pub diagnostics: String,
    /// Set when any truncation percentage exceeds the configured limit.
    pub warning: Option<String>,
}

/// Convert a final box into margins plus truncation diagnostics.
///
/// Width or height truncation above `crop_check_limit`, or area
/// truncation above its compounded two-axis equivalent, attaches a
/// manual-review warning; the result still succeeds with the computed
/// margins.
pub fn compute_crop_amount(
    bbox: &BoundingBox,
    width: usize,
    height: usize,
    crop_check_limit: f32,
) -> Result<CropResult> {
    if bbox.left > bbox.right || bbox.top > bbox.bottom || bbox.right >= width || bbox.bottom >= height {
        return Err(StackCropError::InvalidCrop(format!(
            "Box ({},{})..({},{}) does not fit a {width}x{height} grid",
            bbox.left, bbox.top, bbox.right, bbox.bottom
        )));
    }

    let margins = CropMargins {
        left: bbox.left,
        top: bbox.top,
        right: width - 1 - bbox.right,
        bottom: height - 1 - bbox.bottom,
    };

    let width_pct = 100.0 * (1.0 - bbox.width() as f32 / width as f32);
    let height_pct = 100.0 * (1.0 - bbox.height() as f32 / height as f32);
    let area_pct = 100.0
        * (1.0 - (bbox.width() as f32 * bbox.height() as f32) / (width as f32 * height as f32));

    let diagnostics = format!(
        "common area {}x{} at ({},{}); margins L{} T{} R{} B{}; truncated {:.1}% width, {:.1}% height, {:.1}% area",
        bbox.width(),
        bbox.height(),
        bbox.left,
        bbox.top,
        margins.left,
        margins.top,
        margins.right,
        margins.bottom,
        width_pct,
        height_pct,
        area_pct,
    );

    // Truncation compounds across axes: a box at the limit on both axes
    // loses 1 - (1 - limit)^2 of the area, so the area check is held to
    // that compounded limit rather than the per-axis one.
    let area_limit = 100.0 * (1.0 - (1.0 - crop_check_limit / 100.0).powi(2));

    let warning = if exceeds(width_pct, crop_check_limit)
        || exceeds(height_pct, crop_check_limit)
        || exceeds(area_pct, area_limit)
    {
        Some(format!(
            "truncation exceeds {crop_check_limit:.1}% ({width_pct:.1}% width, {height_pct:.1}% height, {area_pct:.1}% area); review the crop manually"
        ))
    } else {
        None
    };

    Ok(CropResult {
        bounding_box: *bbox,
        margins,
        diagnostics,
        warning,
    })
}

/// Slack on the limit comparisons: a box at exactly the limit is
/// acceptable, and f32 rounding of the percentages must not flip that.
const LIMIT_EPSILON: f32 = 1e-3;

fn exceeds(pct: f32, limit: f32) -> bool {
    pct > limit + LIMIT_EPSILON
}

/// Manual mode: accept a stored rectangle instead of detecting one.
///
/// Corner order is normalized; bounds are validated against the grid. Only
/// the margin/diagnostics step runs, detection is bypassed entirely.
pub fn crop_from_rect(
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    width: usize,
    height: usize,
    crop_check_limit: f32,
) -> Result<CropResult> {
    let bbox = BoundingBox {
        left: x0.min(x1),
        right: x0.max(x1),
        top: y0.min(y1),
        bottom: y0.max(y1),
    };
    compute_crop_amount(&bbox, width, height, crop_check_limit)
}
