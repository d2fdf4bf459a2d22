use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ANCHOR_FALLBACK_OFFSET, DEFAULT_CROP_CHECK_LIMIT, DEFAULT_MAX_CONTIGUOUS_INVALID,
    DEFAULT_WIGGLE_PASS_LIMIT,
};

/// How a coverage sample is classified as valid or invalid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ValidityMode {
    /// Valid iff the sample is strictly positive.
    #[default]
    PositiveValue,
    /// Valid iff the sample is at or below the limit. Used with rejection
    /// maps where a low value means every frame contributed.
    RejectionLowThreshold(f32),
}

impl ValidityMode {
    pub fn is_valid(&self, sample: f32) -> bool {
        match self {
            Self::PositiveValue => sample > 0.0,
            Self::RejectionLowThreshold(limit) => sample <= *limit,
        }
    }
}

/// Tolerance for noise encountered while scanning toward a coverage edge.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Consecutive invalid samples tolerated before a scan is declared to
    /// have passed the edge.
    #[serde(default = "default_max_contiguous_invalid")]
    pub max_contiguous_invalid: u32,
}

fn default_max_contiguous_invalid() -> u32 {
    DEFAULT_MAX_CONTIGUOUS_INVALID
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            max_contiguous_invalid: DEFAULT_MAX_CONTIGUOUS_INVALID,
        }
    }
}

/// Configuration for crop-to-common-area detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CropConfig {
    /// Validity classification of coverage samples.
    #[serde(default)]
    pub validity: ValidityMode,
    /// Scan noise tolerance.
    #[serde(default)]
    pub tolerance: ToleranceConfig,
    /// Truncation percentage above which the result carries a warning.
    #[serde(default = "default_crop_check_limit")]
    pub crop_check_limit: f32,
    /// Cap on border-validation passes before failing as too wiggly.
    #[serde(default = "default_wiggle_pass_limit")]
    pub wiggle_pass_limit: u32,
    /// Diagonal offset of the fallback anchors tried when the grid center
    /// is not a valid sample.
    #[serde(default = "default_anchor_fallback_offset")]
    pub anchor_fallback_offset: usize,
}

fn default_crop_check_limit() -> f32 {
    DEFAULT_CROP_CHECK_LIMIT
}
fn default_wiggle_pass_limit() -> u32 {
    DEFAULT_WIGGLE_PASS_LIMIT
}
fn default_anchor_fallback_offset() -> usize {
    DEFAULT_ANCHOR_FALLBACK_OFFSET
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            validity: ValidityMode::default(),
            tolerance: ToleranceConfig::default(),
            crop_check_limit: DEFAULT_CROP_CHECK_LIMIT,
            wiggle_pass_limit: DEFAULT_WIGGLE_PASS_LIMIT,
            anchor_fallback_offset: DEFAULT_ANCHOR_FALLBACK_OFFSET,
        }
    }
}
