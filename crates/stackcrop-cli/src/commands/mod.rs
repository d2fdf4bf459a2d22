pub mod apply;
pub mod detect;
pub mod run;

use clap::{Args, ValueEnum};
use stackcrop_core::consts::{
    DEFAULT_ANCHOR_FALLBACK_OFFSET, DEFAULT_CROP_CHECK_LIMIT, DEFAULT_MAX_CONTIGUOUS_INVALID,
    DEFAULT_WIGGLE_PASS_LIMIT,
};
use stackcrop_core::crop::{CropConfig, ToleranceConfig, ValidityMode};

#[derive(Clone, ValueEnum)]
pub enum ValidityArg {
    /// A pixel is valid iff its value is positive (default)
    Positive,
    /// A pixel is valid iff its value is at or below --rejection-limit
    RejectionLow,
}

/// Detection flags shared by `detect` and `run`.
#[derive(Args)]
pub struct CropOptions {
    /// Validity test applied to coverage samples
    #[arg(long, value_enum, default_value = "positive")]
    pub validity: ValidityArg,

    /// Rejection-low threshold: valid iff sample <= limit
    #[arg(long, default_value_t = 0.0)]
    pub rejection_limit: f32,

    /// Consecutive invalid samples tolerated during edge scans
    #[arg(long, default_value_t = DEFAULT_MAX_CONTIGUOUS_INVALID)]
    pub tolerance: u32,

    /// Truncation percentage above which a manual-review warning is printed
    #[arg(long, default_value_t = DEFAULT_CROP_CHECK_LIMIT)]
    pub check_limit: f32,

    /// Cap on border-validation passes for irregular boundaries
    #[arg(long, default_value_t = DEFAULT_WIGGLE_PASS_LIMIT)]
    pub wiggle_limit: u32,

    /// Diagonal offset of the fallback anchors near the grid center
    #[arg(long, default_value_t = DEFAULT_ANCHOR_FALLBACK_OFFSET)]
    pub anchor_offset: usize,
}

impl CropOptions {
    pub fn to_config(&self) -> CropConfig {
        let validity = match self.validity {
            ValidityArg::Positive => ValidityMode::PositiveValue,
            ValidityArg::RejectionLow => ValidityMode::RejectionLowThreshold(self.rejection_limit),
        };
        CropConfig {
            validity,
            tolerance: ToleranceConfig {
                max_contiguous_invalid: self.tolerance,
            },
            crop_check_limit: self.check_limit,
            wiggle_pass_limit: self.wiggle_limit,
            anchor_fallback_offset: self.anchor_offset,
        }
    }
}
