use tracing::{info, warn};

use crate::coverage::CoverageGrid;
use crate::error::{Result, StackCropError};

use super::config::CropConfig;
use super::detect_crop;
use super::margins::{crop_from_rect, CropResult};

/// Detect the crop, retrying once on a denoised grid after a fatal failure.
///
/// Only `NoOverlap` and `TooWiggly` trigger the retry; the second failure
/// surfaces to the caller, who may skip cropping and proceed uncropped.
pub fn detect_with_retry<G: CoverageGrid>(
    grid: &G,
    denoised: Option<&G>,
    config: &CropConfig,
) -> Result<CropResult> {
    match detect_crop(grid, config) {
        Ok(result) => Ok(result),
        Err(err @ (StackCropError::NoOverlap | StackCropError::TooWiggly { .. })) => {
            let Some(fallback) = denoised else {
                return Err(err);
            };
            warn!("crop detection failed ({err}); retrying on denoised coverage grid");
            detect_crop(fallback, config)
        }
        Err(err) => Err(err),
    }
}

/// Per-run crop state, shared between the stage that computes the crop and
/// the stages that apply it to each channel image.
#[derive(Clone, Debug, Default)]
pub struct CropContext {
    config: CropConfig,
    reference_name: Option<String>,
    result: Option<CropResult>,
}

impl CropContext {
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            reference_name: None,
            result: None,
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Name of the reference/integrated image this crop was computed from.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference_name.as_deref()
    }

    pub fn set_reference_name(&mut self, name: impl Into<String>) {
        self.reference_name = Some(name.into());
    }

    /// The cached result of this run, if a crop has been computed.
    pub fn result(&self) -> Option<&CropResult> {
        self.result.as_ref()
    }

    /// Compute and cache the crop for this run.
    pub fn detect<G: CoverageGrid>(&mut self, grid: &G, denoised: Option<&G>) -> Result<&CropResult> {
        let result = detect_with_retry(grid, denoised, &self.config)?;
        info!("{}", result.diagnostics);
        Ok(self.result.insert(result))
    }

    /// Continue from a previously stored preview rectangle, bypassing
    /// detection.
    pub fn continue_from_rect(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        width: usize,
        height: usize,
    ) -> Result<&CropResult> {
        let result = crop_from_rect(x0, y0, x1, y1, width, height, self.config.crop_check_limit)?;
        Ok(self.result.insert(result))
    }
}
