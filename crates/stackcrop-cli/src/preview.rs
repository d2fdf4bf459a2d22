use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stackcrop_core::crop::BoundingBox;

/// A stored crop rectangle, editable by the user between runs.
///
/// Corners are inclusive pixel coordinates on the integrated image.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PreviewRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl PreviewRect {
    pub fn from_box(bbox: &BoundingBox) -> Self {
        Self {
            x0: bbox.left,
            y0: bbox.top,
            x1: bbox.right,
            y1: bbox.bottom,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading preview rect {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing preview rect {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("writing preview rect {}", path.display()))?;
        Ok(())
    }
}
