use ndarray::s;

use crate::error::{Result, StackCropError};
use crate::frame::{ColorFrame, Frame};

use super::margins::CropMargins;

/// Trim the given margins off a frame.
pub fn apply_margins(frame: &Frame, margins: &CropMargins) -> Result<Frame> {
    let (h, w) = frame.data.dim();

    let new_w = w
        .checked_sub(margins.left + margins.right)
        .filter(|&v| v > 0);
    let new_h = h
        .checked_sub(margins.top + margins.bottom)
        .filter(|&v| v > 0);
    if new_w.is_none() || new_h.is_none() {
        return Err(StackCropError::InvalidCrop(format!(
            "Margins L{} T{} R{} B{} leave no pixels of a {w}x{h} frame",
            margins.left, margins.top, margins.right, margins.bottom
        )));
    }

    let view = frame
        .data
        .slice(s![margins.top..h - margins.bottom, margins.left..w - margins.right]);

    Ok(Frame::new(view.to_owned(), frame.original_bit_depth))
}

/// Trim the same margins off all three channels of a color frame.
///
/// Channel images of one run are coregistered, so one margin set applies
/// identically everywhere.
pub fn apply_margins_color(color: &ColorFrame, margins: &CropMargins) -> Result<ColorFrame> {
    Ok(ColorFrame {
        red: apply_margins(&color.red, margins)?,
        green: apply_margins(&color.green, margins)?,
        blue: apply_margins(&color.blue, margins)?,
    })
}
