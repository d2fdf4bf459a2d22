use crate::coverage::CoverageGrid;
use crate::error::{Result, StackCropError};

use super::config::CropConfig;
use super::margins::BoundingBox;
use super::scan::{scan_to_edge, ScanAxis, ScanDirection};

/// Find the maximal candidate box by scanning outward from a known-valid
/// interior anchor along the anchor's row and column.
///
/// The returned box is an upper bound: it is guaranteed valid only along
/// the two anchor lines, not at its corners or full borders. Corner
/// convergence and border validation shrink it afterwards.
pub fn find_candidate_box<G: CoverageGrid>(grid: &G, config: &CropConfig) -> Result<BoundingBox> {
    let (w, h) = (grid.width(), grid.height());
    if w == 0 || h == 0 {
        return Err(StackCropError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let (anchor_col, anchor_row) = find_anchor(grid, config)?;

    let left = scan_to_edge(
        grid,
        ScanAxis::Row,
        anchor_row,
        anchor_col,
        ScanDirection::Backward,
        &config.validity,
        &config.tolerance,
    );
    let right = scan_to_edge(
        grid,
        ScanAxis::Row,
        anchor_row,
        anchor_col,
        ScanDirection::Forward,
        &config.validity,
        &config.tolerance,
    );
    let top = scan_to_edge(
        grid,
        ScanAxis::Column,
        anchor_col,
        anchor_row,
        ScanDirection::Backward,
        &config.validity,
        &config.tolerance,
    );
    let bottom = scan_to_edge(
        grid,
        ScanAxis::Column,
        anchor_col,
        anchor_row,
        ScanDirection::Forward,
        &config.validity,
        &config.tolerance,
    );

    Ok(BoundingBox {
        left,
        right,
        top,
        bottom,
    })
}

/// Pick a valid interior anchor: the exact grid center first, then the two
/// diagonal fallback positions. Fallbacks outside the grid are skipped.
fn find_anchor<G: CoverageGrid>(grid: &G, config: &CropConfig) -> Result<(usize, usize)> {
    let (w, h) = (grid.width(), grid.height());
    let (cx, cy) = (w / 2, h / 2);
    let off = config.anchor_fallback_offset;

    let candidates = [
        Some((cx, cy)),
        Some((cx + off, cy + off)),
        cx.checked_sub(off).zip(cy.checked_sub(off)),
    ];

    for (col, row) in candidates.into_iter().flatten() {
        if col >= w || row >= h {
            continue;
        }
        if config.validity.is_valid(grid.sample(col, row)) {
            return Ok((col, row));
        }
    }

    Err(StackCropError::NoOverlap)
}
