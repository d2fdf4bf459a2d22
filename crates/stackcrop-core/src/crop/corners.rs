use crate::coverage::CoverageGrid;

use super::config::ValidityMode;
use super::margins::BoundingBox;

#[derive(Clone, Copy, Debug)]
enum Corner {
    TopLeft,
    BottomRight,
    BottomLeft,
    TopRight,
}

/// Fixed rotation order. Shrinks made by an earlier corner in a pass are
/// seen by the later corners of the same pass; keep the cascade, it
/// changes how fast the loop converges.
const CORNER_ORDER: [Corner; 4] = [
    Corner::TopLeft,
    Corner::BottomRight,
    Corner::BottomLeft,
    Corner::TopRight,
];

impl Corner {
    fn position(self, bbox: &BoundingBox) -> (usize, usize) {
        match self {
            Self::TopLeft => (bbox.left, bbox.top),
            Self::BottomRight => (bbox.right, bbox.bottom),
            Self::BottomLeft => (bbox.left, bbox.bottom),
            Self::TopRight => (bbox.right, bbox.top),
        }
    }

    /// Move the two edges adjacent to this corner inward by one.
    fn shrink(self, bbox: &mut BoundingBox) {
        match self {
            Self::TopLeft => {
                bbox.left += 1;
                bbox.top += 1;
            }
            Self::BottomRight => {
                bbox.right = bbox.right.saturating_sub(1);
                bbox.bottom = bbox.bottom.saturating_sub(1);
            }
            Self::BottomLeft => {
                bbox.left += 1;
                bbox.bottom = bbox.bottom.saturating_sub(1);
            }
            Self::TopRight => {
                bbox.right = bbox.right.saturating_sub(1);
                bbox.top += 1;
            }
        }
    }
}

/// Shrink the box until all four corners are individually valid.
///
/// Each corner carries a sticky "already valid" flag: once a corner has
/// tested valid it is not re-tested, even if a later shrink moves it. A
/// full cycle with zero shrinks terminates the loop. Borders are not yet
/// validated here.
pub(super) fn converge_corners<G: CoverageGrid>(
    grid: &G,
    mut bbox: BoundingBox,
    mode: &ValidityMode,
) -> BoundingBox {
    let mut already_valid = [false; 4];

    loop {
        let mut shrunk = false;

        for (i, corner) in CORNER_ORDER.iter().enumerate() {
            if already_valid[i] {
                continue;
            }
            let (col, row) = corner.position(&bbox);
            if mode.is_valid(grid.sample(col, row)) {
                already_valid[i] = true;
            } else {
                corner.shrink(&mut bbox);
                shrunk = true;
            }
        }

        // Edges are bounded by the known-valid scan lines, but bail out if
        // the box ever degenerates instead of sampling past it.
        if !shrunk || bbox.left >= bbox.right || bbox.top >= bbox.bottom {
            return bbox;
        }
    }
}
