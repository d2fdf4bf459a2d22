/// Minimum pixel count (h*w) to use pixel-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Default number of consecutive invalid samples tolerated during an axis
/// scan before the scan is declared to have passed the coverage edge.
pub const DEFAULT_MAX_CONTIGUOUS_INVALID: u32 = 1;

/// Maximum length of the single invalid run tolerated on a border line
/// during the wiggle validation pass.
pub const NON_VALID_COUNT_LIMIT: u32 = 1;

/// Default cap on border-validation passes before giving up on an
/// irregular coverage boundary.
pub const DEFAULT_WIGGLE_PASS_LIMIT: u32 = 100;

/// Default offset (pixels) of the diagonal fallback anchors tried when the
/// exact grid center is not a valid sample.
pub const DEFAULT_ANCHOR_FALLBACK_OFFSET: usize = 10;

/// Default truncation percentage (width, height, or area) above which the
/// crop result carries a manual-review warning.
pub const DEFAULT_CROP_CHECK_LIMIT: f32 = 20.0;
