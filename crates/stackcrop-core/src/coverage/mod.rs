mod denoise;
mod grid;
mod minimum;

pub use denoise::median_denoise;
pub use grid::CoverageGrid;
pub use minimum::minimum_combine;
