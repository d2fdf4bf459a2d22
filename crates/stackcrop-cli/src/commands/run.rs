use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use stackcrop_core::coverage::median_denoise;
use stackcrop_core::crop::CropContext;
use stackcrop_core::frame::Frame;
use stackcrop_core::io::image_io::load_image;

use crate::preview::PreviewRect;

use super::apply::apply_to_images;
use super::CropOptions;

#[derive(Args)]
pub struct RunArgs {
    /// Coverage image (minimum-combination integration result)
    pub coverage: PathBuf,

    /// Channel images to crop with the detected margins
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Do not retry detection on a median-denoised grid after a fatal failure
    #[arg(long)]
    pub no_retry: bool,

    /// Write the detected rectangle as an editable TOML preview
    #[arg(long)]
    pub save_rect: Option<PathBuf>,

    #[command(flatten)]
    pub options: CropOptions,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let grid = load_image(&args.coverage)?;
    println!(
        "Coverage grid: {} ({}x{})",
        args.coverage.display(),
        grid.width(),
        grid.height()
    );

    let mut context = CropContext::new(args.options.to_config());
    context.set_reference_name(args.coverage.display().to_string());

    let denoised = if args.no_retry {
        None
    } else {
        Some(Frame::new(
            median_denoise(&grid.data),
            grid.original_bit_depth,
        ))
    };

    let result = context.detect(&grid, denoised.as_ref())?;
    println!("{}", result.diagnostics);
    if let Some(warning) = &result.warning {
        println!("{}", style(format!("Warning: {warning}")).yellow());
    }

    if let Some(path) = &args.save_rect {
        PreviewRect::from_box(&result.bounding_box).save(path)?;
        println!("Saved preview rect to {}", path.display());
    }

    let margins = result.margins;
    apply_to_images(&args.images, &margins)
}
