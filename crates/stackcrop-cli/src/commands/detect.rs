use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use stackcrop_core::crop::detect_crop;
use stackcrop_core::io::image_io::load_image;

use crate::preview::PreviewRect;

use super::CropOptions;

#[derive(Args)]
pub struct DetectArgs {
    /// Coverage image (minimum-combination integration result)
    pub coverage: PathBuf,

    /// Write the detected rectangle as an editable TOML preview
    #[arg(long)]
    pub save_rect: Option<PathBuf>,

    #[command(flatten)]
    pub options: CropOptions,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let grid = load_image(&args.coverage)?;
    println!(
        "Coverage grid: {} ({}x{})",
        args.coverage.display(),
        grid.width(),
        grid.height()
    );

    let config = args.options.to_config();
    let result = detect_crop(&grid, &config)?;

    println!("{}", result.diagnostics);
    if let Some(warning) = &result.warning {
        println!("{}", style(format!("Warning: {warning}")).yellow());
    }

    if let Some(path) = &args.save_rect {
        PreviewRect::from_box(&result.bounding_box).save(path)?;
        println!("Saved preview rect to {}", path.display());
    }

    Ok(())
}
