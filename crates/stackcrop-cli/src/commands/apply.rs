use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use stackcrop_core::consts::DEFAULT_CROP_CHECK_LIMIT;
use stackcrop_core::crop::apply::apply_margins;
use stackcrop_core::crop::{crop_from_rect, CropMargins};
use stackcrop_core::frame::Frame;
use stackcrop_core::io::image_io::{load_image, save_image};

use crate::preview::PreviewRect;

#[derive(Args)]
pub struct ApplyArgs {
    /// Channel images to crop (all coregistered with the coverage grid)
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Saved preview rectangle (TOML) to continue from
    #[arg(long, conflicts_with_all = ["left", "top", "right", "bottom"])]
    pub rect: Option<PathBuf>,

    /// Pixels to trim from the left edge
    #[arg(long, default_value_t = 0)]
    pub left: usize,

    /// Pixels to trim from the top edge
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Pixels to trim from the right edge
    #[arg(long, default_value_t = 0)]
    pub right: usize,

    /// Pixels to trim from the bottom edge
    #[arg(long, default_value_t = 0)]
    pub bottom: usize,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let first = load_image(&args.images[0])?;
    let margins = resolve_margins(args, &first)?;

    println!(
        "Cropping {} image(s): margins L{} T{} R{} B{}",
        args.images.len(),
        margins.left,
        margins.top,
        margins.right,
        margins.bottom
    );

    apply_to_images(&args.images, &margins)
}

/// Crop every channel image with the same margins, writing `<stem>_crop`
/// outputs next to the originals.
pub fn apply_to_images(images: &[PathBuf], margins: &CropMargins) -> Result<()> {
    let pb = ProgressBar::new(images.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Cropping [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    for path in images {
        let frame = load_image(path)?;
        let cropped = apply_margins(&frame, margins)?;
        let output = crop_output_path(path);
        save_image(&cropped, &output)?;
        pb.inc(1);
    }
    pb.finish();

    println!("Done");
    Ok(())
}

fn resolve_margins(args: &ApplyArgs, first: &Frame) -> Result<CropMargins> {
    if let Some(rect_path) = &args.rect {
        let rect = PreviewRect::load(rect_path)?;
        let result = crop_from_rect(
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y1,
            first.width(),
            first.height(),
            DEFAULT_CROP_CHECK_LIMIT,
        )?;
        if let Some(warning) = &result.warning {
            println!("{}", style(format!("Warning: {warning}")).yellow());
        }
        return Ok(result.margins);
    }

    if args.left + args.right == 0 && args.top + args.bottom == 0 {
        bail!("Nothing to crop: pass --rect or at least one margin");
    }
    Ok(CropMargins {
        left: args.left,
        top: args.top,
        right: args.right,
        bottom: args.bottom,
    })
}

fn crop_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("tiff");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_crop.{ext}"))
}
