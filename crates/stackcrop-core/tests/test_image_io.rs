use ndarray::Array2;
use tempfile::tempdir;

use stackcrop_core::frame::Frame;
use stackcrop_core::io::image_io::{load_image, save_image, save_png, save_tiff};

fn gradient_frame(width: usize, height: usize) -> Frame {
    let data = Array2::from_shape_fn((height, width), |(r, c)| {
        (r * width + c) as f32 / (width * height) as f32
    });
    Frame::new(data, 16)
}

#[test]
fn test_png_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.png");
    let frame = gradient_frame(16, 12);

    save_png(&frame, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 16);
    assert_eq!(loaded.height(), 12);
    // 8-bit quantization error bound.
    for row in 0..12 {
        for col in 0..16 {
            let diff = (loaded.data[[row, col]] - frame.data[[row, col]]).abs();
            assert!(diff <= 1.0 / 255.0, "pixel ({row},{col}) off by {diff}");
        }
    }
}

#[test]
fn test_tiff_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.tiff");
    let frame = gradient_frame(10, 10);

    save_tiff(&frame, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 10);
    assert_eq!(loaded.height(), 10);
    for row in 0..10 {
        for col in 0..10 {
            let diff = (loaded.data[[row, col]] - frame.data[[row, col]]).abs();
            assert!(diff <= 1.0 / 65535.0, "pixel ({row},{col}) off by {diff}");
        }
    }
}

#[test]
fn test_save_image_picks_format_from_extension() {
    let dir = tempdir().unwrap();
    let frame = gradient_frame(8, 8);

    let png = dir.path().join("out.png");
    let tiff = dir.path().join("out.tif");
    save_image(&frame, &png).unwrap();
    save_image(&frame, &tiff).unwrap();

    assert!(png.exists());
    assert!(tiff.exists());
}
