use ndarray::Array2;

use stackcrop_core::coverage::{median_denoise, minimum_combine};
use stackcrop_core::crop::apply::apply_margins;
use stackcrop_core::crop::{detect_with_retry, BoundingBox, CropConfig, CropContext};
use stackcrop_core::error::StackCropError;
use stackcrop_core::frame::Frame;

/// A frame that covers everything except the named invalid edge strips,
/// simulating one dithered exposure.
fn shifted_frame(
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) -> Frame {
    let data = Array2::from_shape_fn((height, width), |(r, c)| {
        if c < left || c >= width - right || r < top || r >= height - bottom {
            0.0
        } else {
            1.0
        }
    });
    Frame::new(data, 16)
}

#[test]
fn test_combine_detect_apply_round() {
    // Three dithered frames; the common area is the intersection of their
    // coverage: columns 2..=20, rows 3..=21 of a 24x24 field.
    let frames = vec![
        shifted_frame(24, 24, 2, 0, 0, 0),
        shifted_frame(24, 24, 0, 3, 0, 2),
        shifted_frame(24, 24, 0, 0, 3, 0),
    ];

    let coverage = minimum_combine(&frames).unwrap();

    let mut context = CropContext::new(CropConfig::default());
    context.set_reference_name("integration_master");
    let result = context.detect(&coverage, None).unwrap();

    assert_eq!(
        result.bounding_box,
        BoundingBox {
            left: 2,
            right: 20,
            top: 3,
            bottom: 21
        }
    );
    let margins = result.margins;
    assert_eq!((margins.left, margins.top, margins.right, margins.bottom), (2, 3, 3, 2));

    // The same margins apply to every coregistered channel image.
    for frame in &frames {
        let cropped = apply_margins(frame, &margins).unwrap();
        assert_eq!(cropped.width(), 19);
        assert_eq!(cropped.height(), 19);
    }
}

#[test]
fn test_retry_on_denoised_grid_rescues_hot_center() {
    // A 10x10 grid leaves no room for the fallback anchors, so a single
    // hot pixel at the center is fatal on the first attempt.
    let mut grid = Array2::from_elem((10, 10), 1.0_f32);
    grid[[5, 5]] = 0.0;

    let config = CropConfig::default();
    let err = detect_with_retry(&grid, None, &config).unwrap_err();
    assert!(matches!(err, StackCropError::NoOverlap));

    let denoised = median_denoise(&grid);
    let result = detect_with_retry(&grid, Some(&denoised), &config).unwrap();
    assert_eq!(
        result.bounding_box,
        BoundingBox {
            left: 0,
            right: 9,
            top: 0,
            bottom: 9
        }
    );
}

#[test]
fn test_continue_from_saved_rect_bypasses_detection() {
    let mut context = CropContext::new(CropConfig::default());
    let result = context.continue_from_rect(4, 6, 90, 88, 100, 100).unwrap();

    assert_eq!(
        result.bounding_box,
        BoundingBox {
            left: 4,
            right: 90,
            top: 6,
            bottom: 88
        }
    );
    assert_eq!(result.margins.right, 9);
    assert_eq!(result.margins.bottom, 11);

    // The context keeps the result for the apply stages.
    assert!(context.result().is_some());
}
