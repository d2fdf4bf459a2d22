use approx::assert_relative_eq;

use stackcrop_core::crop::{compute_crop_amount, crop_from_rect, BoundingBox};
use stackcrop_core::error::StackCropError;

#[test]
fn test_margins_are_distances_to_grid_edges() {
    let bbox = BoundingBox {
        left: 4,
        right: 90,
        top: 7,
        bottom: 95,
    };
    let result = compute_crop_amount(&bbox, 100, 100, 50.0).unwrap();

    assert_eq!(result.margins.left, 4);
    assert_eq!(result.margins.top, 7);
    assert_eq!(result.margins.right, 9);
    assert_eq!(result.margins.bottom, 4);
    assert!(result.warning.is_none());
}

#[test]
fn test_truncation_warning_is_non_fatal() {
    // 40 of 100 columns kept: 60% width truncation.
    let bbox = BoundingBox {
        left: 30,
        right: 69,
        top: 0,
        bottom: 99,
    };
    let result = compute_crop_amount(&bbox, 100, 100, 20.0).unwrap();

    let warning = result.warning.expect("expected truncation warning");
    assert!(warning.contains("60.0%"), "{warning}");
    // The margins are still produced.
    assert_eq!(result.margins.left, 30);
    assert_eq!(result.margins.right, 30);
}

#[test]
fn test_full_extent_box_truncates_nothing() {
    let bbox = BoundingBox {
        left: 0,
        right: 63,
        top: 0,
        bottom: 47,
    };
    let result = compute_crop_amount(&bbox, 64, 48, 0.1).unwrap();

    assert_eq!(result.margins.left + result.margins.right, 0);
    assert_eq!(result.margins.top + result.margins.bottom, 0);
    assert!(result.warning.is_none());
}

#[test]
fn test_box_that_exceeds_grid_is_rejected() {
    let bbox = BoundingBox {
        left: 0,
        right: 64,
        top: 0,
        bottom: 47,
    };
    let err = compute_crop_amount(&bbox, 64, 48, 20.0).unwrap_err();
    assert!(matches!(err, StackCropError::InvalidCrop(_)), "{err}");
}

#[test]
fn test_box_at_exact_limits_on_all_checks_stays_quiet() {
    // 8x8 of 10x10: 20% per axis and 36% area, which is exactly the
    // compounded two-axis limit for a 20% per-axis limit.
    let bbox = BoundingBox {
        left: 1,
        right: 8,
        top: 1,
        bottom: 8,
    };
    let result = compute_crop_amount(&bbox, 10, 10, 20.0).unwrap();
    assert!(result.warning.is_none(), "{:?}", result.warning);
}

#[test]
fn test_area_under_compounded_limit_stays_quiet() {
    // 81x81 of 100x100: 19% per axis, ~34.4% area. Within the per-axis
    // limit, so the compounded area limit (36%) must not fire either.
    let bbox = BoundingBox {
        left: 10,
        right: 90,
        top: 10,
        bottom: 90,
    };
    let result = compute_crop_amount(&bbox, 100, 100, 20.0).unwrap();
    assert!(result.warning.is_none(), "{:?}", result.warning);
}

#[test]
fn test_manual_rect_still_warns_on_drastic_truncation() {
    // Manual mode runs the same truncation check as detection.
    let result = crop_from_rect(30, 0, 69, 99, 100, 100, 20.0).unwrap();
    assert!(result.warning.is_some());
}

#[test]
fn test_manual_rect_normalizes_corner_order() {
    let result = crop_from_rect(8, 95, 4, 7, 100, 100, 50.0).unwrap();
    assert_eq!(
        result.bounding_box,
        BoundingBox {
            left: 4,
            right: 8,
            top: 7,
            bottom: 95
        }
    );
}

#[test]
fn test_manual_rect_out_of_bounds_fails() {
    let err = crop_from_rect(0, 0, 100, 50, 100, 100, 50.0).unwrap_err();
    assert!(matches!(err, StackCropError::InvalidCrop(_)), "{err}");
}

#[test]
fn test_bounding_box_geometry() {
    let bbox = BoundingBox {
        left: 2,
        right: 5,
        top: 1,
        bottom: 4,
    };
    assert_eq!(bbox.width(), 4);
    assert_eq!(bbox.height(), 4);
    assert!(bbox.contains(2, 1));
    assert!(bbox.contains(5, 4));
    assert!(!bbox.contains(6, 4));

    let inner = BoundingBox {
        left: 3,
        right: 4,
        top: 2,
        bottom: 3,
    };
    assert!(bbox.contains_box(&inner));
    assert!(!inner.contains_box(&bbox));
}

#[test]
fn test_area_percentage_matches_width_and_height() {
    // 80x80 kept of 100x100: 20% width, 20% height, 36% area.
    let bbox = BoundingBox {
        left: 10,
        right: 89,
        top: 10,
        bottom: 89,
    };
    let result = compute_crop_amount(&bbox, 100, 100, 50.0).unwrap();

    let kept = (bbox.width() * bbox.height()) as f32;
    assert_relative_eq!(kept / (100.0 * 100.0), 0.64, max_relative = 1e-6);
    assert!(result.diagnostics.contains("36.0% area"), "{}", result.diagnostics);
}
