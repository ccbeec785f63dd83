use float_cmp::approx_eq;
use layout_core::{compute_frames, ColumnSpec, FrameId, LayoutError, PageGeometry};

// -------------------------------------------------------
// Worked example: letter page, margin 20, gutter 10, delta 40
// -------------------------------------------------------

#[test]
fn letter_with_width_delta() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    let (left, right) = compute_frames(&geometry, &ColumnSpec::WidthDelta(40.0)).unwrap();

    // available = 612 - 40 = 572; base = (572 - 10) / 2 = 281
    assert_eq!(left.id, FrameId::Left);
    assert_eq!(right.id, FrameId::Right);
    assert_eq!(left.x, 20.0);
    assert_eq!(left.width, 321.0);
    assert_eq!(right.x, 351.0);
    assert_eq!(right.width, 241.0);
    assert_eq!(left.y, 20.0);
    assert_eq!(right.y, 20.0);
    assert_eq!(left.height, 752.0);
    assert_eq!(right.height, 752.0);

    // Fits within the right margin: 351 + 241 = 592 = 612 - 20.
    assert!(right.right_edge() <= geometry.page_width - geometry.margin);
}

#[test]
fn even_split_halves_inner_width() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    let (left, right) = compute_frames(&geometry, &ColumnSpec::Even).unwrap();
    assert_eq!(left.width, 281.0);
    assert_eq!(right.width, 281.0);
}

#[test]
fn ratio_split() {
    let geometry = PageGeometry::letter(36.0, 12.0);
    let (left, right) = compute_frames(&geometry, &ColumnSpec::Ratio(0.75)).unwrap();
    let inner = geometry.available_width() - geometry.gutter;
    assert!(approx_eq!(f64, left.width, inner * 0.75, ulps = 2));
    assert!(approx_eq!(f64, right.width, inner * 0.25, ulps = 2));
}

// -------------------------------------------------------
// Invariants
// -------------------------------------------------------

#[test]
fn widths_plus_gutter_equal_available_width() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    for delta in [-200.0, -75.5, 0.0, 40.0, 123.456, 280.0] {
        let (left, right) = compute_frames(&geometry, &ColumnSpec::WidthDelta(delta)).unwrap();
        let total = left.width + geometry.gutter + right.width;
        assert!(
            approx_eq!(f64, total, geometry.available_width(), epsilon = 1e-9),
            "delta {}: {} != {}",
            delta,
            total,
            geometry.available_width(),
        );
    }
}

#[test]
fn frames_never_overlap() {
    let geometry = PageGeometry {
        page_width: 400.0,
        page_height: 600.0,
        margin: 15.0,
        gutter: 8.0,
    };
    let (left, right) = compute_frames(&geometry, &ColumnSpec::WidthDelta(-30.0)).unwrap();
    assert!(right.x >= left.x + left.width);
    assert!(approx_eq!(f64, right.x, left.x + left.width + geometry.gutter, ulps = 2));
}

#[test]
fn pure_function_is_idempotent() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    let spec = ColumnSpec::WidthDelta(40.0);
    let first = compute_frames(&geometry, &spec).unwrap();
    let second = compute_frames(&geometry, &spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_margin_zero_gutter_tiles_the_page() {
    let geometry = PageGeometry {
        page_width: 612.0,
        page_height: 792.0,
        margin: 0.0,
        gutter: 0.0,
    };
    let (left, right) = compute_frames(&geometry, &ColumnSpec::Even).unwrap();
    assert_eq!(left.x, 0.0);
    assert_eq!(left.y, 0.0);
    assert_eq!(left.top(), 792.0);
    assert!(approx_eq!(f64, right.x, left.right_edge(), ulps = 2));
    assert!(approx_eq!(f64, right.right_edge(), 612.0, ulps = 2));
    assert_eq!(right.top(), 792.0);
}

// -------------------------------------------------------
// Error conditions
// -------------------------------------------------------

#[test]
fn delta_consuming_a_column_is_invalid() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    // base = 281; delta 281 leaves the right column with zero width.
    let err = compute_frames(&geometry, &ColumnSpec::WidthDelta(281.0)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGeometry(_)));

    let err = compute_frames(&geometry, &ColumnSpec::WidthDelta(-281.0)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGeometry(_)));
}

#[test]
fn gutter_wider_than_available_width_is_invalid() {
    let geometry = PageGeometry {
        page_width: 100.0,
        page_height: 200.0,
        margin: 45.0,
        gutter: 10.0,
    };
    // available = 10, which does not exceed the gutter.
    let err = compute_frames(&geometry, &ColumnSpec::Even).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGeometry(_)));
}

#[test]
fn non_positive_page_is_invalid() {
    let geometry = PageGeometry {
        page_width: 0.0,
        page_height: 792.0,
        margin: 0.0,
        gutter: 0.0,
    };
    assert!(compute_frames(&geometry, &ColumnSpec::Even).is_err());
}

#[test]
fn negative_margin_is_invalid() {
    let geometry = PageGeometry::letter(-5.0, 10.0);
    assert!(compute_frames(&geometry, &ColumnSpec::Even).is_err());
}

#[test]
fn one_sided_ratio_is_invalid() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    assert!(compute_frames(&geometry, &ColumnSpec::Ratio(1.0)).is_err());
    assert!(compute_frames(&geometry, &ColumnSpec::Ratio(0.0)).is_err());
}

#[test]
fn error_message_names_the_problem() {
    let geometry = PageGeometry::letter(20.0, 10.0);
    let err = compute_frames(&geometry, &ColumnSpec::WidthDelta(300.0)).unwrap_err();
    assert!(err.to_string().contains("invalid geometry"));
}
