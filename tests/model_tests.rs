//! Tests for the model layer (cursor catalog, selections, geometry).

use mouse_fun::model::constants::*;
use mouse_fun::model::{aspect_fit, SelectionKind};
use mouse_fun::{CursorSelection, CursorSize, CursorStyle, Point, SelectionRequest, Size};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Catalog Tests ===

#[test]
fn menu_starts_with_default_and_ends_with_custom_emoji() {
    assert_eq!(CursorStyle::ALL.first(), Some(&CursorStyle::Default));
    assert_eq!(CursorStyle::ALL.last(), Some(&CursorStyle::CustomEmoji));
}

#[test]
fn style_tags_are_menu_positions() {
    for (i, style) in CursorStyle::ALL.iter().enumerate() {
        assert_eq!(style.tag(), i as isize);
        assert_eq!(CursorStyle::from_tag(i as isize), Some(*style));
    }
}

#[test]
fn asset_names_are_unique_and_prefixed() {
    let names: Vec<_> = CursorStyle::ALL
        .iter()
        .filter_map(|s| s.asset_name())
        .collect();
    assert_eq!(names.len(), 10);
    for name in &names {
        assert!(name.starts_with("cursor-"), "{}", name);
        assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
    }
}

#[test]
fn default_icon_is_in_catalog() {
    assert!(CursorStyle::ALL
        .iter()
        .any(|s| s.asset_name() == Some(DEFAULT_ICON)));
}

#[test]
fn display_names_are_not_empty() {
    for style in CursorStyle::ALL {
        assert!(!style.display_name().is_empty());
    }
    for size in CursorSize::ALL {
        assert!(!size.display_name().is_empty());
    }
}

// === Size Tests ===

#[test]
fn sizes_are_ascending() {
    let points: Vec<_> = CursorSize::ALL.iter().map(|s| s.points()).collect();
    assert_eq!(points, vec![24, 32, 48]);
}

#[test]
fn default_size_is_medium() {
    assert_eq!(CursorSize::default(), CursorSize::Medium);
}

#[test]
fn stored_size_round_trips() {
    for size in CursorSize::ALL {
        assert_eq!(CursorSize::from_points(size.points() as f64), size);
    }
}

#[test]
fn unset_stored_size_falls_back() {
    // NSUserDefaults returns 0.0 for a missing key
    assert_eq!(CursorSize::from_points(0.0), CursorSize::Medium);
}

// === Selection Tests ===

#[test]
fn request_records_selection() {
    let req = SelectionRequest::emoji("🎯", Size::square(24));
    assert_eq!(req.selection(), CursorSelection::Emoji("🎯".into()));
    assert_eq!(req.hot_spot(), Point::new(12.0, 12.0));
}

#[test]
fn vector_hot_spot_uses_ratios() {
    let hs = SelectionKind::VectorIcon.hot_spot(Size::square(48));
    assert!(approx_eq(hs.x, 48.0 * VECTOR_HOTSPOT_X_RATIO));
    assert!(approx_eq(hs.y, 48.0 * VECTOR_HOTSPOT_Y_RATIO));
}

#[test]
fn selection_kind_matches_variant() {
    assert_eq!(
        CursorSelection::VectorIcon("cursor-moon".into()).kind(),
        Some(SelectionKind::VectorIcon)
    );
    assert_eq!(
        CursorSelection::Emoji("🌙".into()).kind(),
        Some(SelectionKind::Emoji)
    );
    assert_eq!(CursorSelection::None.kind(), None);
}

// === Geometry Tests ===

#[test]
fn aspect_fit_tall_source() {
    let fit = aspect_fit(10.0, 40.0, Size::square(32));
    assert!(approx_eq(fit.scale, 0.8));
    assert!(approx_eq(fit.width, 8.0));
    assert!(approx_eq(fit.height, 32.0));
    assert!(approx_eq(fit.x, 12.0));
    assert!(approx_eq(fit.y, 0.0));
}

#[test]
fn loop_rates() {
    assert_eq!(SUPPRESSION_TICK.as_millis(), 10);
    // 120 Hz within rounding
    assert!((1.0 / POSITION_TICK.as_secs_f64() - 120.0).abs() < 0.1);
}
