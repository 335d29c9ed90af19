//! Tests for routing application events to the cursor manager.

mod support;

use mouse_fun::handlers::{dispatch_event, dispatch_events, Dispatch};
use mouse_fun::preferences::{MemoryPreferences, Preferences};
use mouse_fun::{AppEvent, CursorSelection, CursorSize, CursorStyle, Size};
use support::Harness;

fn harness_with_icon() -> (Harness, MemoryPreferences) {
    let mut h = Harness::new();
    let prefs = MemoryPreferences::new(CursorSize::Medium);
    // style assets are not in the fixture set; select the fixture directly
    h.manager
        .select_vector_icon("cursor-square", prefs.cursor_size().size())
        .unwrap();
    (h, prefs)
}

// === Style Events ===

#[test]
fn default_style_resets() {
    let (mut h, mut prefs) = harness_with_icon();
    let outcome = dispatch_event(
        &mut h.manager,
        &mut prefs,
        AppEvent::SelectStyle(CursorStyle::Default),
    );

    assert_eq!(outcome, Dispatch::Done);
    assert!(!h.manager.is_active());
    assert!(h.native.visible.get());
}

#[test]
fn reset_event_resets() {
    let (mut h, mut prefs) = harness_with_icon();
    dispatch_event(&mut h.manager, &mut prefs, AppEvent::Reset);
    assert!(!h.manager.is_active());
}

#[test]
fn style_with_missing_asset_keeps_current_cursor() {
    let (mut h, mut prefs) = harness_with_icon();
    let outcome = dispatch_event(
        &mut h.manager,
        &mut prefs,
        AppEvent::SelectStyle(CursorStyle::Heart),
    );

    assert_eq!(outcome, Dispatch::Done);
    assert_eq!(
        *h.manager.selection(),
        CursorSelection::VectorIcon("cursor-square".into())
    );
}

#[test]
fn custom_emoji_style_requests_prompt() {
    let mut h = Harness::new();
    let mut prefs = MemoryPreferences::default();

    let outcome = dispatch_event(
        &mut h.manager,
        &mut prefs,
        AppEvent::SelectStyle(CursorStyle::CustomEmoji),
    );
    assert_eq!(outcome, Dispatch::PromptEmoji(None));

    h.manager.select_emoji("🦄", Size::square(32)).unwrap();
    let outcome = dispatch_event(&mut h.manager, &mut prefs, AppEvent::RequestCustomEmoji);
    assert_eq!(outcome, Dispatch::PromptEmoji(Some("🦄".into())));
}

// === Emoji Events ===

#[test]
fn emoji_is_trimmed_and_applied_at_preferred_size() {
    let mut h = Harness::new();
    let mut prefs = MemoryPreferences::new(CursorSize::Large);

    dispatch_event(
        &mut h.manager,
        &mut prefs,
        AppEvent::SelectEmoji("  🚀 ".into()),
    );

    assert_eq!(*h.manager.selection(), CursorSelection::Emoji("🚀".into()));
    assert_eq!(h.manager.current_size(), Some(Size::square(48)));
}

#[test]
fn blank_emoji_is_ignored() {
    let (mut h, mut prefs) = harness_with_icon();
    let outcome = dispatch_event(&mut h.manager, &mut prefs, AppEvent::SelectEmoji("   ".into()));

    assert_eq!(outcome, Dispatch::Done);
    assert_eq!(
        *h.manager.selection(),
        CursorSelection::VectorIcon("cursor-square".into())
    );
}

// === Size Events ===

#[test]
fn set_size_persists_and_reapplies() {
    let (mut h, mut prefs) = harness_with_icon();
    let outcome = dispatch_event(
        &mut h.manager,
        &mut prefs,
        AppEvent::SetSize(CursorSize::Large),
    );

    assert_eq!(outcome, Dispatch::SizeChanged);
    assert_eq!(prefs.cursor_size(), CursorSize::Large);
    assert_eq!(h.manager.current_size(), Some(Size::square(48)));
    assert_eq!(h.overlay_image().unwrap().size(), Size::square(48));
    assert_eq!(h.windows_created.get(), 1);
}

#[test]
fn set_size_while_inactive_only_persists() {
    let mut h = Harness::new();
    let mut prefs = MemoryPreferences::default();
    dispatch_event(&mut h.manager, &mut prefs, AppEvent::SetSize(CursorSize::Small));

    assert_eq!(prefs.cursor_size(), CursorSize::Small);
    assert!(!h.manager.is_active());
    assert_eq!(h.windows_created.get(), 0);
}

// === System Events ===

#[test]
fn reassert_hides_again() {
    let (mut h, mut prefs) = harness_with_icon();
    let before = h.native.hides.get();
    dispatch_event(&mut h.manager, &mut prefs, AppEvent::ReassertSuppression);
    assert_eq!(h.native.hides.get(), before + 1);
}

#[test]
fn batch_returns_only_follow_ups() {
    let mut h = Harness::new();
    let mut prefs = MemoryPreferences::default();

    let follow_ups = dispatch_events(
        &mut h.manager,
        &mut prefs,
        vec![
            AppEvent::SelectEmoji("⭐".into()),
            AppEvent::SetSize(CursorSize::Small),
            AppEvent::ReassertSuppression,
            AppEvent::Reset,
            AppEvent::Quit,
        ],
    );

    assert_eq!(follow_ups, vec![Dispatch::SizeChanged, Dispatch::Quit]);
    assert!(!h.manager.is_active());
    assert_eq!(prefs.cursor_size(), CursorSize::Small);
}
