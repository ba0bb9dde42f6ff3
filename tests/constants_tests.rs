// Host-side sanity checks for tuning constants.
// The web crate is wasm-only, so its pure modules are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use site_core::constants::*;
use site_core::FieldConfig;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_constants_give_a_whole_number_of_frames() {
    assert!(RIPPLE_ALPHA_STEP > 0.0);
    assert!(RIPPLE_START_ALPHA <= 1.0);
    let frames = RIPPLE_START_ALPHA / RIPPLE_ALPHA_STEP;
    assert!((frames - frames.round()).abs() < 1e-3);
    assert!(RIPPLE_ALPHA_EPSILON < RIPPLE_ALPHA_STEP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_range_is_sane() {
    assert!(MIN_PIXEL_RATIO >= 1.0);
    assert!(MAX_PIXEL_RATIO >= MIN_PIXEL_RATIO);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slideshow_settles_before_next_auto_step() {
    assert!(SLIDE_SETTLE_MS < SLIDE_AUTO_ADVANCE_MS);
    assert!(SLIDE_TRANSITION_CSS.contains(&format!("{}ms", SLIDE_SETTLE_MS)));
}

#[test]
fn presets_repel_inside_attract_range() {
    for cfg in [FieldConfig::hero(), FieldConfig::compact()] {
        assert!(cfg.repel_dist < cfg.attract_range);
        assert!(cfg.friction < 1.0);
    }
}

#[test]
fn booking_script_is_https() {
    assert!(BOOKING_SCRIPT_SRC.starts_with("https://"));
    assert!(BOOKING_WIDGET_URL.starts_with("https://"));
}

#[test]
fn client_points_are_made_local() {
    assert_eq!(input::client_to_local(130.0, 75.5, 30.0, 25.5), (100.0, 50.0));
    assert_eq!(input::client_to_local(10.0, 10.0, 20.0, 20.0), (-10.0, -10.0));
}

#[test]
fn pointer_listeners_use_pointer_events() {
    // The background casts these to PointerEvent.
    assert_eq!(EV_POINTER_MOVE, "pointermove");
    assert_eq!(EV_POINTER_LEAVE, "pointerleave");
}

#[test]
fn reveal_selector_covers_both_markers() {
    assert!(REVEAL_SELECTOR.contains(&format!("[{}]", ATTR_REVEAL)));
    assert!(REVEAL_SELECTOR.contains(&format!("[{}]", ATTR_REVEAL_STAGGER)));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
