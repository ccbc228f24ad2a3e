// Host-side tests for canvas sizing and overlay placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use constants::*;
use layout::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(333.0, 100.0, 1.5), (499, 150));
}

#[test]
fn backing_size_never_collapses() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-5.0, 10.0, 1.0), (1, 10));
}

#[test]
fn bad_pixel_ratio_counts_as_one() {
    assert_eq!(backing_size(640.0, 480.0, f64::NAN), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, 0.0), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, -2.0), (640, 480));
}

#[test]
fn neon_colors_cycle_per_glyph() {
    assert_eq!(neon_color(0), NEON_COLORS[0]);
    assert_eq!(neon_color(NEON_COLORS.len()), NEON_COLORS[0]);
    assert_eq!(neon_color(13), NEON_COLORS[3]);
}

#[test]
fn baseline_sits_above_the_bottom_edge() {
    assert_eq!(text_baseline(600.0), 580.0);
    assert_eq!(text_baseline(5.0), 0.0);
}

#[test]
fn overlay_text_prefers_the_page_override() {
    assert_eq!(overlay_text(Some("  Hi there ".into())), "Hi there");
    assert_eq!(overlay_text(Some("   ".into())), OVERLAY_TEXT_DEFAULT);
    assert_eq!(overlay_text(None), OVERLAY_TEXT_DEFAULT);
}
