// Pure sizing/placement helpers; kept free of web-sys so host tests can include them.
use crate::constants::*;

/// Backing-store size for a canvas laid out at `css_w x css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Shadow color of the glyph at `index`.
#[inline]
pub fn neon_color(index: usize) -> &'static str {
    NEON_COLORS[index % NEON_COLORS.len()]
}

/// Baseline of the overlay text for a canvas `height` pixels tall.
#[inline]
pub fn text_baseline(height: f64) -> f64 {
    (height - OVERLAY_MARGIN_PX).max(0.0)
}

/// Label to draw: the page override when it has visible text, else the default.
pub fn overlay_text(attr: Option<String>) -> String {
    attr.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| OVERLAY_TEXT_DEFAULT.to_string())
}
