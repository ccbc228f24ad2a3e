/// Page wiring and neon overlay constants for the web frontend.
///
/// The overlay is one line of text near the bottom-left corner; each glyph is
/// filled white and gets its own colored shadow glow.

// Elements
pub const CANVAS_ID: &str = "heart-canvas";
pub const OVERLAY_CANVAS_ID: &str = "heart-overlay";
pub const OVERLAY_TEXT_ATTR: &str = "data-overlay-text"; // on <body>, overrides the label

// Overlay text
pub const OVERLAY_TEXT_DEFAULT: &str = "Asmit Sachan";
pub const OVERLAY_FONT: &str = "48px 'Caveat', cursive";
pub const OVERLAY_FILL: &str = "white";
pub const OVERLAY_SHADOW_BLUR: f64 = 20.0;
pub const OVERLAY_MARGIN_PX: f64 = 20.0; // left edge and distance above the bottom
pub const OVERLAY_STYLE: &str = "position:absolute;top:0;left:0;pointer-events:none";

// Shadow colors, cycled per glyph
pub const NEON_COLORS: [&str; 10] = [
    "cyan", "magenta", "lime", "yellow", "blue", "orange", "pink", "red", "green", "violet",
];
