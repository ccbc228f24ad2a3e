//! Shader-style scalar helpers.
//!
//! These follow GLSL/WGSL semantics rather than Rust's: `fract` is floor-based,
//! so negative inputs wrap into `[0, 1)` instead of keeping their sign.

use glam::Vec3;

/// `x - floor(x)`. Tiny negative inputs can round up to exactly `1.0`, as on the GPU.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn fract3(v: Vec3) -> Vec3 {
    Vec3::new(fract(v.x), fract(v.y), fract(v.z))
}

/// Linear blend, `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn mix3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

#[inline]
pub fn finite_or_zero(x: f32) -> f32 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
