//! Glow falloff and the time-cycled rainbow color.

use crate::constants::MIN_GLOW_DISTANCE;
use crate::math::{fract, fract3, mix3};
use glam::{Vec3, Vec4};

/// Inverse power-law glow: `(radius / distance)^intensity`.
///
/// Distances below [`MIN_GLOW_DISTANCE`] are floored so the result stays finite.
#[inline]
pub fn glow(distance: f32, radius: f32, intensity: f32) -> f32 {
    (radius / distance.max(MIN_GLOW_DISTANCE)).powf(intensity)
}

/// Largest value [`glow`] can return for the given radius and intensity.
#[inline]
pub fn max_glow(radius: f32, intensity: f32) -> f32 {
    glow(0.0, radius, intensity)
}

/// Hue in `[0, 1)` advancing by `rate` turns per second.
#[inline]
pub fn hue(time: f32, rate: f32) -> f32 {
    fract(time * rate)
}

/// HSV to RGB, all components in `[0, 1]`.
///
/// Six-sector blend with `K = (1, 2/3, 1/3, 3)`, the same expression the
/// fragment shader uses.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let k = Vec4::new(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    let p = (fract3(Vec3::splat(hsv.x) + k.truncate()) * 6.0 - Vec3::splat(k.w)).abs();
    let rgb = (p - Vec3::splat(k.x)).clamp(Vec3::ZERO, Vec3::ONE);
    hsv.z * mix3(Vec3::splat(k.x), rgb, hsv.y)
}

/// Fully saturated color for `time`, shared by every heart in a frame.
#[inline]
pub fn rainbow(time: f32, rate: f32) -> Vec3 {
    hsv_to_rgb(Vec3::new(hue(time, rate), 1.0, 1.0))
}
