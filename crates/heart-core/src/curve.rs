//! Parametric heart outline and the sliding sample window over it.

use crate::config::HeartConfig;
use crate::constants::POINT_COUNT;
use crate::math::fract;
use glam::Vec2;
use std::f32::consts::TAU;

/// Fixed-size window of consecutive samples along the heart.
pub type SampleWindow = [Vec2; POINT_COUNT];

/// Classic heart curve. One full turn of `u` traces the outline once.
///
/// `y` is negated so the lobes sit on top once the compositor flips the
/// screen position.
#[inline]
pub fn heart_point(u: f32) -> Vec2 {
    let s = u.sin();
    Vec2::new(
        16.0 * s * s * s,
        -(13.0 * u.cos() - 5.0 * (2.0 * u).cos() - 2.0 * (3.0 * u).cos() - (4.0 * u).cos()),
    )
}

/// Time-based scroll along the curve in curve-parameter units, one turn at most.
#[inline]
pub fn scroll_offset(time: f32, speed: f32) -> f32 {
    fract(speed * time) * TAU
}

/// Curve parameter of sample `index` for an instance offset by `phase`.
#[inline]
pub fn sample_parameter(index: usize, phase: f32, segment_len: f32, scroll: f32) -> f32 {
    phase + index as f32 * segment_len + scroll
}

/// Evenly spaced samples `phase + i * len + scroll` for `i` in `0..POINT_COUNT`.
///
/// A fresh array every call; nothing is carried between frames except `time`.
pub fn sample_window(time: f32, phase: f32, config: &HeartConfig) -> SampleWindow {
    let scroll = scroll_offset(time, config.scroll_speed);
    std::array::from_fn(|i| heart_point(sample_parameter(i, phase, config.segment_len, scroll)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_starts_at_the_cusp_and_closes() {
        // u = 0 is the cusp between the lobes; a full turn returns there
        let a = heart_point(0.0);
        let b = heart_point(TAU);
        assert!(a.x.abs() < 1e-5);
        assert!((a.y + 5.0).abs() < 1e-5);
        assert!((a - b).length() < 1e-3);
    }

    #[test]
    fn heart_is_mirror_symmetric() {
        for i in 0..32 {
            let u = i as f32 * 0.19;
            let p = heart_point(u);
            let m = heart_point(-u);
            assert!((p.x + m.x).abs() < 1e-4);
            assert!((p.y - m.y).abs() < 1e-4);
        }
    }

    #[test]
    fn scroll_offset_stays_within_one_turn() {
        for i in 0..100 {
            let s = scroll_offset(i as f32 * 0.37, -0.5);
            assert!((0.0..=TAU).contains(&s), "{s}");
        }
    }
}
