//! Piecewise quadratic outline through the sample window, and the per-pixel
//! minimum distance to it.

use crate::bezier::QuadBezier;
use crate::config::HeartConfig;
use crate::constants::{FAR_DISTANCE, SEGMENT_COUNT};
use crate::curve::{sample_window, SampleWindow};
use glam::Vec2;

/// Quadratic pieces of the window, already multiplied by `scale`.
///
/// Piece `i` runs from the midpoint before sample `i` to the midpoint after it,
/// bending towards sample `i`. The first piece starts and ends on the midpoint
/// of samples 0 and 1.
pub fn segments(points: &SampleWindow, scale: f32) -> [QuadBezier; SEGMENT_COUNT] {
    std::array::from_fn(|i| {
        let prev = if i == 0 { points[1] } else { points[i - 1] };
        QuadBezier::new(
            (prev + points[i]) * 0.5,
            points[i],
            (points[i] + points[i + 1]) * 0.5,
        )
        .scaled(scale)
    })
}

/// Smallest distance from `pos` to any piece of the outline, never negative.
pub fn min_distance(points: &SampleWindow, pos: Vec2, scale: f32) -> f32 {
    segments(points, scale)
        .iter()
        .fold(FAR_DISTANCE, |dist, seg| dist.min(seg.distance(pos)))
        .max(0.0)
}

/// Distance from `pos` to the heart instance offset by `phase` at `time`.
pub fn instance_distance(
    time: f32,
    phase: f32,
    pos: Vec2,
    scale: f32,
    config: &HeartConfig,
) -> f32 {
    min_distance(&sample_window(time, phase, config), pos, scale)
}
