//! Exact distance from a point to a quadratic Bézier curve.
//!
//! The squared distance `|B(t) - P|^2` is a quartic in `t`; its derivative is a
//! cubic that is solved in closed form (Cardano for one real root, the
//! trigonometric method for three), then each root is polished with a fixed
//! number of Newton steps. The cost per call is fixed, which is what the
//! per-pixel evaluation needs.

use crate::constants::{BEZIER_DEGENERATE_EPSILON, ROOT_REFINE_STEPS, SQRT_3};
use glam::Vec2;

/// One quadratic piece: `(1-t)^2 start + 2t(1-t) control + t^2 end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadBezier {
    pub fn new(start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    pub fn scaled(&self, scale: f32) -> Self {
        Self::new(self.start * scale, self.control * scale, self.end * scale)
    }

    /// Point on the curve at parameter `t` (not clamped).
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let s = 1.0 - t;
        self.start * (s * s) + self.control * (2.0 * t * s) + self.end * (t * t)
    }

    #[inline]
    pub fn distance(&self, pos: Vec2) -> f32 {
        distance(pos, self.start, self.control, self.end)
    }

    /// Brute-force reference: minimum distance over `steps + 1` evenly spaced
    /// parameters. Slow; used to check the closed form.
    pub fn sampled_distance(&self, pos: Vec2, steps: usize) -> f32 {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| (self.point_at(i as f32 / steps as f32) - pos).length())
            .fold(f32::INFINITY, f32::min)
    }
}

/// Minimum distance from `pos` to the quadratic Bézier `a -> b -> c`, `t` in `[0, 1]`.
///
/// `a` is the start point, `b` the control point and `c` the end point.
#[inline]
pub fn distance(pos: Vec2, a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let ab = b - a;
    let curve = a - 2.0 * b + c;
    let tangent = ab * 2.0;
    let d = a - pos;

    let curve_dot = curve.dot(curve);
    if curve_dot < BEZIER_DEGENERATE_EPSILON {
        // control point on the chord: the curve is the straight segment a..c
        return segment_distance(pos, a, c);
    }

    let kk = 1.0 / curve_dot;
    let kx = kk * ab.dot(curve);
    let ky = kk * (2.0 * ab.dot(ab) + d.dot(curve)) / 3.0;
    let kz = kk * d.dot(ab);

    let p = ky - kx * kx;
    let p3 = p * p * p;
    let q = kx * (2.0 * kx * kx - 3.0 * ky) + kz;
    let h = q * q + 4.0 * p3;

    // Newton steps on d/dt |B(t) - P|^2; the cubic formulas lose digits to
    // cancellation when the piece is nearly straight
    let refine = |t: f32| {
        let mut t = t.clamp(0.0, 1.0);
        for _ in 0..ROOT_REFINE_STEPS {
            let v = d + (tangent + curve * t) * t;
            let dv = tangent + curve * (2.0 * t);
            let slope = dv.dot(dv) + 2.0 * v.dot(curve);
            if slope > 0.0 {
                t = (t - v.dot(dv) / slope).clamp(0.0, 1.0);
            }
        }
        t
    };
    let offset_sq = |t: f32| {
        let t = refine(t);
        let v = d + (tangent + curve * t) * t;
        v.dot(v)
    };

    if h >= 0.0 {
        // one real root
        let h = h.sqrt();
        let x0 = (h - q) * 0.5;
        let x1 = (-h - q) * 0.5;
        let u = x0.signum() * x0.abs().cbrt();
        let v = x1.signum() * x1.abs().cbrt();
        offset_sq(u + v - kx).sqrt()
    } else {
        // three real roots, keep the closest
        let z = (-p).sqrt();
        let v = (q / (p * z * 2.0)).clamp(-1.0, 1.0).acos() / 3.0;
        let m = v.cos();
        let n = v.sin() * SQRT_3;
        let t0 = (m + m) * z - kx;
        let t1 = (-n - m) * z - kx;
        let t2 = (n - m) * z - kx;
        offset_sq(t0).min(offset_sq(t1)).min(offset_sq(t2)).sqrt()
    }
}

/// Distance from `pos` to the line segment `a..c`.
#[inline]
pub fn segment_distance(pos: Vec2, a: Vec2, c: Vec2) -> f32 {
    let ac = c - a;
    let len_sq = ac.dot(ac);
    if len_sq < BEZIER_DEGENERATE_EPSILON {
        return (pos - a).length();
    }
    let t = ((pos - a).dot(ac) / len_sq).clamp(0.0, 1.0);
    (pos - (a + ac * t)).length()
}
