//! Wall-clock animation time.
//!
//! The clock only ever adds the real elapsed time between ticks: no fixed
//! timestep, no frame-rate normalization and no reset. Only the value handed
//! to the evaluator wraps, at a whole period of both scroll and hue.

use crate::compositor::{FrameParams, Viewport};
use crate::config::HeartConfig;
use instant::Instant;
use std::time::Duration;

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub delta: Duration,
    pub elapsed: f64,
}

#[derive(Clone, Debug, Default)]
pub struct AnimationClock {
    elapsed: f64,
    last: Option<Instant>,
    period: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose evaluator time wraps at the config's animation period, so
    /// `f32` time keeps its resolution however long the animation runs.
    pub fn for_config(config: &HeartConfig) -> Self {
        Self {
            period: config.animation_period(),
            ..Self::default()
        }
    }

    /// Advance to `now`. The first tick only records the instant.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let delta = match self.last {
            Some(prev) if now > prev => now.duration_since(prev),
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit delta.
    pub fn advance(&mut self, delta: Duration) -> FrameTime {
        self.elapsed += delta.as_secs_f64();
        FrameTime {
            delta,
            elapsed: self.elapsed,
        }
    }

    /// Accumulated seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time as the evaluator consumes it, wrapped in `f64` before narrowing.
    pub fn time(&self) -> f32 {
        match self.period {
            Some(period) => self.elapsed.rem_euclid(period) as f32,
            None => self.elapsed as f32,
        }
    }

    /// Snapshot for the frame about to be drawn.
    pub fn frame_params(&self, viewport: Viewport) -> FrameParams {
        FrameParams::new(viewport, self.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_adds_nothing() {
        let mut clock = AnimationClock::new();
        let t = clock.tick(Instant::now());
        assert_eq!(t.delta, Duration::ZERO);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn ticks_accumulate_wall_clock_deltas() {
        let mut clock = AnimationClock::new();
        let start = Instant::now();
        clock.tick(start);
        clock.tick(start + Duration::from_millis(16));
        let t = clock.tick(start + Duration::from_millis(50));
        assert_eq!(t.delta, Duration::from_millis(34));
        assert!((clock.elapsed() - 0.050).abs() < 1e-9);
    }

    #[test]
    fn long_uptime_keeps_time_resolution() {
        let mut clock = AnimationClock::for_config(&HeartConfig::default());
        clock.advance(Duration::from_secs(100_000));
        clock.advance(Duration::from_millis(250));
        assert!((clock.time() - 0.25).abs() < 1e-6, "{}", clock.time());
        assert!((clock.elapsed() - 100_000.25).abs() < 1e-9);
        clock.advance(Duration::from_millis(16));
        assert!((clock.time() - 0.266).abs() < 1e-6, "{}", clock.time());
    }

    #[test]
    fn plain_clock_does_not_wrap() {
        let mut clock = AnimationClock::new();
        clock.advance(Duration::from_secs(25));
        assert_eq!(clock.time(), 25.0);
    }

    #[test]
    fn going_backwards_never_decreases_time() {
        let mut clock = AnimationClock::new();
        let start = Instant::now();
        clock.tick(start + Duration::from_millis(10));
        let t = clock.tick(start);
        assert_eq!(t.delta, Duration::ZERO);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
