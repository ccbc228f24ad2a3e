//! Start-up configuration of the renderer.
//!
//! Every field defaults to the named constant in [`crate::constants`]. A config
//! is built once and then only borrowed; nothing mutates it per frame.

use crate::constants::*;
use crate::error::HeartError;
use smallvec::SmallVec;

/// Ordered curve-parameter offsets, one per drawn heart.
pub type PhaseOffsets = SmallVec<[f32; MAX_HEART_INSTANCES]>;

#[derive(Clone, Debug, PartialEq)]
pub struct HeartConfig {
    pub scroll_speed: f32,
    pub segment_len: f32,
    pub glow_radius: f32,
    pub glow_intensity: f32,
    pub viewport_scale: f32,
    pub vertical_offset: f32,
    pub hue_rate: f32,
    pub phase_offsets: PhaseOffsets,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            scroll_speed: SCROLL_SPEED,
            segment_len: SEGMENT_LEN,
            glow_radius: GLOW_RADIUS,
            glow_intensity: GLOW_INTENSITY,
            viewport_scale: VIEWPORT_SCALE,
            vertical_offset: VERTICAL_OFFSET,
            hue_rate: HUE_RATE,
            phase_offsets: SmallVec::from_slice(&PHASE_OFFSETS),
        }
    }
}

impl HeartConfig {
    /// Replace the heart instances; call [`HeartConfig::validate`] afterwards.
    pub fn with_phase_offsets(mut self, phases: &[f32]) -> Self {
        self.phase_offsets = SmallVec::from_slice(phases);
        self
    }

    pub fn instance_count(&self) -> usize {
        self.phase_offsets.len()
    }

    /// Shortest time after which both the scroll and the hue repeat, if one
    /// exists within [`MAX_PERIOD_TURNS`] scroll turns.
    pub fn animation_period(&self) -> Option<f64> {
        let speed = (self.scroll_speed as f64).abs();
        let rate = (self.hue_rate as f64).abs();
        let whole = |x: f64| (x - x.round()).abs() < PERIOD_TOLERANCE && x.round() >= 1.0;
        match (speed > 0.0, rate > 0.0) {
            (false, false) => None,
            (false, true) => Some(1.0 / rate),
            (true, false) => Some(1.0 / speed),
            (true, true) => (1..=MAX_PERIOD_TURNS)
                .map(|turns| turns as f64 / speed)
                .find(|&period| whole(period * rate)),
        }
    }

    pub fn validate(&self) -> Result<(), HeartError> {
        let count = self.phase_offsets.len();
        if count == 0 {
            return Err(HeartError::NoInstances);
        }
        if count > MAX_HEART_INSTANCES {
            return Err(HeartError::TooManyInstances {
                count,
                max: MAX_HEART_INSTANCES,
            });
        }
        for &phase in &self.phase_offsets {
            finite("phase_offset", phase)?;
        }
        finite("scroll_speed", self.scroll_speed)?;
        finite("vertical_offset", self.vertical_offset)?;
        finite("hue_rate", self.hue_rate)?;
        positive("segment_len", self.segment_len)?;
        positive("glow_radius", self.glow_radius)?;
        positive("glow_intensity", self.glow_intensity)?;
        positive("viewport_scale", self.viewport_scale)?;
        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), HeartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HeartError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), HeartError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(HeartError::NotPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_covers_scroll_and_hue() {
        let period = HeartConfig::default().animation_period().unwrap();
        assert!((period - 10.0).abs() < 1e-9, "{period}");
    }

    #[test]
    fn still_scroll_repeats_with_the_hue() {
        let config = HeartConfig {
            scroll_speed: 0.0,
            hue_rate: 0.25,
            ..HeartConfig::default()
        };
        assert_eq!(config.animation_period(), Some(4.0));
    }

    #[test]
    fn incommensurate_rates_have_no_period() {
        let config = HeartConfig {
            scroll_speed: -0.5,
            hue_rate: std::f32::consts::PI / 10.0,
            ..HeartConfig::default()
        };
        assert_eq!(config.animation_period(), None);
    }
}
