//! Per-pixel composition: screen mapping, glow accumulation over every heart
//! instance, and the exposure/gamma tone map.

use crate::color::{glow, rainbow};
use crate::config::HeartConfig;
use crate::constants::GAMMA;
use crate::error::HeartError;
use crate::math::finite_or_zero;
use crate::segments::instance_distance;
use glam::{Vec2, Vec3, Vec4};

/// Output size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn checked(width: u32, height: u32) -> Result<Self, HeartError> {
        if width == 0 || height == 0 {
            return Err(HeartError::EmptyViewport { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a fragment coordinate (origin bottom-left) to the centered,
    /// aspect-corrected space the curve lives in.
    ///
    /// `x` spans `[-0.5, 0.5]` across the width, mirrored so the heart is
    /// upright; `y` shares the same units.
    pub fn position(&self, frag_coord: Vec2, vertical_offset: f32) -> Vec2 {
        let uv = frag_coord / self.resolution();
        let mut pos = Vec2::splat(0.5) - uv;
        pos.y /= self.aspect();
        pos.y += vertical_offset;
        pos
    }

    /// Curve units to screen units; the heart keeps its size relative to the height.
    pub fn curve_scale(&self, viewport_scale: f32) -> f32 {
        viewport_scale * self.height as f32
    }
}

/// Everything one frame's evaluation reads. Written once by the animation
/// driver before the frame, then shared by reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub viewport: Viewport,
    pub time: f32,
    /// Height in pixels the heart is sized for; the viewport height unless the
    /// frame is rendered at reduced resolution and stretched.
    pub scale_height: u32,
}

impl FrameParams {
    pub fn new(viewport: Viewport, time: f32) -> Self {
        Self {
            viewport,
            time,
            scale_height: viewport.height,
        }
    }

    /// Render into `viewport` but size the heart for a `display` viewport the
    /// result is stretched over.
    pub fn reduced(viewport: Viewport, display: Viewport, time: f32) -> Self {
        Self {
            scale_height: display.height,
            ..Self::new(viewport, time)
        }
    }

    /// Curve units to screen units for this frame.
    pub fn curve_scale(&self, viewport_scale: f32) -> f32 {
        viewport_scale * self.scale_height as f32
    }
}

/// Exposure `1 - e^-x` followed by gamma. Non-finite or negative channels
/// count as no light.
///
/// Strictly increasing until `f32` saturates: from `x` of about 17 a channel
/// is exactly `1.0`, which the core of the glow always reaches.
pub fn tone_map(color: Vec3) -> Vec3 {
    let sanitize = |c: f32| finite_or_zero(c).max(0.0);
    let linear = Vec3::new(sanitize(color.x), sanitize(color.y), sanitize(color.z));
    let exposed = Vec3::ONE - (-linear).exp();
    exposed.powf(GAMMA)
}

/// Stateless per-pixel shader over a validated [`HeartConfig`].
#[derive(Clone, Debug)]
pub struct Compositor {
    config: HeartConfig,
}

impl Compositor {
    pub fn new(config: HeartConfig) -> Result<Self, HeartError> {
        if let Err(e) = config.validate() {
            log::warn!("[heart] rejected config: {}", e);
            return Err(e);
        }
        log::debug!("[heart] {} instance(s)", config.instance_count());
        Ok(Self { config })
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    /// Distance from `pos` to each heart instance, in phase order.
    pub fn distances<'a>(
        &'a self,
        frame: &'a FrameParams,
        pos: Vec2,
    ) -> impl Iterator<Item = f32> + 'a {
        let scale = frame.curve_scale(self.config.viewport_scale);
        self.config
            .phase_offsets
            .iter()
            .map(move |&phase| instance_distance(frame.time, phase, pos, scale, &self.config))
    }

    /// Summed glow of every instance, before color.
    pub fn glow_sum(&self, frame: &FrameParams, pos: Vec2) -> f32 {
        self.distances(frame, pos)
            .map(|d| finite_or_zero(glow(d, self.config.glow_radius, self.config.glow_intensity)))
            .sum()
    }

    /// Linear color at `pos` before tone mapping.
    pub fn accumulate(&self, frame: &FrameParams, pos: Vec2) -> Vec3 {
        let color = rainbow(frame.time, self.config.hue_rate);
        self.distances(frame, pos).fold(Vec3::ZERO, |acc, d| {
            let g = finite_or_zero(glow(d, self.config.glow_radius, self.config.glow_intensity));
            acc + g * color
        })
    }

    /// Final opaque color for a fragment coordinate (origin bottom-left).
    pub fn shade(&self, frame: &FrameParams, frag_coord: Vec2) -> Vec4 {
        let pos = frame
            .viewport
            .position(frag_coord, self.config.vertical_offset);
        tone_map(self.accumulate(frame, pos)).extend(1.0)
    }

    /// Color of the raster pixel `(x, y)`, rows counted from the top.
    pub fn shade_pixel(&self, frame: &FrameParams, x: u32, y: u32) -> Vec4 {
        let frag = Vec2::new(
            x as f32 + 0.5,
            frame.viewport.height as f32 - (y as f32 + 0.5),
        );
        self.shade(frame, frag)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self {
            config: HeartConfig::default(),
        }
    }
}
