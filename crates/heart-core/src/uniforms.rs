//! Uniform block consumed by `heart.wgsl`.

use crate::compositor::FrameParams;
use crate::config::HeartConfig;
use crate::constants::MAX_HEART_INSTANCES;

/// Mirrors `struct HeartUniforms` in the shader. 64 bytes, 16-byte aligned rows.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HeartUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub phase_count: u32,
    pub phases: [f32; MAX_HEART_INSTANCES],
    pub scroll_speed: f32,
    pub segment_len: f32,
    pub glow_radius: f32,
    pub glow_intensity: f32,
    pub viewport_scale: f32,
    pub vertical_offset: f32,
    pub hue_rate: f32,
    pub _pad: f32,
}

impl HeartUniforms {
    /// Pack the config and frame. Extra phases beyond the block's capacity are
    /// dropped; a validated config never has any.
    pub fn new(config: &HeartConfig, frame: &FrameParams) -> Self {
        let mut phases = [0.0; MAX_HEART_INSTANCES];
        let count = config.phase_offsets.len().min(MAX_HEART_INSTANCES);
        phases[..count].copy_from_slice(&config.phase_offsets[..count]);
        Self {
            resolution: frame.viewport.resolution().to_array(),
            time: frame.time,
            phase_count: count as u32,
            phases,
            scroll_speed: config.scroll_speed,
            segment_len: config.segment_len,
            glow_radius: config.glow_radius,
            glow_intensity: config.glow_intensity,
            viewport_scale: config.viewport_scale,
            vertical_offset: config.vertical_offset,
            hue_rate: config.hue_rate,
            _pad: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
