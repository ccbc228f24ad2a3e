pub mod bezier;
pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod math;
pub mod raster;
pub mod segments;
pub mod uniforms;

pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");
pub static BLIT_WGSL: &str = include_str!("../shaders/blit.wgsl");

pub use bezier::QuadBezier;
pub use clock::{AnimationClock, FrameTime};
pub use compositor::{tone_map, Compositor, FrameParams, Viewport};
pub use config::{HeartConfig, PhaseOffsets};
pub use constants::*;
pub use error::HeartError;
pub use uniforms::HeartUniforms;
