use thiserror::Error;

/// Errors from configuring or driving the heart renderer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeartError {
    #[error("at least one heart instance (phase offset) is required")]
    NoInstances,
    #[error("{count} heart instances requested, at most {max} are supported")]
    TooManyInstances { count: usize, max: usize },
    #[error("`{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("`{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("viewport {width}x{height} has no pixels")]
    EmptyViewport { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, {expected} expected")]
    BufferSize { expected: usize, actual: usize },
}
