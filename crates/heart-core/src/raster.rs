//! CPU rendition of a whole frame.
//!
//! Every pixel depends only on its coordinate and the shared [`FrameParams`],
//! so rows are filled independently; with the `parallel` feature they are
//! spread over the rayon pool.

use crate::compositor::{Compositor, FrameParams};
use crate::error::HeartError;
use glam::Vec4;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const BYTES_PER_PIXEL: usize = 4;

/// Quantize a `[0, 1]` color to RGBA8.
#[inline]
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    [q(color.x), q(color.y), q(color.z), q(color.w)]
}

fn fill_row(compositor: &Compositor, frame: &FrameParams, y: u32, row: &mut [u8]) {
    for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        px.copy_from_slice(&to_rgba8(compositor.shade_pixel(frame, x as u32, y)));
    }
}

/// Fill `out` (rows top to bottom, tightly packed RGBA8) for `frame`.
pub fn render_rgba8(
    compositor: &Compositor,
    frame: &FrameParams,
    out: &mut [u8],
) -> Result<(), HeartError> {
    let width = frame.viewport.width as usize;
    let height = frame.viewport.height as usize;
    if width == 0 || height == 0 {
        return Err(HeartError::EmptyViewport {
            width: frame.viewport.width,
            height: frame.viewport.height,
        });
    }
    let expected = width * height * BYTES_PER_PIXEL;
    if out.len() != expected {
        return Err(HeartError::BufferSize {
            expected,
            actual: out.len(),
        });
    }
    let stride = width * BYTES_PER_PIXEL;

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| fill_row(compositor, frame, y as u32, row));

    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| fill_row(compositor, frame, y as u32, row));

    Ok(())
}

/// Allocate and fill a new RGBA8 frame.
pub fn render_frame(compositor: &Compositor, frame: &FrameParams) -> Result<Vec<u8>, HeartError> {
    let mut out =
        vec![0u8; frame.viewport.width as usize * frame.viewport.height as usize * BYTES_PER_PIXEL];
    render_rgba8(compositor, frame, &mut out)?;
    Ok(out)
}
