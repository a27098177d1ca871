use crate::foundation::error::{BlendError, BlendResult};

/// Straight RGB color, each channel nominally in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Straight (non-premultiplied) RGBA color, each channel nominally in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

/// Scalar blend function `f(below, above)` applied to a single channel.
pub type ChannelBlendFn = fn(f32, f32) -> f32;

/// Color blend function `f(below, above)` over the three color channels.
pub type ColorBlendFn = fn(Rgb, Rgb) -> Rgb;

/// Byte length of a tightly packed RGBA8 grid, or a buffer error on overflow.
pub(crate) fn rgba8_len(width: u32, height: u32) -> BlendResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BlendError::buffer(format!("rgba8 size overflow for {width}x{height}")))
}

/// Fail unless `data` holds exactly `width * height` RGBA8 pixels.
pub(crate) fn check_rgba8_len(data: &[u8], width: u32, height: u32) -> BlendResult<()> {
    let expected = rgba8_len(width, height)?;
    if data.len() != expected {
        return Err(BlendError::buffer(format!(
            "expected {expected} bytes for {width}x{height} rgba8, got {}",
            data.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
