//! Small pixel helpers shared by the blend and composite code.

use crate::foundation::core::{ChannelBlendFn, Rgb, Rgba};

/// Drop the alpha channel.
pub fn rgb(pixel: Rgba) -> Rgb {
    [pixel[0], pixel[1], pixel[2]]
}

/// Scale every color channel by `weight`.
pub fn weight(weight: f32, pixel: Rgb) -> Rgb {
    pixel.map(|c| c * weight)
}

/// Channel-wise `l * weight_l + r * weight_r`.
pub fn weight_sum(weight_l: f32, l: Rgb, weight_r: f32, r: Rgb) -> Rgb {
    std::array::from_fn(|i| l[i] * weight_l + r[i] * weight_r)
}

/// Apply `f` to every color channel.
pub fn map_channels(pixel: Rgb, f: impl Fn(f32) -> f32) -> Rgb {
    pixel.map(f)
}

/// Apply a channel blend function to each of R, G and B independently.
pub fn blend_channels(ch: ChannelBlendFn, below: Rgb, above: Rgb) -> Rgb {
    std::array::from_fn(|i| ch(below[i], above[i]))
}

#[cfg(test)]
#[path = "../tests/unit/util.rs"]
mod tests;
