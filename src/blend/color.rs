//! Blend functions over whole RGB colors.
//!
//! The twelve separable modes lift the matching function from
//! [`crate::blend::channel`] onto each channel. Hue, saturation, color and
//! luminosity work on all channels together through the HSL-style helpers
//! below (<https://www.w3.org/TR/compositing-1/#blendingnonseparable>).

use crate::blend::channel;
use crate::foundation::core::Rgb;
use crate::util::{blend_channels, map_channels};

macro_rules! separable {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(below: Rgb, above: Rgb) -> Rgb {
                blend_channels(channel::$name, below, above)
            }
        )*
    };
}

separable!(
    /// Channel-wise [`channel::normal`].
    normal,
    /// Channel-wise [`channel::multiply`].
    multiply,
    /// Channel-wise [`channel::screen`].
    screen,
    /// Channel-wise [`channel::overlay`].
    overlay,
    /// Channel-wise [`channel::darken`].
    darken,
    /// Channel-wise [`channel::lighten`].
    lighten,
    /// Channel-wise [`channel::color_dodge`].
    color_dodge,
    /// Channel-wise [`channel::color_burn`].
    color_burn,
    /// Channel-wise [`channel::hard_light`].
    hard_light,
    /// Channel-wise [`channel::soft_light`].
    soft_light,
    /// Channel-wise [`channel::difference`].
    difference,
    /// Channel-wise [`channel::exclusion`].
    exclusion,
);

/// Hue of `above` with the saturation and luminosity of `below`.
pub fn hue(below: Rgb, above: Rgb) -> Rgb {
    set_lum(set_sat(above, sat(below)), lum(below))
}

/// Saturation of `above` with the hue and luminosity of `below`.
pub fn saturation(below: Rgb, above: Rgb) -> Rgb {
    set_lum(set_sat(below, sat(above)), lum(below))
}

/// Hue and saturation of `above` with the luminosity of `below`.
pub fn color(below: Rgb, above: Rgb) -> Rgb {
    set_lum(above, lum(below))
}

/// Luminosity of `above` with the hue and saturation of `below`.
pub fn luminosity(below: Rgb, above: Rgb) -> Rgb {
    set_lum(below, lum(above))
}

/// Weighted luminosity `0.3 R + 0.59 G + 0.11 B`.
pub fn lum(c: Rgb) -> f32 {
    0.3 * c[0] + 0.59 * c[1] + 0.11 * c[2]
}

/// `max(R, G, B) - min(R, G, B)`.
pub fn sat(c: Rgb) -> f32 {
    max3(c) - min3(c)
}

/// Shift `c` so its luminosity becomes `l`, then clip it back into gamut.
pub fn set_lum(c: Rgb, l: f32) -> Rgb {
    let d = l - lum(c);
    clip_color(map_channels(c, |v| v + d))
}

/// Rescale `c` so its saturation becomes `s`, keeping the channel order.
///
/// The largest channel becomes `s`, the smallest `0`, and the middle one
/// keeps its relative position between them. A gray input becomes black.
pub fn set_sat(c: Rgb, s: f32) -> Rgb {
    let mut order = [0usize, 1, 2];
    order.sort_by(|&l, &r| c[l].total_cmp(&c[r]));
    let [min, mid, max] = order;

    let mut out = c;
    if c[max] > c[min] {
        out[mid] = (c[mid] - c[min]) * s / (c[max] - c[min]);
        out[max] = s;
    } else {
        out[mid] = 0.0;
        out[max] = 0.0;
    }
    out[min] = 0.0;
    out
}

/// Pull out-of-gamut channels back into `[0, 1]` while preserving luminosity.
pub fn clip_color(c: Rgb) -> Rgb {
    let l = lum(c);
    let n = min3(c);
    let x = max3(c);
    let mut c = c;
    // A gray color has `l == n == x` up to rounding and nothing to rescale.
    if n < 0.0 && l > n {
        c = map_channels(c, |v| l + ((v - l) * l) / (l - n));
    }
    // `x` is the maximum before the low-side correction.
    if x > 1.0 && x > l {
        c = map_channels(c, |v| l + ((v - l) * (1.0 - l)) / (x - l));
    }
    c
}

fn min3(c: Rgb) -> f32 {
    c[0].min(c[1]).min(c[2])
}

fn max3(c: Rgb) -> f32 {
    c[0].max(c[1]).max(c[2])
}

#[cfg(test)]
#[path = "../../tests/unit/blend/color.rs"]
mod tests;
