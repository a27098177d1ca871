//! Separable blend functions on a single channel.
//!
//! See <https://www.w3.org/TR/compositing-1/#blending>. Every function takes
//! `(below, above)`; inputs outside `[0, 1]` are not rejected.

/// Returns `above`.
pub fn normal(_below: f32, above: f32) -> f32 {
    above
}

/// `below * above`.
pub fn multiply(below: f32, above: f32) -> f32 {
    below * above
}

/// `below + above - below * above`.
pub fn screen(below: f32, above: f32) -> f32 {
    below + above - below * above
}

/// Hard light with the layers swapped.
pub fn overlay(below: f32, above: f32) -> f32 {
    hard_light(above, below)
}

/// Per-channel minimum.
pub fn darken(below: f32, above: f32) -> f32 {
    below.min(above)
}

/// Per-channel maximum.
pub fn lighten(below: f32, above: f32) -> f32 {
    below.max(above)
}

/// Brightens `below` towards `above`.
pub fn color_dodge(below: f32, above: f32) -> f32 {
    if below == 0.0 {
        return 0.0;
    }
    if above == 1.0 {
        return 1.0;
    }
    (below / (1.0 - above)).min(1.0)
}

/// Darkens `below` towards `above`.
pub fn color_burn(below: f32, above: f32) -> f32 {
    if below == 1.0 {
        return 1.0;
    }
    if above == 0.0 {
        return 0.0;
    }
    1.0 - ((1.0 - below) / above).min(1.0)
}

/// Multiply or screen, depending on `above`.
pub fn hard_light(below: f32, above: f32) -> f32 {
    if above <= 0.5 {
        multiply(below, 2.0 * above)
    } else {
        screen(below, 2.0 * above - 1.0)
    }
}

/// Darkens or lightens depending on `above`, like a diffused spotlight.
pub fn soft_light(below: f32, above: f32) -> f32 {
    if above <= 0.5 {
        return below - (1.0 - 2.0 * above) * below * (1.0 - below);
    }
    let d = if below <= 0.25 {
        ((16.0 * below - 12.0) * below + 4.0) * below
    } else {
        below.sqrt()
    };
    below + (2.0 * above - 1.0) * (d - below)
}

/// `|below - above|`.
pub fn difference(below: f32, above: f32) -> f32 {
    (below - above).abs()
}

/// Like difference, with lower contrast.
pub fn exclusion(below: f32, above: f32) -> f32 {
    below + above - 2.0 * below * above
}

#[cfg(test)]
#[path = "../../tests/unit/blend/channel.rs"]
mod tests;
