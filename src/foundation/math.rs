use crate::foundation::core::Rgba;

pub(crate) fn unorm8_to_f32(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Clamped 8-bit store: saturate into `[0, 255]`, round half to even, NaN -> 0.
pub(crate) fn f32_to_unorm8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
}

pub(crate) fn read_px(px: &[u8]) -> Rgba {
    [
        unorm8_to_f32(px[0]),
        unorm8_to_f32(px[1]),
        unorm8_to_f32(px[2]),
        unorm8_to_f32(px[3]),
    ]
}

pub(crate) fn write_px(px: &mut [u8], c: Rgba) {
    for (d, v) in px.iter_mut().zip(c) {
        *d = f32_to_unorm8(v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
