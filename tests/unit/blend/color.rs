use super::*;

const COLORS: [Rgb; 7] = [
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.2, 0.6, 0.4],
    [0.9, 0.1, 0.5],
    [0.3, 0.3, 0.8],
    [0.5, 0.5, 0.5],
];

fn close(x: f32, y: f32) -> bool {
    (x - y).abs() <= 1e-5
}

fn close_rgb(x: Rgb, y: Rgb) -> bool {
    (0..3).all(|i| close(x[i], y[i]))
}

fn is_gray(c: Rgb) -> bool {
    c[0] == c[1] && c[1] == c[2]
}

#[test]
fn separable_modes_apply_per_channel() {
    let b = [0.25, 0.5, 1.0];
    let a = [0.5, 0.5, 0.0];
    assert_eq!(normal(b, a), a);
    assert_eq!(multiply(b, a), [0.125, 0.25, 0.0]);
    assert_eq!(darken(b, a), [0.25, 0.5, 0.0]);
    assert_eq!(lighten(b, a), [0.5, 0.5, 1.0]);
    assert_eq!(difference(b, a), [0.25, 0.0, 1.0]);
    assert_eq!(
        overlay(b, a),
        [
            channel::overlay(0.25, 0.5),
            channel::overlay(0.5, 0.5),
            channel::overlay(1.0, 0.0)
        ]
    );
}

#[test]
fn lum_weights() {
    assert!(close(lum([1.0, 0.0, 0.0]), 0.3));
    assert!(close(lum([0.0, 1.0, 0.0]), 0.59));
    assert!(close(lum([0.0, 0.0, 1.0]), 0.11));
    assert!(close(lum([1.0, 1.0, 1.0]), 1.0));
}

#[test]
fn sat_is_channel_spread() {
    assert!(close(sat([0.2, 0.6, 0.4]), 0.4));
    assert_eq!(sat([0.5, 0.5, 0.5]), 0.0);
}

#[test]
fn set_sat_zero_is_gray() {
    for c in COLORS {
        assert!(is_gray(set_sat(c, 0.0)), "{c:?}");
    }
}

#[test]
fn set_sat_hits_requested_saturation() {
    for c in COLORS.into_iter().filter(|&c| !is_gray(c)) {
        for s in [0.1f32, 0.5, 1.0] {
            assert!(close(sat(set_sat(c, s)), s), "{c:?} {s}");
        }
    }
}

#[test]
fn set_sat_keeps_channel_order() {
    assert!(close_rgb(set_sat([0.2, 0.6, 0.4], 0.8), [0.0, 0.8, 0.4]));
    assert_eq!(set_sat([0.7, 0.7, 0.7], 0.5), [0.0, 0.0, 0.0]);
}

#[test]
fn set_lum_preserves_requested_luminosity() {
    for c in COLORS {
        for l in [0.1f32, 0.25, 0.5, 0.75, 0.9] {
            assert!(close(lum(set_lum(c, l)), l), "{c:?} {l}");
        }
    }
}

#[test]
fn clip_color_leaves_in_gamut_colors_alone() {
    for c in COLORS {
        assert_eq!(clip_color(c), c);
    }
}

#[test]
fn clip_color_pulls_channels_into_gamut() {
    let under = clip_color([-0.2, 0.5, 0.5]);
    assert!(close(under[0], 0.0));
    assert!(close(lum(under), lum([-0.2, 0.5, 0.5])));

    let over = clip_color([1.2, 0.2, 0.2]);
    assert!(close_rgb(over, [1.0, 0.285_714_3, 0.285_714_3]));
}

#[test]
fn clip_color_applies_both_corrections_with_the_input_maximum() {
    let c = [-0.5, 0.5, 1.5];
    let out = clip_color(c);
    // Rescaling against the corrected maximum (0.765) would stop after the low side.
    assert!(close_rgb(out, [0.130_252_1, 0.352_163_1, 0.574_074]), "{out:?}");
    assert!(close(lum(out), lum(c)));
}

#[test]
fn clip_color_passes_out_of_range_grays_through() {
    let out = clip_color([2.0, 2.0, 2.0]);
    assert_eq!(out, [2.0, 2.0, 2.0]);

    let out = clip_color([-1.0, -1.0, -1.0]);
    assert!(out.iter().all(|v| v.is_finite()), "{out:?}");
    assert!(is_gray(out));
}

#[test]
fn set_lum_of_gray_stays_finite_at_the_edges() {
    for c in [[1.0f32, 1.0, 1.0], [0.5, 0.5, 0.5]] {
        for l in [0.0f32, 1.0] {
            let out = set_lum(c, l);
            assert!(out.iter().all(|v| v.is_finite()), "{c:?} {l} -> {out:?}");
            assert!(close(lum(out), l));
        }
    }
}

#[test]
fn luminosity_takes_above_luminance() {
    let out = luminosity([1.0, 0.0, 0.0], [0.5, 0.5, 0.5]);
    assert!(close_rgb(out, [1.0, 0.285_714_3, 0.285_714_3]));
    assert!(close(lum(out), 0.5));
}

#[test]
fn color_keeps_below_luminance() {
    for b in COLORS {
        for a in COLORS {
            assert!(close(lum(color(b, a)), lum(b)), "{b:?} {a:?}");
        }
    }
}

#[test]
fn hue_of_gray_above_is_gray() {
    let out = hue([0.9, 0.1, 0.5], [0.4, 0.4, 0.4]);
    assert!(is_gray(out));
    assert!(close(out[0], lum([0.9, 0.1, 0.5])));
}

#[test]
fn saturation_of_gray_above_desaturates_below() {
    let b = [0.2, 0.6, 0.4];
    let out = saturation(b, [0.3, 0.3, 0.3]);
    assert!(close(out[0], out[1]) && close(out[1], out[2]));
    assert!(close(lum(out), lum(b)));
}

#[test]
fn blend_functions_do_not_alias_inputs() {
    let b = [0.9f32, 0.1, 0.5];
    let a = [0.2f32, 0.6, 0.4];
    let _ = hue(b, a);
    let _ = saturation(b, a);
    let _ = set_sat(b, 0.3);
    assert_eq!(b, [0.9, 0.1, 0.5]);
    assert_eq!(a, [0.2, 0.6, 0.4]);
}
