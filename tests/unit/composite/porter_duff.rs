use super::*;
use crate::blend::color;

fn close(x: f32, y: f32) -> bool {
    (x - y).abs() <= 1e-6
}

fn close_rgba(x: Rgba, y: Rgba) -> bool {
    (0..4).all(|i| close(x[i], y[i]))
}

#[test]
fn resolve_reads_the_right_alpha() {
    let below = [0.0, 0.0, 0.0, 0.25];
    let above = [0.0, 0.0, 0.0, 0.75];
    assert_eq!(PorterDuffArg::Constant(0.5).resolve(below, above), 0.5);
    assert_eq!(PorterDuffArg::AboveAlpha.resolve(below, above), 0.75);
    assert_eq!(PorterDuffArg::BelowAlpha.resolve(below, above), 0.25);
    assert_eq!(PorterDuffArg::AboveComplement.resolve(below, above), 0.25);
    assert_eq!(PorterDuffArg::BelowComplement.resolve(below, above), 0.75);
    assert_eq!(PorterDuffArg::from(2.0), PorterDuffArg::Constant(2.0));
}

#[test]
fn zero_output_alpha_is_transparent_black() {
    let below = [0.3, 0.6, 0.9, 0.0];
    let above = [0.9, 0.6, 0.3, 0.0];
    let out = raw_porter_duff(1.0, 1.0, color::normal, below, above);
    assert_eq!(out, TRANSPARENT);
    assert!(out.iter().all(|v| v.is_finite()));

    // source-in over a transparent backdrop.
    let out = PorterDuff::SOURCE_IN.apply(color::multiply, below, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(out, TRANSPARENT);
}

#[test]
fn source_over_opaque_above_replaces_below() {
    let below = [0.2, 0.4, 0.6, 1.0];
    let above = [0.9, 0.1, 0.5, 1.0];
    assert_eq!(PorterDuff::SOURCE_OVER.apply(color::normal, below, above), above);
}

#[test]
fn source_over_normal_is_linear_interpolation_on_opaque_below() {
    let below = [0.2, 0.4, 0.6, 1.0];
    for aa in [0.0f32, 0.1, 0.3, 0.5, 0.8] {
        let above = [0.9, 0.1, 0.5, aa];
        let out = PorterDuff::SOURCE_OVER.apply(color::normal, below, above);
        let expected = [
            below[0] * (1.0 - aa) + above[0] * aa,
            below[1] * (1.0 - aa) + above[1] * aa,
            below[2] * (1.0 - aa) + above[2] * aa,
            1.0,
        ];
        assert!(close_rgba(out, expected), "{aa}: {out:?} vs {expected:?}");
    }
}

#[test]
fn source_over_onto_transparent_ignores_blend() {
    // With αb = 0 the blend result has no weight.
    let below = [0.7, 0.7, 0.7, 0.0];
    let above = [0.1, 0.2, 0.3, 0.5];
    let out = PorterDuff::SOURCE_OVER.apply(color::difference, below, above);
    assert!(close_rgba(out, above));
}

#[test]
fn blend_applies_where_both_layers_are_opaque() {
    let below = [0.5, 0.5, 0.5, 1.0];
    let above = [0.5, 1.0, 0.0, 1.0];
    let out = PorterDuff::SOURCE_OVER.apply(color::multiply, below, above);
    assert!(close_rgba(out, [0.25, 0.5, 0.0, 1.0]));
}

#[test]
fn destination_out_keeps_below_color_and_cuts_alpha() {
    let below = [0.2, 0.4, 0.6, 1.0];
    let above = [0.9, 0.9, 0.9, 0.25];
    let out = PorterDuff::DESTINATION_OUT.apply(color::normal, below, above);
    assert!(close_rgba(out, [0.2, 0.4, 0.6, 0.75]));
}

#[test]
fn xor_of_two_opaque_pixels_is_empty() {
    let below = [1.0, 0.0, 0.0, 1.0];
    let above = [0.0, 0.0, 1.0, 1.0];
    assert_eq!(PorterDuff::XOR.apply(color::normal, below, above), TRANSPARENT);
}

#[test]
fn lighter_adds_alpha_without_clamping() {
    let below = [1.0, 0.0, 0.0, 0.75];
    let above = [0.0, 0.0, 1.0, 0.75];
    let out = PorterDuff::LIGHTER.apply(color::normal, below, above);
    assert!(close(out[3], 1.5));
}

#[test]
fn atop_operators_keep_one_sides_alpha() {
    let below = [0.2, 0.4, 0.6, 0.5];
    let above = [0.9, 0.1, 0.5, 0.8];
    let s = PorterDuff::SOURCE_ATOP.apply(color::normal, below, above);
    assert!(close(s[3], 0.5));
    let d = PorterDuff::DESTINATION_ATOP.apply(color::normal, below, above);
    assert!(close(d[3], 0.8));
}

#[test]
fn table_coefficients() {
    use PorterDuffArg::*;
    let table = [
        (PorterDuff::SOURCE_OVER, Constant(1.0), AboveComplement),
        (PorterDuff::DESTINATION_OVER, BelowComplement, Constant(1.0)),
        (PorterDuff::SOURCE_IN, BelowAlpha, Constant(0.0)),
        (PorterDuff::DESTINATION_IN, Constant(0.0), AboveAlpha),
        (PorterDuff::SOURCE_OUT, BelowComplement, Constant(0.0)),
        (PorterDuff::DESTINATION_OUT, Constant(0.0), AboveComplement),
        (PorterDuff::SOURCE_ATOP, BelowAlpha, AboveComplement),
        (PorterDuff::DESTINATION_ATOP, BelowComplement, AboveAlpha),
        (PorterDuff::XOR, BelowComplement, AboveComplement),
        (PorterDuff::LIGHTER, Constant(1.0), Constant(1.0)),
    ];
    for (op, fa, fb) in table {
        assert_eq!(op, PorterDuff::new(fa, fb));
    }
}

#[test]
fn arg_serde_shape() {
    let json = serde_json::to_string(&PorterDuff::SOURCE_OVER).unwrap();
    assert_eq!(json, r#"{"fa":{"constant":1.0},"fb":"above_complement"}"#);
    let back: PorterDuff = serde_json::from_str(&json).unwrap();
    assert_eq!(back, PorterDuff::SOURCE_OVER);
}
