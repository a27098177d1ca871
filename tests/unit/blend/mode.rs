use super::*;

#[test]
fn twelve_modes_are_separable() {
    let separable = BlendMode::ALL
        .iter()
        .filter(|m| m.is_separable())
        .count();
    assert_eq!(separable, 12);
    assert!(!BlendMode::Hue.is_separable());
    assert!(!BlendMode::Luminosity.is_separable());
}

#[test]
fn color_fn_lifts_channel_fn() {
    let b = [0.2, 0.55, 0.9];
    let a = [0.7, 0.3, 0.5];
    for mode in BlendMode::ALL {
        let Some(ch) = mode.channel_fn() else {
            continue;
        };
        let expected = [ch(b[0], a[0]), ch(b[1], a[1]), ch(b[2], a[2])];
        assert_eq!((mode.color_fn())(b, a), expected, "{mode}");
    }
}

#[test]
fn names_round_trip_through_from_str() {
    for mode in BlendMode::ALL {
        assert_eq!(mode.name().parse::<BlendMode>().unwrap(), mode);
        assert_eq!(mode.to_string(), mode.name());
    }
}

#[test]
fn from_str_accepts_common_spellings() {
    for s in ["color-dodge", "color_dodge", "colorDodge", " COLOR-DODGE "] {
        assert_eq!(s.parse::<BlendMode>().unwrap(), BlendMode::ColorDodge);
    }
    assert_eq!("soft_light".parse::<BlendMode>().unwrap(), BlendMode::SoftLight);
}

#[test]
fn from_str_rejects_unknown_and_empty() {
    let err = "dissolve".parse::<BlendMode>().unwrap_err();
    assert!(err.to_string().contains("unknown blend mode 'dissolve'"));
    assert!("  ".parse::<BlendMode>().is_err());
}

#[test]
fn serde_uses_kebab_case() {
    let json = serde_json::to_string(&BlendMode::HardLight).unwrap();
    assert_eq!(json, "\"hard-light\"");
    let back: BlendMode = serde_json::from_str("\"luminosity\"").unwrap();
    assert_eq!(back, BlendMode::Luminosity);
    for mode in BlendMode::ALL {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.name()));
    }
}

#[test]
fn default_is_normal() {
    assert_eq!(BlendMode::default(), BlendMode::Normal);
}
