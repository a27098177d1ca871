use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlendError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BlendError::buffer("x").to_string().contains("buffer error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlendError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_into_other() {
    let err: BlendError = anyhow::anyhow!("pool failed").into();
    assert!(matches!(err, BlendError::Other(_)));
    assert_eq!(err.to_string(), "pool failed");
}
