use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OdysseyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OdysseyError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(OdysseyError::asset("x").to_string().contains("asset error:"));
    assert!(
        OdysseyError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        OdysseyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OdysseyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
