use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShieldError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ShieldError::registry("x")
            .to_string()
            .contains("shape registry error:")
    );
    assert!(
        ShieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = ShieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}
