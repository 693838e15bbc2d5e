use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LedloomError::invalid_configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        LedloomError::out_of_range("x")
            .to_string()
            .contains("out of range:")
    );
    assert!(
        LedloomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LedloomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
