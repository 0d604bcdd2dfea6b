//! Unit tests for error construction and formatting.

use rstest::rstest;

use super::ConfigError;

#[rstest]
fn file_error_names_the_path() {
    let err = ConfigError::file("assets/hosted.json", std::io::Error::other("denied"));
    let message = err.to_string();
    assert!(message.contains("assets/hosted.json"), "{message}");
    assert!(message.contains("denied"), "{message}");
}

#[rstest]
fn json_errors_convert_via_from() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated JSON must not parse");
    };
    let err = ConfigError::from(source);
    assert!(matches!(err, ConfigError::Json(_)));
}

#[rstest]
fn defaults_error_wraps_figment() {
    let err = ConfigError::defaults(figment::Error::from("missing field"));
    assert!(matches!(err, ConfigError::Defaults(_)));
    assert!(err.to_string().contains("missing field"));
}
