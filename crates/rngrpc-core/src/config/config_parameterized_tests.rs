#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized parameter-string parsing tests
// ============================================================================

#[test_case("log_level=trace", LogLevel::Trace)]
#[test_case("log_level=debug", LogLevel::Debug)]
#[test_case("log_level=info", LogLevel::Info)]
#[test_case("log_level=warn", LogLevel::Warn)]
#[test_case("log_level=warning", LogLevel::Warn)]
#[test_case("log_level=error", LogLevel::Error)]
#[test_case("log_level=off", LogLevel::Off)]
#[test_case("", LogLevel::Warn)]
fn GeneratorOptions___log_level_parameter___parses_correctly(parameter: &str, expected: LogLevel) {
    let options = GeneratorOptions::from_parameter(parameter).unwrap();
    assert_eq!(options.log_level, expected);
}

#[test_case("strict=true", true)]
#[test_case("strict=false", false)]
#[test_case("strict=true,strict=false", false)]
#[test_case("package=x", false)]
fn GeneratorOptions___strict_parameter___parses_correctly(parameter: &str, expected: bool) {
    let options = GeneratorOptions::from_parameter(parameter).unwrap();
    assert_eq!(options.strict, expected);
}

#[test_case("package=com.grpc", Some("com.grpc"))]
#[test_case("package=io.example.native", Some("io.example.native"))]
#[test_case("strict=true", None)]
fn GeneratorOptions___package_parameter___parses_correctly(
    parameter: &str,
    expected: Option<&str>,
) {
    let options = GeneratorOptions::from_parameter(parameter).unwrap();
    assert_eq!(options.package.as_deref(), expected);
}

// ============================================================================
// Parameterized rejection tests
// ============================================================================

#[test_case("nonsense" ; "no equals sign")]
#[test_case("=x" ; "empty key")]
#[test_case("unknown=1" ; "unknown key")]
#[test_case("log_level=loud" ; "unknown level")]
#[test_case("skip_empty=1" ; "non boolean flag")]
fn GeneratorOptions___invalid_parameter___is_rejected(parameter: &str) {
    let err = GeneratorOptions::from_parameter(parameter).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidParameter(_)));
}
