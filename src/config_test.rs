use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("PORT"));
}

#[test]
fn upstream_is_optional_and_loses_trailing_slash() {
    assert_eq!(parse_upstream(None).unwrap(), None);
    assert_eq!(parse_upstream(Some("")).unwrap(), None);
    assert_eq!(
        parse_upstream(Some("https://api.school.example/v1/")).unwrap().as_deref(),
        Some("https://api.school.example/v1")
    );
}

#[test]
fn upstream_must_be_http_url() {
    let err = parse_upstream(Some("ftp://files")).unwrap_err();
    assert!(matches!(err, ConfigError::NotHttpUrl { .. }));
}

#[test]
fn timeout_defaults_and_rejects_zero() {
    assert_eq!(parse_timeout(None).unwrap(), DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(parse_timeout(Some("5")).unwrap(), 5);
    assert!(parse_timeout(Some("0")).is_err());
    assert!(parse_timeout(Some("-3")).is_err());
}
