use super::*;

#[test]
fn port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_zero_and_garbage() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort { value: "0".into() }));
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("http")).is_err());
}

#[test]
fn site_root_is_optional() {
    let cfg = HostConfig::from_values(None, Some("/srv/inkpost")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/inkpost")));
    assert_eq!(HostConfig::from_values(Some("4000"), Some("")).unwrap().site_root, None);
}

#[test]
fn invalid_port_error_names_value() {
    let err = HostConfig::from_values(Some("abc"), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT \"abc\": expected 1-65535");
}

#[test]
fn default_port_does_not_collide_with_client_api_default() {
    let api_url = inkpost_client::config::ClientConfig::from_raw(None).api_url;
    let own_origin = format!("http://localhost:{}", HostConfig::from_values(None, None).unwrap().port);
    assert_ne!(api_url, own_origin);
    assert!(!api_url.ends_with(&format!(":{DEFAULT_PORT}")));
}
