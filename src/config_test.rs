use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(HostConfig::from_port_var(None), Ok(HostConfig { port: DEFAULT_PORT }));
    assert_eq!(HostConfig::from_port_var(Some("  ")), Ok(HostConfig { port: DEFAULT_PORT }));
}

#[test]
fn numeric_port_is_parsed() {
    let cfg = HostConfig::from_port_var(Some("8080")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_port_var(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));

    let err = HostConfig::from_port_var(Some("70000")).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT value \"70000\""));
}

#[test]
fn leptos_error_names_its_source() {
    let err = ConfigError::Leptos("missing [package.metadata.leptos]".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing [package.metadata.leptos]");
}
