//! Client settings precedence.

use std::fs;
use std::path::PathBuf;

use ffdash_cli::settings::{FlagOverrides, resolve_client_config};
use ffdash_client::ClientError;

fn settings_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ffdash-{}-{name}.toml", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_without_any_source() {
    let config = resolve_client_config(None, None, &FlagOverrides::default()).unwrap();
    assert_eq!(config.api_base, "http://localhost:8888");
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn file_overrides_defaults() {
    let path = settings_file(
        "file",
        "api_base = \"http://encoder:9000\"\nrequest_timeout_secs = 5\n",
    );
    let config = resolve_client_config(Some(&path), None, &FlagOverrides::default()).unwrap();
    assert_eq!(config.api_base, "http://encoder:9000");
    assert_eq!(config.request_timeout_secs, 5);
    fs::remove_file(path).ok();
}

#[test]
fn env_overrides_file_and_flag_overrides_env() {
    let path = settings_file(
        "layers",
        "api_base = \"http://from-file:1\"\nrequest_timeout_secs = 7\n",
    );

    let config = resolve_client_config(
        Some(&path),
        Some("http://from-env:2".to_string()),
        &FlagOverrides::default(),
    )
    .unwrap();
    assert_eq!(config.api_base, "http://from-env:2");
    assert_eq!(config.request_timeout_secs, 7);

    let config = resolve_client_config(
        Some(&path),
        Some("http://from-env:2".to_string()),
        &FlagOverrides {
            api_base: Some("http://from-flag:3"),
            request_timeout_secs: None,
        },
    )
    .unwrap();
    assert_eq!(config.api_base, "http://from-flag:3");
    fs::remove_file(path).ok();
}

#[test]
fn blank_env_value_is_ignored() {
    let config = resolve_client_config(None, Some("  ".to_string()), &FlagOverrides::default()).unwrap();
    assert_eq!(config.api_base, "http://localhost:8888");
}

#[test]
fn missing_file_is_a_config_error() {
    let path = std::env::temp_dir().join("ffdash-does-not-exist.toml");
    let err = resolve_client_config(Some(&path), None, &FlagOverrides::default()).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn timeout_flag_overrides_file() {
    let path = settings_file("timeout", "request_timeout_secs = 7\n");
    let flags = FlagOverrides {
        api_base: None,
        request_timeout_secs: Some(3),
    };
    let config = resolve_client_config(Some(&path), None, &flags).unwrap();
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.api_base, "http://localhost:8888");
    fs::remove_file(path).ok();
}
