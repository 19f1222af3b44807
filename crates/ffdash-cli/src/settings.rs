//! Client settings resolution.
//!
//! Precedence, lowest first: built-in defaults, `--config` file,
//! `FFDASH_API_BASE`, then the `--api-base` and `--timeout` flags.

use std::path::Path;

use ffdash_client::{ClientConfig, ClientError};

/// Environment variable overriding the API base.
pub const API_BASE_ENV: &str = "FFDASH_API_BASE";

/// Settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides<'a> {
    pub api_base: Option<&'a str>,
    pub request_timeout_secs: Option<u64>,
}

/// Layer the configured sources into one [`ClientConfig`].
///
/// Empty environment values are ignored.
pub fn resolve_client_config(
    config_file: Option<&Path>,
    env_api_base: Option<String>,
    flags: &FlagOverrides<'_>,
) -> Result<ClientConfig, ClientError> {
    let mut config = match config_file {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(api_base) = env_api_base.filter(|value| !value.trim().is_empty()) {
        config = config.with_api_base(api_base);
    }
    if let Some(api_base) = flags.api_base {
        config = config.with_api_base(api_base);
    }
    if let Some(secs) = flags.request_timeout_secs {
        config = config.with_request_timeout_secs(secs);
    }
    Ok(config)
}

/// [`resolve_client_config`] reading the environment of this process.
pub fn client_config_from_env(
    config_file: Option<&Path>,
    flags: &FlagOverrides<'_>,
) -> Result<ClientConfig, ClientError> {
    resolve_client_config(config_file, std::env::var(API_BASE_ENV).ok(), flags)
}
