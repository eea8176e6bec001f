use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::{ClientArgs, default_consent_path};
use crate::error::{AppError, AppResult, ValidationError};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk configuration (`cassette.toml` / `cassette.json`).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub consent_path: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub consent_path: PathBuf,
    pub timeout: Duration,
}

impl Settings {
    /// Resolves settings: CLI flags win over config values, config values
    /// over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when no server URL is available from either source,
    /// or the timeout is zero.
    pub fn resolve(args: &ClientArgs, config: Option<&ConfigFile>) -> AppResult<Self> {
        let server_url = args
            .server
            .clone()
            .or_else(|| config.and_then(|file| file.server_url.clone()))
            .ok_or_else(|| AppError::validation(ValidationError::MissingServerUrl))?;

        let consent_path = resolve_consent_path(args, config);

        let timeout_secs = args
            .timeout_secs
            .or_else(|| config.and_then(|file| file.request_timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AppError::validation(ValidationError::TimeoutZero));
        }

        Ok(Self {
            server_url,
            consent_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// The consent store location is also needed when no full settings can be
/// resolved yet (the consent subcommands work without a server URL).
#[must_use]
pub fn resolve_consent_path(args: &ClientArgs, config: Option<&ConfigFile>) -> PathBuf {
    args.consent_path
        .clone()
        .map(PathBuf::from)
        .or_else(|| config.and_then(|file| file.consent_path.clone()))
        .unwrap_or_else(default_consent_path)
}
