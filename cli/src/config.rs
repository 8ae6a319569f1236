//! Client configuration.
//!
//! Resolved from, in order of precedence:
//!
//! 1. `--url` / `--timeout` flags
//! 2. `PLAGIUM_URL`, `PLAGIUM_TIMEOUT_SECS`
//! 3. `CORE_HOST` + `CORE_PORT` (the pair used by earlier deployments)
//! 4. Defaults: `http://localhost:4800`, 60 seconds
//!
//! A `.env` file in the working directory is loaded first when present.

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Default plagium core base URL.
pub const DEFAULT_URL: &str = "http://localhost:4800";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Versioned path of the comparison endpoint.
pub const PROCESS_PATH: &str = "/v1.1/process";

/// Extension accepted when none is given on the command line.
pub const DEFAULT_EXTENSION: &str = ".py";

/// Effective client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the plagium core, without trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let base_url = match lookup("PLAGIUM_URL") {
            Some(url) => normalize_url(&url)?,
            None => match (lookup("CORE_HOST"), lookup("CORE_PORT")) {
                (Some(host), Some(port)) => host_port_url(&host, &port)?,
                (None, None) => DEFAULT_URL.to_string(),
                _ => return Err(ConfigError::IncompleteHostPort),
            },
        };

        let timeout = match lookup("PLAGIUM_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, url: Option<&str>, timeout_secs: Option<u64>) -> ConfigResult<Self> {
        if let Some(url) = url {
            self.base_url = normalize_url(url)?;
        }
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(secs.to_string()));
            }
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Full URL of the comparison endpoint.
    pub fn process_url(&self) -> String {
        format!("{}{}", self.base_url, PROCESS_PATH)
    }
}

fn normalize_url(raw: &str) -> ConfigResult<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) || url.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url.to_string())
}

fn host_port_url(host: &str, port: &str) -> ConfigResult<String> {
    let host = host.trim().trim_end_matches('/');
    let port = port.trim();
    if port.parse::<u16>().is_err() {
        return Err(ConfigError::InvalidUrl(format!("{}:{}", host, port)));
    }
    if host.contains("://") {
        normalize_url(&format!("{}:{}", host, port))
    } else {
        normalize_url(&format!("http://{}:{}", host, port))
    }
}

fn parse_timeout(raw: &str) -> ConfigResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
