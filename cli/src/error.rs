//! Error types for the Plagium command line client.
//!
//! - [`ConfigError`] - Invalid environment or flag values
//! - [`CollectError`] - Source file discovery errors
//! - [`ClientError`] - HTTP round trip errors
//! - [`CliError`] - Top-level errors returned by commands
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL without an http(s) scheme.
    #[error("Invalid core URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    /// Only one of `CORE_HOST` / `CORE_PORT` is set.
    #[error("CORE_HOST and CORE_PORT must be set together")]
    IncompleteHostPort,

    /// Timeout is not a positive number of seconds.
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

// =============================================================================
// Collection Errors
// =============================================================================

/// Errors while gathering the files to compare.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Path is neither a directory nor a regular file.
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// `--only` names a file that is not among the candidates.
    #[error("No candidate file named '{0}'")]
    NotSelected(String),

    /// Failed to read a directory or file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A comparison needs at least two files.
    #[error("Found {found} matching file(s), at least 2 are required")]
    NotEnoughFiles { found: usize },
}

// =============================================================================
// Client Errors
// =============================================================================

/// Errors from the plagium core round trip.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The core could not be reached.
    #[error("No connection to the plagium core at {url}. Check that the server is running")]
    Connection { url: String },

    /// Transport failure other than connecting.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Body is not a valid report.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Failed to read a file before upload.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level command errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Collect(#[from] CollectError),

    #[error("{0}")]
    Client(#[from] ClientError),

    /// Report could not be rendered.
    #[error("Output error: {0}")]
    Output(String),

    /// Failed to write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type CollectResult<T> = Result<T, CollectError>;

pub type ClientResult<T> = Result<T, ClientError>;

pub type CliResult<T> = Result<T, CliError>;
