//! # Plagium - command line client for the plagium core
//!
//! Collects source files from local directories, submits them to the
//! plagium core comparison endpoint and renders the similarity report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Directories │────▶│   Collect   │────▶│   Client    │────▶│   Output    │
//! │   (*.py)    │     │ filter+sort │     │ (multipart) │     │ table/json  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plagium::{collect_comparable, Config, PlagiumClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let files = collect_comparable(&["src".into()], &[".py".into()]).unwrap();
//!     let client = PlagiumClient::new(Config::from_env().unwrap()).unwrap();
//!     let response = client.process(&files).await.unwrap();
//!     println!("{} pairs compared", response.report.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Environment and flag resolution
//! - [`models`] - Wire types and local file handles
//! - [`collect`] - Source file discovery
//! - [`client`] - Multipart HTTP client
//! - [`output`] - Report rendering

pub mod error;
pub mod config;
pub mod models;
pub mod collect;
pub mod client;
pub mod output;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    CliError, CliResult,
    ClientError, ClientResult,
    CollectError, CollectResult,
    ConfigError, ConfigResult,
};

pub use config::{Config, DEFAULT_EXTENSION, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, PROCESS_PATH};

pub use models::{ProcessResponse, ReportEntry, SourceFile};

pub use collect::{collect_comparable, collect_files, collect_selected, normalize_extensions, select_files};

pub use client::{field_name, PlagiumClient};

pub use output::{render, OutputFormat};
