//! Application configuration.
//!
//! Centralized configuration for the Plagium frontend.
//! Endpoints are compile-time constants; the page is served next to a
//! single plagium core instance.

/// Plagium core API base URL.
pub const BACKEND_URL: &str = "http://localhost:4800";

/// Versioned path of the comparison endpoint.
pub const PROCESS_PATH: &str = "/v1.1/process";

/// Minimum number of file inputs on the form.
///
/// A comparison needs at least one pair.
pub const MIN_SLOTS: usize = 2;

/// File extension accepted by every file input.
pub const ACCEPTED_EXTENSION: &str = ".py";

/// Build the full comparison endpoint URL for a base URL.
pub fn process_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PROCESS_PATH)
}
