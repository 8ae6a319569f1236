//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Form Types** - File input slots
//! - **API Types** - Plagium core response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Form Types
// =============================================================================

/// One labeled file input of the comparison form.
///
/// Slots are numbered from 1; the number drives the label, the element
/// id and the multipart field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileSlot {
    index: usize,
}

impl FileSlot {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// 1-based position on the form.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Form field name and element id, e.g. `file-3`.
    pub fn field_name(&self) -> String {
        format!("file-{}", self.index)
    }

    /// Visible label, e.g. `File 3`.
    pub fn label(&self) -> String {
        format!("File {}", self.index)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// One pairwise similarity result returned by the plagium core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Name of the first file of the pair
    pub file1: String,
    /// Name of the second file of the pair
    pub file2: String,
    /// Similarity percentage (0-100)
    pub similarity: f64,
}

impl ReportEntry {
    /// CSS width of the progress bar, the raw value with a `%` suffix.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.similarity)
    }

    /// Inline style of the progress bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}", self.bar_width())
    }

    /// Text shown inside the bar, rounded to two decimals with ties away
    /// from zero.
    pub fn display_percentage(&self) -> String {
        format!("{:.2}%", (self.similarity * 100.0).round() / 100.0)
    }

    /// Similarity clamped to the progress bar range.
    pub fn clamped(&self) -> f64 {
        if self.similarity.is_nan() {
            return 0.0;
        }
        self.similarity.clamp(0.0, 100.0)
    }
}

/// Response from the `/v1.1/process` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Ordered list of compared pairs
    pub report: Vec<ReportEntry>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// The form could not be serialized.
    Form(String),
    /// Network/HTTP transport error.
    Network(String),
    /// The core answered with a non-success status.
    Server { status: u16, body: String },
    /// The response body was not a valid report.
    Parse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Form(msg) => write!(f, "Form error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, body } => write!(f, "Server error ({}): {}", status, body),
            AppError::Parse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
