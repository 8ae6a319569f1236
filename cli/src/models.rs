//! Wire types of the plagium core comparison endpoint.
//!
//! ```json
//! { "report": [ { "file1": "a.py", "file2": "b.py", "similarity": 87.456 } ] }
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One pairwise similarity result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub file1: String,
    pub file2: String,
    /// Percentage between 0 and 100, computed by the core
    pub similarity: f64,
}

impl ReportEntry {
    /// Similarity rounded to two decimals, ties away from zero, with a `%` suffix.
    pub fn display_percentage(&self) -> String {
        format!("{:.2}%", (self.similarity * 100.0).round() / 100.0)
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} -> {}", self.file1, self.file2, self.display_percentage())
    }
}

/// Body returned by `POST /v1.1/process`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub report: Vec<ReportEntry>,
}

impl ProcessResponse {
    /// Highest similarity in the report, if any.
    pub fn max_similarity(&self) -> Option<f64> {
        self.report.iter().map(|e| e.similarity).reduce(f64::max)
    }
}

/// A local file selected for submission.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Path on disk
    pub path: PathBuf,
    /// Base name sent as the multipart file name
    pub name: String,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = ReportEntry {
            file1: "a.py".into(),
            file2: "b.py".into(),
            similarity: 87.456,
        };
        assert_eq!(entry.to_string(), "a.py - b.py -> 87.46%");
    }

    #[test]
    fn test_entry_display_rounds_ties_up() {
        let entry = |similarity| ReportEntry {
            file1: "a.py".into(),
            file2: "b.py".into(),
            similarity,
        };
        assert_eq!(entry(0.125).to_string(), "a.py - b.py -> 0.13%");
        assert_eq!(entry(87.625).to_string(), "a.py - b.py -> 87.63%");
        assert_eq!(entry(12.125).display_percentage(), "12.13%");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"report": [
            {"file1": "a.py", "file2": "b.py", "similarity": 12.5},
            {"file1": "a.py", "file2": "c.py", "similarity": 100}
        ]}"#;
        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.report.len(), 2);
        assert_eq!(response.max_similarity(), Some(100.0));
        assert_eq!(ProcessResponse::default().max_similarity(), None);
    }

    #[test]
    fn test_source_file_name() {
        let file = SourceFile::new(PathBuf::from("/tmp/project/main.py"));
        assert_eq!(file.name, "main.py");
    }
}
