//! Report rendering for the terminal.

use clap::ValueEnum;

use crate::error::{CliError, CliResult};
use crate::models::ProcessResponse;

/// Output format of the `process` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `a - b -> NN.NN%` line per pair
    #[default]
    Table,
    /// Pretty printed response body
    Json,
    /// `file1,file2,similarity` rows
    Csv,
}

/// Render a report in the requested format.
pub fn render(response: &ProcessResponse, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(response)),
        OutputFormat::Json => serde_json::to_string_pretty(response)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| CliError::Output(e.to_string())),
        OutputFormat::Csv => render_csv(response),
    }
}

fn render_table(response: &ProcessResponse) -> String {
    if response.report.is_empty() {
        return "No results\n".to_string();
    }

    let mut out = String::from("Report:\n");
    for entry in &response.report {
        out.push_str(&format!("  {}\n", entry));
    }
    out
}

fn render_csv(response: &ProcessResponse) -> CliResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["file1", "file2", "similarity"])
        .map_err(|e| CliError::Output(e.to_string()))?;
    for entry in &response.report {
        writer
            .write_record([
                entry.file1.as_str(),
                entry.file2.as_str(),
                entry.similarity.to_string().as_str(),
            ])
            .map_err(|e| CliError::Output(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Output(e.to_string()))
}
