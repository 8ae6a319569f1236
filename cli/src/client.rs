//! HTTP client for the plagium core.
//!
//! Sends every selected file in one multipart request, numbered
//! `file-1..file-N` like the web form, and decodes the report.

use reqwest::multipart::{Form, Part};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{ProcessResponse, SourceFile};

/// Multipart field name of the file at `position` (0-based).
pub fn field_name(position: usize) -> String {
    format!("file-{}", position + 1)
}

/// Plagium core client.
#[derive(Clone)]
pub struct PlagiumClient {
    http: reqwest::Client,
    config: Config,
}

impl PlagiumClient {
    pub fn new(config: Config) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the files and build the multipart body.
    pub async fn build_form(files: &[SourceFile]) -> ClientResult<Form> {
        let mut form = Form::new();
        for (i, file) in files.iter().enumerate() {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| ClientError::Read {
                    path: file.path.clone(),
                    source,
                })?;
            let part = Part::bytes(bytes).file_name(file.name.clone());
            form = form.part(field_name(i), part);
        }
        Ok(form)
    }

    /// Submit files for comparison.
    pub async fn process(&self, files: &[SourceFile]) -> ClientResult<ProcessResponse> {
        let url = self.config.process_url();
        let form = Self::build_form(files).await?;

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Connection { url: url.clone() }
                } else {
                    ClientError::Http(e)
                }
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
