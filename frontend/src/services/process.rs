//! HTTP service submitting source files to the plagium core.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::{process_url, AppError, AppResult, ProcessResponse};

/// Serialize every field of the form, file inputs included.
pub fn collect_form(form: &HtmlFormElement) -> AppResult<FormData> {
    FormData::new_with_form(form)
        .map_err(|e| AppError::Form(format!("Failed to read form: {:?}", e)))
}

/// POST the multipart payload to `/v1.1/process` and decode the report.
pub async fn submit_files(form_data: FormData, backend_url: &str) -> AppResult<ProcessResponse> {
    let url = process_url(backend_url);
    log::debug!("POST {}", url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    response
        .json::<ProcessResponse>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))
}
