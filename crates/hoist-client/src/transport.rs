//! Async operations against the repository manager's upload API.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use hoist_core::session::{FinalizeRequest, PendingFile};
use hoist_util::errors::HoistError;

use crate::repository::UploadServer;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for talking to the repository manager.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("hoist/0.1")
        .build()
        .map_err(|e| {
            HoistError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// A repository visible to the caller, as reported by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Fetch the repositories the caller may upload into.
///
/// Read-only, so transient failures (connect, timeout, 5xx) are retried a
/// bounded number of times.
pub async fn list_repositories(
    client: &Client,
    server: &UploadServer,
) -> miette::Result<Vec<RepositorySummary>> {
    let url = server.repositories_url();
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        let req = server.authenticate(client.get(&url));
        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(server_error(&url, resp).await.into());
                }
                return resp.json::<Vec<RepositorySummary>>().await.map_err(|e| {
                    HoistError::Network {
                        message: format!("Failed to read repository list from {url}: {e}"),
                    }
                    .into()
                });
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(HoistError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(HoistError::Network {
        message: format!("Failed after {MAX_RETRIES} retries for {url}: {last_err}"),
    }
    .into())
}

/// Drop the server-side staging area. Issued at the start of every upload
/// run so leftovers from an abandoned session are never committed.
pub async fn clear_staged(client: &Client, server: &UploadServer) -> miette::Result<()> {
    let url = server.clear_url();
    debug!(%url, "clearing staged files");
    expect_success(&url, server.authenticate(client.get(&url))).await
}

/// Stage a single file: multipart POST with the file part plus
/// `classifier` and `descriptor` text fields.
pub async fn stage_file(
    client: &Client,
    server: &UploadServer,
    path: &Path,
    pending: &PendingFile,
) -> miette::Result<()> {
    let bytes = tokio::fs::read(path).await.map_err(HoistError::Io)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string());

    let part = multipart::Part::bytes(bytes).file_name(file_name.clone());
    let mut form = multipart::Form::new().part("file", part).text(
        "descriptor",
        if pending.is_descriptor { "true" } else { "false" },
    );
    if let Some(classifier) = &pending.classifier {
        form = form.text("classifier", classifier.clone());
    }

    let url = server.stage_url();
    debug!(%url, file = %file_name, classifier = ?pending.classifier, "staging file");
    expect_success(&url, server.authenticate(client.post(&url)).multipart(form)).await
}

/// Commit the staged files under the request's coordinate. Single-shot:
/// no retries for the mutating call.
pub async fn finalize(
    client: &Client,
    server: &UploadServer,
    request: &FinalizeRequest,
) -> miette::Result<()> {
    let url = server.finalize_url(request);
    debug!(%url, "finalizing upload");
    expect_success(&url, server.authenticate(client.get(&url))).await
}

/// Send a request and map any non-success outcome to a structured error.
async fn expect_success(url: &str, req: reqwest::RequestBuilder) -> miette::Result<()> {
    let resp = req.send().await.map_err(|e| HoistError::Network {
        message: format!("Request to {url} failed: {e}"),
    })?;

    if !resp.status().is_success() {
        return Err(server_error(url, resp).await.into());
    }
    Ok(())
}

/// Shape a non-success response into `HoistError::Server`, preferring the
/// message carried in the JSON error body.
async fn server_error(url: &str, resp: Response) -> HoistError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = extract_error_message(&body)
        .unwrap_or_else(|| format!("{} (from {url})", summarize_body(&body)));
    HoistError::Server { status, message }
}

/// Pull a human-readable message out of a JSON error body.
///
/// Accepts either `{"message": "..."}` or
/// `{"errorMessages": ["..."]}` / `{"errorMessages": [{"errorMessage": "..."}]}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }

    let first = value.get("errorMessages")?.as_array()?.first()?;
    match first {
        serde_json::Value::String(s) => Some(s.clone()),
        other => other
            .get("errorMessage")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string()),
    }
}

fn summarize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_string();
    }
    let mut summary: String = trimmed.chars().take(200).collect();
    if summary.len() < trimmed.len() {
        summary.push_str("...");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_from_message_field() {
        let body = r#"{"message": "Version 2.0 already exists"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Version 2.0 already exists")
        );
    }

    #[test]
    fn error_message_from_string_array() {
        let body = r#"{"errorMessages": ["artifact already deployed", "second"]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("artifact already deployed")
        );
    }

    #[test]
    fn error_message_from_object_array() {
        let body = r#"{"errorMessages": [{"errorKey": "dup", "errorMessage": "duplicate upload"}]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("duplicate upload")
        );
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn summarize_body_truncates() {
        let long = "x".repeat(500);
        let summary = summarize_body(&long);
        assert!(summary.ends_with("..."));
        assert!(summary.len() <= 203);
    }

    #[test]
    fn repository_summary_deserializes_with_and_without_name() {
        let body = r#"[{"id": "internal", "name": "Internal Releases"}, {"id": "snapshots"}]"#;
        let repos: Vec<RepositorySummary> = serde_json::from_str(body).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id, "internal");
        assert_eq!(repos[0].name.as_deref(), Some("Internal Releases"));
        assert!(repos[1].name.is_none());
    }
}
