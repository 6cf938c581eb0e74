//! Styling backend client.
//!
//! Async HTTP client using `reqwest` multipart uploads. One request per
//! call, no retries, transport-default timeouts.

use pupstyle_intake::SelectedFile;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::types::StyleOptions;

const GENERATE_PATH: &str = "/api/generate";

/// Errors from a generation or artifact fetch.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned invalid JSON")]
    InvalidResponseFormat,

    #[error("server error {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("response did not include an image URL")]
    MissingArtifact { message: Option<String> },
}

impl GenerationError {
    /// Message supplied by the backend in the `error` field, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } | Self::MissingArtifact { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Styling backend client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL.
    ///
    /// An empty base URL produces relative request paths, which fail at
    /// send time with [`GenerationError::Network`].
    pub fn new(base_url: &str) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the generate endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    /// Uploads the photo with its style choices and returns the image URL.
    pub async fn generate(
        &self,
        file: &SelectedFile,
        style: &StyleOptions,
    ) -> Result<String, GenerationError> {
        let url = self.endpoint();
        let form = build_form(file, style)?;

        tracing::info!(
            endpoint = %url,
            file = file.name(),
            size = file.size(),
            "requesting generation"
        );

        let resp = self.http.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let result = interpret(status, &body);
        match &result {
            Ok(image_url) => tracing::info!(%status, %image_url, "generation succeeded"),
            Err(e) => tracing::warn!(%status, error = %e, "generation failed"),
        }
        result
    }

    /// Downloads the bytes of a generated image.
    pub async fn fetch_artifact(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GenerationError::Server {
                status: status.as_u16(),
                message: None,
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Builds the multipart body: `file` plus one text field per style choice.
fn build_form(file: &SelectedFile, style: &StyleOptions) -> Result<Form, GenerationError> {
    let part = Part::bytes(file.bytes().to_vec())
        .file_name(file.name().to_string())
        .mime_str(file.content_type())?;

    let mut form = Form::new().part("file", part);
    for (key, value) in style.fields() {
        form = form.text(key, value.to_string());
    }
    Ok(form)
}

/// Classifies a response. The body is parsed before the status is checked,
/// so a non-JSON body is always `InvalidResponseFormat`.
fn interpret(status: StatusCode, body: &str) -> Result<String, GenerationError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|_| GenerationError::InvalidResponseFormat)?;

    let message = parsed
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned);

    if !status.is_success() {
        return Err(GenerationError::Server {
            status: status.as_u16(),
            message,
        });
    }

    match parsed.get("image_url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => Ok(url.to_owned()),
        _ => Err(GenerationError::MissingArtifact { message }),
    }
}
