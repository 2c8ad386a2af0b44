//! Icon generation client
//!
//! Sends a (prompt, style) pair to the generation service and returns the
//! decoded icon set. One attempt per call; retrying is the caller's call.

use async_trait::async_trait;
use serde::Serialize;

use crate::core::{GeneratedIconSet, GenerationError, IconStyle};

/// Request path on the generation service
const GENERATE_PATH: &str = "/api/generate-icons";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Seam for the remote generation call, so the controller can run against
/// a stub in tests
#[async_trait]
pub trait IconGenerator: Send + Sync {
    /// Generate a complete icon set for the given prompt and style
    async fn generate(
        &self,
        prompt: &str,
        style: IconStyle,
    ) -> Result<GeneratedIconSet, GenerationError>;
}

/// Wire format of the generation request body
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    style: &'a str,
}

/// HTTP implementation of [`IconGenerator`]
pub struct HttpIconClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIconClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH)
    }
}

#[async_trait]
impl IconGenerator for HttpIconClient {
    async fn generate(
        &self,
        prompt: &str,
        style: IconStyle,
    ) -> Result<GeneratedIconSet, GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::InvalidPrompt);
        }

        let url = self.endpoint();
        tracing::debug!(%url, %style, "requesting icon set");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                prompt,
                style: style.wire_name(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), &body));
        }

        let icons: GeneratedIconSet = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        tracing::info!(assets = icons.asset_count(), "icon set generated");
        Ok(icons)
    }
}

/// Build a typed error from a non-success response, preferring the
/// service's own message over the status line
fn error_from_response(status: u16, body: &str) -> GenerationError {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            if !message.is_empty() {
                return GenerationError::Server(message.to_string());
            }
        }
    }
    GenerationError::Http { status }
}
