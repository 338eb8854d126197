//! Hosted Gemini client for the advisory contract.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::{prompts, AdvisoryGateway};
use crate::error::{Result, WorkshopError};
use crate::models::{Plan, StepId};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fast model for the per-step advisories.
const ADVISORY_MODEL: &str = "gemini-3-flash-preview";

/// Stronger model for the one-shot final integration.
const INTEGRATION_MODEL: &str = "gemini-3-pro-preview";

/// Defensive cap; the service behavior specifies no timeout of its own.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Client for the hosted `generateContent` API.
///
/// Construction never fails: a missing credential is reported on first use as
/// a distinct configuration error, so the workshop stays fully usable for
/// entry, navigation, and export without a key.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiGateway {
    /// Creates a client with an explicit credential (or none).
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }

    /// Overrides the service base URL (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, model: &str, prompt: String) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(WorkshopError::configuration(
                "the GEMINI_API_KEY environment variable is not set",
            ));
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
        });

        debug!("advisory request to {model}, prompt {} bytes", prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| WorkshopError::transport("request failed", source))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WorkshopError::Service {
                status: status.as_u16(),
                message: truncate(&message, 200),
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|source| WorkshopError::transport("malformed response body", source))?;

        let text = extract_text(&json);
        debug!("advisory response {} bytes", text.len());
        Ok(text)
    }
}

#[async_trait]
impl AdvisoryGateway for GeminiGateway {
    async fn step_advisory(&self, step: StepId, plan: &Plan) -> Result<String> {
        let prompt = prompts::advisory_prompt(step, plan)?;
        self.generate(ADVISORY_MODEL, prompt).await
    }

    async fn final_integration(&self, plan: &Plan) -> Result<String> {
        let prompt = prompts::integration_prompt(plan)?;
        self.generate(INTEGRATION_MODEL, prompt).await
    }
}

/// Joins the text parts of the first candidate. An empty result is a valid
/// soft-failure outcome handled by the caller, never an error here.
fn extract_text(json: &Value) -> String {
    json.get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        text.to_string()
    } else {
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &text[..end])
    }
}
