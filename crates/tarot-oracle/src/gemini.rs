//! Gemini client.
//!
//! Calls the `generateContent` endpoint with the request's persona as the
//! system instruction and its prompt as a single user turn.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::interpreter::Interpreter;
use crate::request::InterpretationRequest;

/// Interpreter backed by the Gemini API.
pub struct GeminiInterpreter {
    config: OracleConfig,
    client: reqwest::Client,
}

impl GeminiInterpreter {
    /// Create a client from configuration.
    pub fn new(config: OracleConfig) -> OracleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }
}

#[async_trait]
impl Interpreter for GeminiInterpreter {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn interpret(&self, request: &InterpretationRequest) -> OracleResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OracleError::MissingApiKey)?;

        debug!(model = %self.config.model, "sending interpretation request");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest::from(request))
            .send()
            .await
            .map_err(|e| OracleError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| OracleError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            warn!(status, "interpretation service returned an error");
            return Err(parse_http_error(status, &body));
        }

        parse_response(&body)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl From<&InterpretationRequest> for GenerateRequest {
    fn from(request: &InterpretationRequest) -> Self {
        Self {
            system_instruction: Content::text(None, &request.system),
            contents: vec![Content::text(Some("user"), &request.prompt)],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the text of the first candidate.
fn parse_response(body: &str) -> OracleResult<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| OracleError::Parse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    Ok(text)
}

fn parse_http_error(status: u16, body: &str) -> OracleError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    OracleError::Http { status, message }
}
