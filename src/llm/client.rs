// src/llm/client.rs

use std::time::Duration;

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::config::AiSettings;
use crate::llm::prompt::LlmPrompt;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One completion request: the instruction plus the model knobs.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a LlmPrompt,
    pub settings: &'a AiSettings,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key cannot be empty")]
    MissingApiKey,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("LLM error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parse failure: {0}")]
    Parse(String),
}

/// The external completion service, seen as a black box.
pub trait CompletionService {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

/// OpenAI-compatible chat completions client.
pub struct LlmClient {
    cfg: ProviderConfig,
    http: reqwest::blocking::Client,
}

impl LlmClient {
    /// A blank key is accepted here and reported on each call instead, so a
    /// run with nothing to generate never needs credentials.
    pub fn new(cfg: ProviderConfig) -> Result<Self, LlmError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        Ok(Self { cfg, http })
    }

    fn url(&self) -> &str {
        self.cfg.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl CompletionService for LlmClient {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        if self.cfg.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let body = build_body(request);
        debug!(
            "POST {} model={} prompt={}",
            self.url(),
            request.settings.model,
            request.prompt.hash()
        );

        let resp = self
            .http
            .post(self.url())
            .bearer_auth(&self.cfg.api_key)
            .json(&body)
            .send()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| LlmError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: Value =
            serde_json::from_str(&text).map_err(|e| LlmError::Parse(e.to_string()))?;
        extract_text(&json)
    }
}

/* ============================================================
   Wire format
   ============================================================ */

fn build_body(request: &CompletionRequest<'_>) -> Value {
    let s = request.settings;
    serde_json::json!({
        "model": s.model,
        "messages": [
            { "role": "user", "content": request.prompt.user }
        ],
        "temperature": s.temperature,
        "max_tokens": s.max_tokens,
        "seed": s.seed,
    })
}

/// A missing or null `content` is an empty completion, not a parse error.
fn extract_text(v: &Value) -> Result<String, LlmError> {
    let message = v
        .pointer("/choices/0/message")
        .ok_or_else(|| LlmError::Parse("no choices in response".into()))?;

    match message.get("content") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Ok(String::new()),
        Some(other) => Err(LlmError::Parse(format!("unexpected content: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::prompt::LlmPrompt;
    use serde_json::json;

    #[test]
    fn body_carries_model_settings_and_single_user_message() {
        let prompt = LlmPrompt { user: "write tests".into() };
        let settings = AiSettings::default();
        let body = build_body(&CompletionRequest {
            prompt: &prompt,
            settings: &settings,
        });

        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["temperature"], 0.1);
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["seed"], 12345);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "write tests");
    }

    #[test]
    fn extracts_first_choice_content() {
        let v = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "def test_x(): pass" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(extract_text(&v).unwrap(), "def test_x(): pass");
    }

    #[test]
    fn null_content_is_empty() {
        let v = json!({ "choices": [ { "message": { "content": null } } ] });
        assert_eq!(extract_text(&v).unwrap(), "");
    }

    #[test]
    fn missing_choices_is_parse_error() {
        let v = json!({ "error": { "message": "nope" } });
        assert!(matches!(extract_text(&v), Err(LlmError::Parse(_))));
    }

    #[test]
    fn empty_api_key_fails_each_call_without_network() {
        let client = LlmClient::new(ProviderConfig {
            api_key: "   ".into(),
            base_url: Some("http://127.0.0.1:9/never".into()),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        let prompt = LlmPrompt { user: "x".into() };
        let settings = AiSettings::default();
        let got = client.complete(&CompletionRequest {
            prompt: &prompt,
            settings: &settings,
        });
        assert!(matches!(got, Err(LlmError::MissingApiKey)));
    }
}
