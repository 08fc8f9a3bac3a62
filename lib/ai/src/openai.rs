//! OpenAI-compatible chat completions backend.
//!
//! Talks directly to the `/v1/chat/completions` REST endpoint with bearer
//! authentication. Any server speaking the same protocol works through
//! `LlmProvider::OpenAiCompatible` with an overridden base URL.

use crate::backend::{LlmBackend, LlmBackendConfig, LlmProvider, LlmRequest, LlmResponse, TokenUsage};
use crate::error::LlmError;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default outbound request timeout.
///
/// A hung provider call would otherwise block the caller indefinitely.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Backend implementation for OpenAI-compatible chat APIs.
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    config: LlmBackendConfig,
}

impl OpenAiBackend {
    /// Creates a backend with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidConfig` if the API key is absent/blank or
    /// the HTTP client cannot be constructed.
    pub fn new(config: LlmBackendConfig) -> Result<Self, LlmError> {
        Self::with_timeout(config, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a backend with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidConfig` if the API key is absent/blank or
    /// the HTTP client cannot be constructed.
    pub fn with_timeout(config: LlmBackendConfig, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::InvalidConfig {
                reason: "api key is required".to_string(),
            })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::InvalidConfig {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn provider_label(&self) -> &'static str {
        match self.config.provider {
            LlmProvider::OpenAi => "openai",
            LlmProvider::OpenAiCompatible => "openai_compatible",
        }
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = request.prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(self.provider_label(), &e))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body_text, retry_after));
        }

        let parsed: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| LlmError::ResponseParseFailed {
                    reason: e.to_string(),
                })?;

        let usage = parsed
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        let model = parsed
            .model
            .unwrap_or_else(|| self.config.model.clone());

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::ResponseParseFailed {
                reason: "response contained no message content".to_string(),
            })?;

        tracing::debug!(
            model = %model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "chat completion succeeded"
        );

        Ok(LlmResponse {
            content,
            usage,
            model,
        })
    }

    fn provider(&self) -> LlmProvider {
        self.config.provider
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn map_transport_error(provider: &str, err: &reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout
    } else if err.is_connect() {
        LlmError::ProviderUnavailable {
            provider: provider.to_string(),
            reason: err.to_string(),
        }
    } else {
        LlmError::RequestFailed {
            reason: err.to_string(),
        }
    }
}

fn map_http_error(status: StatusCode, body: &str, retry_after: Option<u64>) -> LlmError {
    // Prefer the structured error message the API returns; fall back to the
    // raw body for non-conforming servers.
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return LlmError::RateLimited {
            retry_after_secs: retry_after,
        };
    }

    LlmError::RequestFailed {
        reason: format!("HTTP {}: {}", status.as_u16(), message),
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<u64> {
    // Retry-After HTTP-date form is not handled, only delay seconds.
    header?.to_str().ok()?.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_rejects_missing_api_key() {
        let mut config = LlmBackendConfig::openai("sk-test", "gpt-3.5-turbo");
        config.api_key = None;

        let result = OpenAiBackend::new(config);
        assert!(matches!(result, Err(LlmError::InvalidConfig { .. })));
    }

    #[test]
    fn constructor_rejects_blank_api_key() {
        let config = LlmBackendConfig::openai("   ", "gpt-3.5-turbo");
        let result = OpenAiBackend::new(config);
        assert!(matches!(result, Err(LlmError::InvalidConfig { .. })));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let config =
            LlmBackendConfig::openai_compatible("http://localhost:8080/", "key", "local-model");
        let backend = OpenAiBackend::new(config).expect("backend");
        assert_eq!(
            backend.endpoint(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn request_serialization_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a CI/CD assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: "Review this pipeline.",
                },
            ],
            temperature: Some(0.5),
            max_tokens: None,
        };

        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Review this pipeline.");
        assert_eq!(json["temperature"], 0.5);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn response_deserialization() {
        let raw = r#"{
            "model": "gpt-3.5-turbo-0125",
            "choices": [{"message": {"role": "assistant", "content": "Looks good."}}],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(parsed.model.as_deref(), Some("gpt-3.5-turbo-0125"));
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Looks good.")
        );
        assert_eq!(parsed.usage.as_ref().map(|u| u.prompt_tokens), Some(42));
    }

    #[test]
    fn http_error_extracts_api_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err = map_http_error(StatusCode::UNAUTHORIZED, body, None);

        match err {
            LlmError::RequestFailed { reason } => {
                assert!(reason.contains("401"));
                assert!(reason.contains("Incorrect API key provided"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn http_429_maps_to_rate_limited() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "slow down", Some(30));
        assert_eq!(
            err,
            LlmError::RateLimited {
                retry_after_secs: Some(30)
            }
        );
    }

    #[test]
    fn retry_after_parses_delay_seconds() {
        let header = HeaderValue::from_static("15");
        assert_eq!(parse_retry_after(Some(&header)), Some(15));

        let date = HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&date)), None);
    }
}
