//! Anthropic Messages API client.

use std::time::Duration;

use lp_config::AnthropicConfig;
use serde::{Deserialize, Serialize};

use super::http::check_response;
use super::{Completion, CompletionProvider, CompletionRequest, TokenUsage};
use crate::error::ProviderError;

/// [`CompletionProvider`] backed by `POST {base_url}/v1/messages`.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_version: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

impl AnthropicClient {
    /// Build a client from the `[anthropic]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] when no API key is set, or
    /// [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AnthropicConfig) -> Result<Self, ProviderError> {
        if !config.is_configured() {
            return Err(ProviderError::NotConfigured(
                "anthropic.api_key is empty (set ANTHROPIC_API_KEY)".into(),
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

impl CompletionProvider for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let body = MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            messages: [UserMessage {
                role: "user",
                content: &request.instruction,
            }],
        };

        tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "anthropic request");
        let resp = self
            .http
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await?;
        let data: MessagesResponse = check_response(resp).await?.json().await?;

        let text: String = data
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }

        let usage = data.usage.map(|u| TokenUsage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
        });
        if let Some(usage) = usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "anthropic usage"
            );
        }

        Ok(Completion {
            text,
            model: data.model.unwrap_or_else(|| request.model.clone()),
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_key_is_rejected() {
        let err = AnthropicClient::new(&AnthropicConfig::default()).unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AnthropicClient::new(&AnthropicConfig {
            api_key: "sk-ant-test".into(),
            base_url: "http://localhost:9999/".into(),
            ..AnthropicConfig::default()
        })
        .unwrap();
        assert_eq!(client.messages_url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn request_body_shape() {
        let body = MessagesRequest {
            model: "claude-3-5-haiku-20241022",
            max_tokens: 500,
            messages: [UserMessage {
                role: "user",
                content: "Score this prospect",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-3-5-haiku-20241022");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Score this prospect");
    }
}
