use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use crate::config::ProviderConfig;
use crate::models::ChatMessage;

use super::LlmProvider;

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 1500;

/// Any provider speaking the OpenAI `chat/completions` dialect (Groq,
/// OpenRouter).
pub struct OpenAiCompatProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    pub fn new(config: ProviderConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn chat(&self, system_prompt: &str, messages: &[ChatMessage]) -> anyhow::Result<String> {
        let name = &self.config.name;
        let Some(api_key) = self.config.api_key.as_deref() else {
            anyhow::bail!("{name} API key not configured");
        };

        let mut chat_messages = vec![json!({
            "role": "system",
            "content": system_prompt,
        })];

        for msg in messages {
            chat_messages.push(json!({
                "role": msg.role.as_str(),
                "content": msg.content,
            }));
        }

        let body = json!({
            "model": self.config.model,
            "messages": chat_messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "stream": false,
        });

        let mut request = self
            .client
            .post(&self.config.url)
            .bearer_auth(api_key)
            .json(&body);
        for (key, value) in &self.config.extra_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let resp = request
            .send()
            .await
            .with_context(|| format!("failed to call {name} API"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("{name} API error ({status}): {text}");
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .with_context(|| format!("failed to parse {name} response"))?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing content in {name} response"))
    }
}
