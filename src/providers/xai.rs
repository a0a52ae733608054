use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::EngineError;
use crate::providers::ChatProvider;

/// xAI chat provider. The wire format is OpenAI-compatible; only the host,
/// key source, and model family differ.
pub struct XaiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl XaiProvider {
    /// Create a provider from configuration, falling back to the
    /// XAI_API_KEY environment variable for the key.
    pub fn new(config: &ProviderConfig) -> Result<Self, EngineError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("XAI_API_KEY").ok())
            .ok_or_else(|| EngineError::MissingApiKey("xai".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.x.ai".to_string());

        Ok(XaiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        XaiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl ChatProvider for XaiProvider {
    fn provider_name(&self) -> &str {
        "xai"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, EngineError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": system_prompt},
                    {"role": "user", "content": user_prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let body: Value = response.json().await?;
        debug!("{:?}", body);
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                EngineError::MalformedResponse(
                    "chat completion carried no message content".to_string(),
                )
            })
    }
}
