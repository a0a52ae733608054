//! Image generation for recipes that arrive without a photo.
//!
//! Failures of any kind are logged and surfaced as "no image"; a missing
//! thumbnail is a normal state that downstream rendering already handles
//! with a placeholder.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ImageConfig;
use crate::error::EngineError;

/// Text-to-image backend; `None` means no image, for any reason.
#[async_trait]
pub trait ImageClient: Send + Sync {
    async fn generate(&self, subject: &str) -> Option<String>;
}

/// Turn a dish name into a food-photography brief.
fn plated_dish_prompt(subject: &str) -> String {
    format!(
        "Professional food photography of {subject}. The dish is beautifully plated on an \
         elegant ceramic plate or rustic wooden board, captured from a 45-degree angle or \
         overhead perspective. The lighting is soft and natural, highlighting the textures \
         and colors of the food. The background is intentionally blurred with warm, inviting \
         tones. Garnishes and ingredients are artfully arranged, and there's a slight steam \
         or moisture visible if the dish is hot. The image style is clean, modern, and \
         appetizing, suitable for a high-end restaurant menu or food magazine."
    )
}

/// xAI image generation client (`/v1/images/generations`).
pub struct XaiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl XaiImageClient {
    /// Create a client from configuration, falling back to the XAI_API_KEY
    /// environment variable for the key.
    pub fn new(config: &ImageConfig) -> Result<Self, EngineError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("XAI_API_KEY").ok())
            .ok_or_else(|| EngineError::MissingApiKey("xai".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.x.ai".to_string());

        Ok(XaiImageClient {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        XaiImageClient {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    async fn request_image(&self, prompt: &str) -> Result<String, EngineError> {
        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "n": 1,
                "response_format": "url"
            }))
            .send()
            .await?;

        let body: Value = response.json().await?;
        if let Some(revised) = body["data"][0]["revised_prompt"].as_str() {
            debug!("image prompt revised to: {revised}");
        }
        body["data"][0]["url"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                EngineError::MalformedResponse("image generation carried no url".to_string())
            })
    }
}

#[async_trait]
impl ImageClient for XaiImageClient {
    async fn generate(&self, subject: &str) -> Option<String> {
        match self.request_image(&plated_dish_prompt(subject)).await {
            Ok(url) => Some(url),
            Err(err) => {
                warn!("image generation for {subject:?} failed: {err}");
                None
            }
        }
    }
}
