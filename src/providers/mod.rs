//! Generative text backends: one trait seam, OpenAI-compatible wire
//! implementations, and a factory keyed by configuration.

mod factory;
mod open_ai;
mod prompt;
mod xai;

pub use factory::ProviderFactory;
pub use open_ai::OpenAiProvider;
pub use prompt::{ingredient_prompt, preference_prompt, CHEF_SYSTEM_PROMPT};
pub use xai::XaiProvider;

use async_trait::async_trait;

use crate::error::EngineError;

/// Single-turn chat completion backend.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name as used in configuration (e.g. "openai", "xai")
    fn provider_name(&self) -> &str;

    /// Run one system+user exchange and return the model's text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, EngineError>;
}
