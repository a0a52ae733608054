use crate::config::{AiConfig, ProviderConfig};
use crate::error::EngineError;
use crate::providers::{ChatProvider, OpenAiProvider, XaiProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration.
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn ChatProvider>, EngineError> {
        if !config.enabled {
            return Err(EngineError::ProviderDisabled(provider_name.to_string()));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAiProvider::new(config)?)),
            "xai" => Ok(Box::new(XaiProvider::new(config)?)),
            other => Err(EngineError::UnknownProvider(other.to_string())),
        }
    }

    /// Get the default provider from configuration.
    pub fn default_provider(config: &AiConfig) -> Result<Box<dyn ChatProvider>, EngineError> {
        let name = &config.default_provider;
        let provider_config = config
            .providers
            .get(name)
            .ok_or_else(|| EngineError::UnknownProvider(name.clone()))?;

        Self::create(name, provider_config)
    }

    /// List all provider names the factory can build.
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "xai"]
    }
}
