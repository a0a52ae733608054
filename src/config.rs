use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe corpus API settings
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Fuzzy ingredient matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Generative text provider settings
    #[serde(default)]
    pub ai: AiConfig,
    /// Image generation settings
    #[serde(default)]
    pub images: ImageConfig,
}

/// Settings for the recipe corpus client.
#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    /// Base URL of the corpus API
    #[serde(default = "default_corpus_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            base_url: default_corpus_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for fuzzy ingredient matching.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MatchingConfig {
    /// Maximum edit distance still treated as an ingredient match.
    /// Tolerance for minor misspellings and pluralization ("chiken",
    /// "tomatos").
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

/// Generative text configuration: which provider to use by default and the
/// per-provider settings.
#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// Provider used when the caller doesn't name one
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            default_provider: default_provider(),
            providers: HashMap::new(),
        }
    }
}

/// Configuration for a specific chat provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider may be constructed
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g. "grok-3-mini", "gpt-4o-mini")
    pub model: String,
    /// Sampling temperature (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key; falls back to the provider's environment variable when unset
    pub api_key: Option<String>,
    /// Override for the API base URL (proxies, test servers)
    pub base_url: Option<String>,
}

/// Configuration for the image generation client.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Whether generated recipes get generated images
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Image model identifier
    #[serde(default = "default_image_model")]
    pub model: String,
    /// API key; falls back to XAI_API_KEY when unset
    pub api_key: Option<String>,
    /// Override for the API base URL
    pub base_url: Option<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            enabled: default_enabled(),
            model: default_image_model(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions

fn default_corpus_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_edit_distance() -> usize {
    2
}

fn default_provider() -> String {
    "xai".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_image_model() -> String {
    "grok-2-image".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with MEALMATCH__ prefix
    /// 2. config.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALMATCH__AI__PROVIDERS__XAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nesting: MEALMATCH__CORPUS__BASE_URL
            .add_source(
                Environment::with_prefix("MEALMATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
