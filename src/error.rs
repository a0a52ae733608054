use thiserror::Error;

/// Errors that can occur across the recipe engine.
///
/// Remote faults inside the search and discovery pipelines are degraded to
/// empty results rather than returned; these variants cover the operations
/// that keep a `Result` contract (clients, configuration, generation).
#[derive(Error, Debug)]
pub enum EngineError {
    /// HTTP request to a remote collaborator failed
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Provider name not known to the factory
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// Provider exists but is switched off in configuration
    #[error("provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// No API key in configuration or environment
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Remote response decoded but did not carry the expected payload
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Ingredient slot index outside the fixed 1..=20 wire range.
    /// Indicates a caller bug, not an environmental fault.
    #[error("ingredient slot {0} out of range (valid 1..=20)")]
    SlotOutOfRange(usize),

    /// A whole generated batch produced nothing passing the acceptance
    /// checks
    #[error("no valid recipes parsed from generated text")]
    NoRecipesParsed,
}
