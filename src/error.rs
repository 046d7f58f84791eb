use thiserror::Error;

/// Errors that can occur while searching recipes or requesting advice
///
/// Public entry points such as [`crate::IngredientSearch::search`] and
/// [`crate::NutritionAdvisor::analyze_recipe`] never return these; they collapse
/// them into an empty result or a placeholder string. The `try_*` variants and
/// the lower-level clients expose them.
#[derive(Error, Debug)]
pub enum MiseError {
    /// Request failed in transport or its body could not be decoded
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The text-generation service answered with an error object
    #[error("API error ({kind}): {message}")]
    ApiError { kind: String, message: String },

    /// A response parsed but did not carry the expected content
    #[error("Missing content: {0}")]
    MissingContent(String),

    /// No API key was supplied through configuration or environment
    #[error("ANTHROPIC_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
