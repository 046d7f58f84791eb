use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe database settings
    #[serde(default)]
    pub recipes: RecipeDbConfig,
    /// Text-generation settings for the nutrition advisor
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

/// Configuration for the recipe database (TheMealDB)
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeDbConfig {
    /// Base URL, without trailing slash; `filter.php` and `lookup.php` live under it
    #[serde(default = "default_recipes_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RecipeDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_recipes_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the Anthropic Messages API
#[derive(Debug, Deserialize, Clone)]
pub struct AdvisorConfig {
    /// API key for authentication (can also be set via ANTHROPIC_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_advisor_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0); omitted from requests when unset
    pub temperature: Option<f32>,
    /// Token budget for a single-recipe analysis
    #[serde(default = "default_analysis_max_tokens")]
    pub analysis_max_tokens: u32,
    /// Token budget for a meal plan
    #[serde(default = "default_plan_max_tokens")]
    pub plan_max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_advisor_base_url(),
            model: default_model(),
            temperature: None,
            analysis_max_tokens: default_analysis_max_tokens(),
            plan_max_tokens: default_plan_max_tokens(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_recipes_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_advisor_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_analysis_max_tokens() -> u32 {
    1000
}

fn default_plan_max_tokens() -> u32 {
    1200
}

fn default_timeout() -> u64 {
    30
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MISE__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: MISE__ADVISOR__API_KEY
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: MISE__RECIPES__BASE_URL
        .add_source(
            Environment::with_prefix("MISE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
