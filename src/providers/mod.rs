mod anthropic;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use prompt::{
    build_analysis_prompt, build_meal_plan_prompt, ANALYSIS_PROMPT, ANALYSIS_SYSTEM,
    MEAL_PLAN_PROMPT, MEAL_PLAN_SYSTEM,
};

use crate::MiseError;
use async_trait::async_trait;

/// One single-turn request to a text-generation service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// A text-generation service
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "anthropic")
    fn provider_name(&self) -> &str;

    /// Send `request` and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, MiseError>;
}
