use crate::config::AdvisorConfig;
use crate::model::{MealPlanRequest, Recipe};
use crate::providers::{
    build_analysis_prompt, build_meal_plan_prompt, AnthropicProvider, CompletionRequest,
    LlmProvider, ANALYSIS_SYSTEM, MEAL_PLAN_SYSTEM,
};
use crate::MiseError;
use log::{info, warn};

/// Shown when an analysis response carries no text
pub const NO_ANALYSIS: &str = "Could not retrieve analysis.";
/// Shown when a meal plan response carries no text
pub const NO_MEAL_PLAN: &str = "No response received.";
/// Shown when the request itself failed
pub const SOMETHING_WENT_WRONG: &str =
    "Something went wrong. Please check your API key and try again.";

/// Asks a text-generation service for nutrition advice
///
/// Every method returns displayable text: failures become one of the
/// placeholder constants above.
pub struct NutritionAdvisor {
    provider: Box<dyn LlmProvider>,
    analysis_max_tokens: u32,
    plan_max_tokens: u32,
}

impl NutritionAdvisor {
    pub fn new(
        provider: Box<dyn LlmProvider>,
        analysis_max_tokens: u32,
        plan_max_tokens: u32,
    ) -> Self {
        Self {
            provider,
            analysis_max_tokens,
            plan_max_tokens,
        }
    }

    /// Build an advisor backed by Anthropic; fails when no API key is available
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, MiseError> {
        Ok(Self::new(
            Box::new(AnthropicProvider::new(config)?),
            config.analysis_max_tokens,
            config.plan_max_tokens,
        ))
    }

    /// Nutrition analysis of a single recipe
    pub async fn analyze_recipe(&self, recipe: &Recipe) -> String {
        let request = CompletionRequest {
            system: ANALYSIS_SYSTEM.to_string(),
            prompt: build_analysis_prompt(recipe),
            max_tokens: self.analysis_max_tokens,
        };
        info!("Requesting nutrition analysis for '{}'", recipe.title);
        self.complete_or(&request, NO_ANALYSIS).await
    }

    /// A meal plan for the given ingredients and goal
    ///
    /// Returns `None` without calling the service when no ingredients were given.
    /// The text is meant to be passed to [`crate::sectionize`].
    pub async fn plan_meals(&self, request: &MealPlanRequest) -> Option<String> {
        if request.ingredients.trim().is_empty() {
            return None;
        }

        let request = CompletionRequest {
            system: MEAL_PLAN_SYSTEM.to_string(),
            prompt: build_meal_plan_prompt(request),
            max_tokens: self.plan_max_tokens,
        };
        info!("Requesting meal plan from {}", self.provider.provider_name());
        Some(self.complete_or(&request, NO_MEAL_PLAN).await)
    }

    async fn complete_or(&self, request: &CompletionRequest, empty: &str) -> String {
        match self.provider.complete(request).await {
            Ok(text) => text,
            Err(e @ (MiseError::ApiError { .. } | MiseError::MissingContent(_))) => {
                warn!("{} returned no text: {}", self.provider.provider_name(), e);
                empty.to_string()
            }
            Err(e) => {
                warn!("{} request failed: {}", self.provider.provider_name(), e);
                SOMETHING_WENT_WRONG.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DietaryGoal;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum Reply {
        Text(&'static str),
        Missing,
        Broken,
    }

    type Seen = Arc<Mutex<Vec<CompletionRequest>>>;

    struct ScriptedProvider {
        reply: Reply,
        seen: Seen,
    }

    impl ScriptedProvider {
        fn boxed(reply: Reply) -> Box<Self> {
            Self::recording(reply).0
        }

        fn recording(reply: Reply) -> (Box<Self>, Seen) {
            let seen = Seen::default();
            let provider = Box::new(Self {
                reply,
                seen: Arc::clone(&seen),
            });
            (provider, seen)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, MiseError> {
            self.seen.lock().unwrap().push(request.clone());
            match self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Missing => Err(MiseError::MissingContent("empty".to_string())),
                Reply::Broken => Err(MiseError::BuilderError("connection reset".to_string())),
            }
        }
    }

    fn soup() -> Recipe {
        serde_json::from_value(serde_json::json!({
            "idMeal": "9",
            "strMeal": "Leek Soup",
            "strIngredient1": "Leek",
            "strMeasure1": "2"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_analysis_uses_analysis_budget() {
        let (provider, seen) = ScriptedProvider::recording(Reply::Text("Light and filling."));
        let advisor = NutritionAdvisor::new(provider, 1000, 1200);
        assert_eq!(advisor.analyze_recipe(&soup()).await, "Light and filling.");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].max_tokens, 1000);
        assert_eq!(seen[0].system, ANALYSIS_SYSTEM);
        assert!(seen[0].prompt.contains("Ingredients: 2 Leek"));
    }

    #[tokio::test]
    async fn test_analysis_placeholders() {
        let advisor = NutritionAdvisor::new(ScriptedProvider::boxed(Reply::Missing), 1000, 1200);
        assert_eq!(advisor.analyze_recipe(&soup()).await, NO_ANALYSIS);

        let advisor = NutritionAdvisor::new(ScriptedProvider::boxed(Reply::Broken), 1000, 1200);
        assert_eq!(advisor.analyze_recipe(&soup()).await, SOMETHING_WENT_WRONG);
    }

    #[tokio::test]
    async fn test_plan_placeholders() {
        let request = MealPlanRequest::new("eggs");

        let advisor = NutritionAdvisor::new(ScriptedProvider::boxed(Reply::Missing), 1000, 1200);
        assert_eq!(advisor.plan_meals(&request).await.as_deref(), Some(NO_MEAL_PLAN));

        let advisor = NutritionAdvisor::new(ScriptedProvider::boxed(Reply::Broken), 1000, 1200);
        assert_eq!(
            advisor.plan_meals(&request).await.as_deref(),
            Some(SOMETHING_WENT_WRONG)
        );
    }

    #[tokio::test]
    async fn test_blank_plan_is_noop() {
        let advisor = NutritionAdvisor::new(ScriptedProvider::boxed(Reply::Text("x")), 1000, 1200);
        assert!(advisor.plan_meals(&MealPlanRequest::new("  ")).await.is_none());
    }

    #[tokio::test]
    async fn test_plan_request_shape() {
        let (provider, seen) =
            ScriptedProvider::recording(Reply::Text("RECIPE SUGGESTIONS\nStir fry."));
        let advisor = NutritionAdvisor::new(provider, 1000, 1200);

        let request = MealPlanRequest {
            goal: DietaryGoal::LowCarb,
            ..MealPlanRequest::new("beef, broccoli")
        };
        let text = advisor.plan_meals(&request).await.unwrap();
        assert!(text.starts_with("RECIPE SUGGESTIONS"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].max_tokens, 1200);
        assert_eq!(seen[0].system, MEAL_PLAN_SYSTEM);
        assert!(seen[0].prompt.contains("Dietary goal: Low Carb"));
    }
}
