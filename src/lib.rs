//! Recipe search by ingredient intersection over TheMealDB, plus AI nutrition
//! advice through the Anthropic Messages API.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! use mise_en_place::{sectionize, search_recipes};
//!
//! let recipes = search_recipes("chicken, rice", "garlic").await;
//! for recipe in &recipes {
//!     println!("{} ({})", recipe.title, recipe.id);
//! }
//!
//! for section in sectionize("RECIPE SUGGESTIONS\nFried rice.") {
//!     println!("{:?}: {}", section.title(), section.body);
//! }
//! # }
//! ```

pub mod advisor;
pub mod builder;
pub mod config;
pub mod error;
pub mod mealdb;
pub mod model;
pub mod providers;
pub mod query;
pub mod search;
pub mod sectionizer;

pub use advisor::NutritionAdvisor;
pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use config::{load_config, AppConfig};
pub use error::MiseError;
pub use mealdb::{MealDbClient, RecipeSource};
pub use model::{DietaryGoal, Ingredient, MealPlanRequest, Recipe, RecipeSummary};
pub use query::{split_ingredient_list, SearchQuery};
pub use search::{IngredientSearch, SearchSession};
pub use sectionizer::{sectionize, title_case, Heading, Section};

use log::warn;

/// Starter ingredients offered when nothing has been searched yet
pub const SUGGESTED_INGREDIENTS: [&str; 8] = [
    "Chicken", "Salmon", "Beef", "Pork", "Eggs", "Potatoes", "Onions", "Tofu",
];

/// Search TheMealDB with the default configuration
///
/// Always returns a list; a failed search is an empty one.
pub async fn search_recipes(ingredients: &str, omit: &str) -> Vec<Recipe> {
    let search = match IngredientSearch::from_config(&config::RecipeDbConfig::default()) {
        Ok(search) => search,
        Err(e) => {
            warn!("Could not create recipe client: {}", e);
            return Vec::new();
        }
    };
    search.search(&SearchQuery::parse(ingredients, omit)).await
}
