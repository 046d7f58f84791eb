mod client;

pub use client::MealDbClient;

use crate::model::{Recipe, RecipeSummary};
use crate::MiseError;
use async_trait::async_trait;

/// A recipe database that can be filtered by ingredient and queried by id
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// All recipes that use `ingredient`; `None` when the database knows none
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, MiseError>;

    /// The full record for `id`, if there is one
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, MiseError>;
}

