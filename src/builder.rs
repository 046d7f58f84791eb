use std::time::Duration;

use crate::{
    config::RecipeDbConfig, IngredientSearch, MealDbClient, MiseError, Recipe, SearchQuery,
};

/// Builder for configuring and running an ingredient search
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    ingredients: Option<String>,
    omit: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Set the ingredients every recipe must use, comma-separated
    ///
    /// # Example
    /// ```
    /// use mise_en_place::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredients("chicken, rice");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Set the ingredients no recipe may use, comma-separated
    ///
    /// # Example
    /// ```
    /// use mise_en_place::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredients("chicken, rice")
    ///     .omit("peanuts, garlic");
    /// ```
    pub fn omit(mut self, omit: impl Into<String>) -> Self {
        self.omit = Some(omit.into());
        self
    }

    /// Point the search at another TheMealDB-compatible server
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use mise_en_place::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredients("salmon")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Run the search
    ///
    /// Network and decoding failures do not surface here: like
    /// [`IngredientSearch::search`], they yield an empty list.
    ///
    /// # Errors
    /// Returns `MiseError` if:
    /// - `.ingredients()` was never called
    /// - the HTTP client cannot be constructed
    ///
    /// # Example
    /// ```no_run
    /// # use mise_en_place::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeSearch::builder()
    ///     .ingredients("chicken, rice")
    ///     .omit("garlic")
    ///     .search()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(self) -> Result<Vec<Recipe>, MiseError> {
        let ingredients = self.ingredients.ok_or_else(|| {
            MiseError::BuilderError("No ingredients specified. Use .ingredients()".to_string())
        })?;

        let defaults = RecipeDbConfig::default();
        let client = MealDbClient::new(
            self.base_url.unwrap_or(defaults.base_url),
            Some(
                self.timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout)),
            ),
        )?;

        let query = SearchQuery::parse(&ingredients, self.omit.as_deref().unwrap_or_default());
        Ok(IngredientSearch::new(client).search(&query).await)
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use mise_en_place::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
