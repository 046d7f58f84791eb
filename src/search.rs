use crate::config::RecipeDbConfig;
use crate::mealdb::{MealDbClient, RecipeSource};
use crate::model::{Recipe, RecipeSummary};
use crate::query::SearchQuery;
use crate::MiseError;
use futures::future::try_join_all;
use log::{debug, info, warn};
use std::collections::HashSet;

/// Finds recipes that use every requested ingredient and none of the omitted ones
pub struct IngredientSearch<S> {
    source: S,
}

impl IngredientSearch<MealDbClient> {
    /// Search TheMealDB as described by `config`
    pub fn from_config(config: &RecipeDbConfig) -> Result<Self, MiseError> {
        Ok(Self::new(MealDbClient::from_config(config)?))
    }
}

impl<S: RecipeSource> IngredientSearch<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the search, collapsing every failure into an empty result
    ///
    /// "No matches" and "request failed" are indistinguishable to the caller;
    /// the cause is logged.
    pub async fn search(&self, query: &SearchQuery) -> Vec<Recipe> {
        match self.try_search(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Recipe search failed, returning no results: {}", e);
                Vec::new()
            }
        }
    }

    /// Run the search and surface the first error
    ///
    /// 1. one filter lookup per requested ingredient, all in flight at once
    /// 2. any "not found" lookup ends the search with no results
    /// 3. intersect the id lists
    /// 4. fetch each surviving id, all in flight at once
    /// 5. drop recipes that use an omitted ingredient
    pub async fn try_search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, MiseError> {
        if query.is_empty() {
            debug!("No ingredients requested, skipping search");
            return Ok(Vec::new());
        }

        let listings = try_join_all(
            query
                .requested()
                .iter()
                .map(|ingredient| self.source.filter_by_ingredient(ingredient)),
        )
        .await?;

        let Some(listings) = listings.into_iter().collect::<Option<Vec<_>>>() else {
            debug!("At least one ingredient has no recipes");
            return Ok(Vec::new());
        };

        let ids = intersect_ids(&listings);
        debug!("{} recipes use all of {:?}", ids.len(), query.requested());
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let details = try_join_all(ids.iter().map(|id| self.source.lookup(id))).await?;

        let recipes: Vec<Recipe> = details
            .into_iter()
            .flatten()
            .filter(|recipe| !recipe.contains_any(query.omitted()))
            .collect();

        info!(
            "Found {} recipes for {:?} omitting {:?}",
            recipes.len(),
            query.requested(),
            query.omitted()
        );
        Ok(recipes)
    }
}

/// Ids present in every listing, in the order of the first listing, without repeats
pub fn intersect_ids(listings: &[Vec<RecipeSummary>]) -> Vec<String> {
    let Some((first, rest)) = listings.split_first() else {
        return Vec::new();
    };

    let others: Vec<HashSet<&str>> = rest
        .iter()
        .map(|listing| listing.iter().map(|summary| summary.id.as_str()).collect())
        .collect();

    let mut seen = HashSet::new();
    first
        .iter()
        .map(|summary| summary.id.as_str())
        .filter(|id| others.iter().all(|set| set.contains(id)))
        .filter(|id| seen.insert(*id))
        .map(String::from)
        .collect()
}

/// Results of the most recent search, as a front-end would hold them
pub struct SearchSession<S> {
    search: IngredientSearch<S>,
    results: Vec<Recipe>,
    searched: bool,
}

impl<S: RecipeSource> SearchSession<S> {
    pub fn new(search: IngredientSearch<S>) -> Self {
        Self {
            search,
            results: Vec::new(),
            searched: false,
        }
    }

    /// Search for raw comma-separated input and replace the current results
    ///
    /// Returns `false` without touching any state when no ingredient was given.
    /// Taking `&mut self` means a session never has two searches in flight, so
    /// results always belong to the latest submitted query.
    pub async fn submit(&mut self, ingredients: &str, omit: &str) -> bool {
        let query = SearchQuery::parse(ingredients, omit);
        if query.is_empty() {
            return false;
        }

        self.searched = true;
        self.results = self.search.search(&query).await;
        true
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Whether any search has been performed yet
    pub fn has_searched(&self) -> bool {
        self.searched
    }
}
