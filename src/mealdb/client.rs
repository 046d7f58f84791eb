use super::RecipeSource;
use crate::config::RecipeDbConfig;
use crate::model::{MealsEnvelope, Recipe, RecipeSummary};
use crate::MiseError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; MiseEnPlace/0.3)";

/// HTTP client for TheMealDB's `filter.php` and `lookup.php` endpoints
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, MiseError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &RecipeDbConfig) -> Result<Self, MiseError> {
        Self::new(
            config.base_url.clone(),
            Some(Duration::from_secs(config.timeout)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base>/<endpoint>?i=<value>` and decode the `meals` envelope
    ///
    /// The status code is not inspected: whatever the body is, it either
    /// decodes or the call fails.
    async fn fetch_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        value: &str,
    ) -> Result<Option<Vec<T>>, MiseError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} i={}", url, value);

        let envelope: MealsEnvelope<T> = self
            .client
            .get(&url)
            .query(&[("i", value)])
            .send()
            .await?
            .json()
            .await?;

        Ok(envelope.meals)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, MiseError> {
        let meals = self.fetch_meals("filter.php", ingredient).await?;
        debug!(
            "Ingredient '{}' matched {} recipes",
            ingredient,
            meals.as_ref().map_or(0, Vec::len)
        );
        Ok(meals)
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, MiseError> {
        let meals: Option<Vec<Recipe>> = self.fetch_meals("lookup.php", id).await?;
        Ok(meals.and_then(|meals| meals.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = MealDbClient::new("http://localhost:1234/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let client = MealDbClient::from_config(&RecipeDbConfig::default()).unwrap();
        assert_eq!(
            client.base_url(),
            "https://www.themealdb.com/api/json/v1/1"
        );
    }

    #[tokio::test]
    async fn test_lookup_takes_first_record() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup.php")
            .match_query(mockito::Matcher::UrlEncoded("i".into(), "52772".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole","strIngredient1":"soy sauce","strMeasure1":"3/4 cup"}]}"#,
            )
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let recipe = client.lookup("52772").await.unwrap().unwrap();
        assert_eq!(recipe.title, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.ingredients[0].measure, "3/4 cup");
    }

    #[tokio::test]
    async fn test_filter_not_found_shape() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded("i".into(), "unobtainium".into()))
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let meals = client.filter_by_ingredient("unobtainium").await.unwrap();
        assert!(meals.is_none());
    }

    #[tokio::test]
    async fn test_filter_encodes_ingredient() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded(
                "i".into(),
                "chicken breast".into(),
            ))
            .with_status(200)
            .with_body(r#"{"meals":[{"idMeal":"1"},{"idMeal":"2"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let meals = client
            .filter_by_ingredient("chicken breast")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(meals.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let result = client.filter_by_ingredient("beef").await;
        assert!(matches!(result, Err(MiseError::FetchError(_))));
    }
}
