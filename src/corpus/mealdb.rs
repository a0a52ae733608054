use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CorpusConfig;
use crate::corpus::{RecipeCorpusClient, RecipeSummary};
use crate::error::EngineError;
use crate::model::{Ingredient, StructuredRecipe, MAX_INGREDIENT_SLOTS};

/// Client for TheMealDB-compatible JSON APIs.
///
/// The wire format's fixed ingredient slots (`strIngredient1`..`20`,
/// `strMeasure1`..`20`) are collapsed into a dense ordered list here;
/// nothing above this module sees slot numbering.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &CorpusConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one endpoint and unwrap the `{"meals": null | [...]}` envelope;
    /// a `null` body means no matches, not an error.
    async fn fetch_meals<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, EngineError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("corpus request: {url} {query:?}");
        let envelope: Envelope<T> = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .json()
            .await?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeCorpusClient for MealDbClient {
    async fn search_by_name(&self, name: &str) -> Result<Vec<StructuredRecipe>, EngineError> {
        let records: Vec<MealRecord> = self.fetch_meals("search.php", &[("s", name)]).await?;
        Ok(records.into_iter().map(MealRecord::into_recipe).collect())
    }

    async fn search_by_ingredient(&self, term: &str) -> Result<Vec<RecipeSummary>, EngineError> {
        let records: Vec<StubRecord> = self.fetch_meals("filter.php", &[("i", term)]).await?;
        Ok(records.into_iter().map(StubRecord::into_summary).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<StructuredRecipe>, EngineError> {
        let records: Vec<MealRecord> = self.fetch_meals("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().next().map(MealRecord::into_recipe))
    }

    async fn list_ingredients(&self) -> Result<Vec<String>, EngineError> {
        let records: Vec<IngredientRecord> = self.fetch_meals("list.php", &[("i", "list")]).await?;
        Ok(records.into_iter().map(|record| record.name).collect())
    }
}

/// TheMealDB wraps every response in a `meals` array that is `null` when
/// nothing matched.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    meals: Option<Vec<T>>,
}

/// Full meal record as `search.php` / `lookup.php` return it. The fixed
/// ingredient/measure slots land in the flattened map and are collapsed by
/// `into_recipe`.
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    title: String,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, serde_json::Value>,
}

impl MealRecord {
    fn slot_text(&self, prefix: &str, slot: usize) -> String {
        self.slots
            .get(&format!("{prefix}{slot}"))
            .and_then(|value| value.as_str())
            .unwrap_or("")
            .trim()
            .to_string()
    }

    fn into_recipe(self) -> StructuredRecipe {
        let mut ingredients = Vec::new();
        for slot in 1..=MAX_INGREDIENT_SLOTS {
            let name = self.slot_text("strIngredient", slot);
            if name.is_empty() {
                continue;
            }
            let measure = self.slot_text("strMeasure", slot);
            ingredients.push(Ingredient { name, measure });
        }

        StructuredRecipe {
            id: self.id,
            title: self.title,
            instructions: self.instructions.unwrap_or_default(),
            category: blank_to_none(self.category),
            area: blank_to_none(self.area),
            tags: blank_to_none(self.tags),
            thumbnail: blank_to_none(self.thumbnail),
            ingredients: StructuredRecipe::dense_ingredients(ingredients),
        }
    }
}

/// Partial record as `filter.php` returns it.
#[derive(Debug, Deserialize)]
struct StubRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    title: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
}

impl StubRecord {
    fn into_summary(self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title,
            thumbnail: blank_to_none(self.thumbnail),
        }
    }
}

/// Entry of the `list.php?i=list` ingredient catalogue.
#[derive(Debug, Deserialize)]
struct IngredientRecord {
    #[serde(rename = "strIngredient")]
    name: String,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn full_meal_json() -> &'static str {
        r#"{
            "meals": [{
                "idMeal": "52940",
                "strMeal": "Brown Stew Chicken",
                "strCategory": "Chicken",
                "strArea": "Jamaican",
                "strTags": "Stew",
                "strInstructions": "1. Season chicken. 2. Simmer until tender.",
                "strMealThumb": "https://example.com/stew.jpg",
                "strIngredient1": "Chicken",
                "strIngredient2": " Tomato ",
                "strIngredient3": "",
                "strIngredient4": "Garlic",
                "strIngredient5": null,
                "strMeasure1": "1 whole",
                "strMeasure2": "2 chopped",
                "strMeasure3": "",
                "strMeasure4": " 1 clove ",
                "strMeasure5": null
            }]
        }"#
    }

    #[tokio::test]
    async fn test_lookup_collapses_fixed_slots() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php?i=52940")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(full_meal_json())
            .create();

        let client = MealDbClient::with_base_url(server.url());
        let recipe = client.get_by_id("52940").await.unwrap().unwrap();

        assert_eq!(recipe.id, "52940");
        assert_eq!(recipe.title, "Brown Stew Chicken");
        assert_eq!(recipe.area.as_deref(), Some("Jamaican"));
        // blank and null slots are dropped, order and pairing kept
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[0].name, "Chicken");
        assert_eq!(recipe.ingredients[1].name, "Tomato");
        assert_eq!(recipe.ingredients[1].measure, "2 chopped");
        assert_eq!(recipe.ingredients[2].name, "Garlic");
        assert_eq!(recipe.ingredients[2].measure, "1 clove");
        mock.assert();
    }

    #[tokio::test]
    async fn test_null_meals_envelope_is_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php?i=driftwood")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create();

        let client = MealDbClient::with_base_url(server.url());
        let stubs = client.search_by_ingredient("driftwood").await.unwrap();

        assert!(stubs.is_empty());
        mock.assert();
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_none() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup.php?i=0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create();

        let client = MealDbClient::with_base_url(server.url());
        assert!(client.get_by_id("0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filter_returns_stubs() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/filter.php?i=chicken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [
                    {"idMeal": "52940", "strMeal": "Brown Stew Chicken", "strMealThumb": "https://example.com/stew.jpg"},
                    {"idMeal": "52846", "strMeal": "Chicken Basquaise", "strMealThumb": ""}
                ]}"#,
            )
            .create();

        let client = MealDbClient::with_base_url(server.url());
        let stubs = client.search_by_ingredient("chicken").await.unwrap();

        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].id, "52940");
        assert_eq!(
            stubs[0].thumbnail.as_deref(),
            Some("https://example.com/stew.jpg")
        );
        // empty thumbnail string becomes a representable absence
        assert!(stubs[1].thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search.php?s=stew")
            .with_status(500)
            .with_body("upstream exploded")
            .create();

        let client = MealDbClient::with_base_url(server.url());
        assert!(client.search_by_name("stew").await.is_err());
    }

    #[tokio::test]
    async fn test_list_ingredients() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/list.php?i=list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [
                    {"idIngredient": "1", "strIngredient": "Chicken", "strDescription": null},
                    {"idIngredient": "2", "strIngredient": "Salmon", "strDescription": null}
                ]}"#,
            )
            .create();

        let client = MealDbClient::with_base_url(server.url());
        let ingredients = client.list_ingredients().await.unwrap();
        assert_eq!(ingredients, vec!["Chicken", "Salmon"]);
    }
}
