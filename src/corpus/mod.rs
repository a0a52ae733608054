//! Recipe corpus access: the client trait consumed by the search pipeline
//! and the TheMealDB-shaped HTTP implementation.

mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::model::StructuredRecipe;

/// A recipe stub from a prefilter search: enough to identify and display a
/// candidate, not enough to match ingredients against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
}

impl RecipeSummary {
    /// Sparse structured form, used when no hydration is needed
    /// (single-term searches return prefilter candidates as-is).
    pub fn into_recipe(self) -> StructuredRecipe {
        StructuredRecipe {
            id: self.id,
            title: self.title,
            instructions: String::new(),
            category: None,
            area: None,
            tags: None,
            thumbnail: self.thumbnail,
            ingredients: Vec::new(),
        }
    }
}

/// Remote recipe database consumed by the search pipeline.
///
/// Methods return `Err` on transport faults; the pipelines above decide
/// whether to degrade that to an empty result (they do) or surface it.
#[async_trait]
pub trait RecipeCorpusClient: Send + Sync {
    /// Full-detail recipes whose names match the query.
    async fn search_by_name(&self, name: &str) -> Result<Vec<StructuredRecipe>, EngineError>;

    /// Prefilter stubs for recipes that use the given main ingredient.
    async fn search_by_ingredient(&self, term: &str) -> Result<Vec<RecipeSummary>, EngineError>;

    /// Full detail for one recipe; `None` when the corpus has no such id.
    async fn get_by_id(&self, id: &str) -> Result<Option<StructuredRecipe>, EngineError>;

    /// Every ingredient name the corpus knows about.
    async fn list_ingredients(&self) -> Result<Vec<String>, EngineError>;
}
