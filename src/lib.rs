//! Recipe discovery engine reconciling two heterogeneous sources — a
//! structured recipe corpus (TheMealDB-shaped API) and free-text output
//! from a generative model — into one normalized recipe representation,
//! with fuzzy pantry-ingredient search over the corpus.
//!
//! Two pipelines converge on [`StructuredRecipe`]: the corpus pipeline
//! (prefilter search, detail hydration, fuzzy ingredient intersection) and
//! the generated-text pipeline (tolerant parsing plus an acceptance
//! policy). Both feed the same derived classification and preference
//! filters.

pub mod classify;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod filters;
pub mod images;
pub mod matching;
pub mod model;
pub mod parser;
pub mod providers;
pub mod search;
pub mod vocabulary;

pub use classify::{classify, Classification, Difficulty, TimeBucket};
pub use config::AppConfig;
pub use discovery::{PantryChatReply, RecipeAssistant};
pub use error::EngineError;
pub use filters::{apply_filters, PreferenceFilter};
pub use model::{Ingredient, StructuredRecipe, MAX_INGREDIENT_SLOTS};
pub use search::RecipeFinder;

use crate::corpus::MealDbClient;
use crate::parser::Provenance;

/// Search the configured corpus for recipes that use every given
/// ingredient. Convenience wrapper wiring a corpus client from
/// [`AppConfig::load`]; construct a [`RecipeFinder`] directly to reuse a
/// client across calls.
pub async fn search_by_ingredients(
    terms: &[String],
) -> Result<Vec<StructuredRecipe>, EngineError> {
    let config = AppConfig::load()?;
    let finder = RecipeFinder::new(MealDbClient::new(&config.corpus), config.matching);
    Ok(finder.search_by_ingredients(terms).await)
}

/// Parse one block of generated recipe text into the canonical schema.
/// `None` when the block fails the acceptance policy (missing title, fewer
/// than two ingredients, or trivial instructions).
pub fn parse_generated_block(block: &str) -> Option<StructuredRecipe> {
    let parsed = parser::parse_block(block);
    if !parser::is_acceptable(&parsed) {
        return None;
    }
    Some(parsed.into_recipe(0, &Provenance::default(), None))
}
