//! Turn-level orchestration: preference-driven discovery with a generated
//! fallback, and the pantry chat flow that runs the corpus and the model
//! side by side. Holds only the current call's working set; persistence of
//! anything a user keeps is an injected concern of the host application.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::config::{AppConfig, MatchingConfig};
use crate::corpus::{MealDbClient, RecipeCorpusClient};
use crate::error::EngineError;
use crate::filters::{apply_filters, PreferenceFilter};
use crate::images::{ImageClient, XaiImageClient};
use crate::model::StructuredRecipe;
use crate::parser::{self, Provenance};
use crate::providers::{self, ChatProvider, ProviderFactory};
use crate::search::RecipeFinder;
use crate::vocabulary::extract_pantry_terms;

/// How many recipes a discovery or chat turn surfaces.
const RESULT_LIMIT: usize = 5;

/// One pantry chat turn's outcome.
#[derive(Debug, Default)]
pub struct PantryChatReply {
    /// Ingredient terms recognized in the input; empty means the input
    /// named no known ingredient
    pub recognized_terms: Vec<String>,
    /// Corpus recipes using every recognized ingredient
    pub corpus_recipes: Vec<StructuredRecipe>,
    /// Generated alternatives for the same ingredients
    pub generated_recipes: Vec<StructuredRecipe>,
    /// Conversational answer, used when no ingredients were recognized
    pub assistant_text: Option<String>,
}

/// Orchestrates one user-facing turn over the corpus, chat, and image
/// clients.
pub struct RecipeAssistant<C> {
    finder: RecipeFinder<C>,
    chat: Box<dyn ChatProvider>,
    images: Option<Box<dyn ImageClient>>,
}

impl RecipeAssistant<MealDbClient> {
    /// Build an assistant from configuration, wiring the real corpus,
    /// chat, and (when enabled and configured) image clients.
    pub fn from_config(config: &AppConfig) -> Result<Self, EngineError> {
        let corpus = MealDbClient::new(&config.corpus);
        let chat = ProviderFactory::default_provider(&config.ai)?;
        let images = if config.images.enabled {
            match XaiImageClient::new(&config.images) {
                Ok(client) => Some(Box::new(client) as Box<dyn ImageClient>),
                Err(err) => {
                    warn!("image generation disabled: {err}");
                    None
                }
            }
        } else {
            None
        };

        Ok(RecipeAssistant {
            finder: RecipeFinder::new(corpus, config.matching),
            chat,
            images,
        })
    }
}

impl<C: RecipeCorpusClient> RecipeAssistant<C> {
    /// Assemble an assistant from explicit clients.
    pub fn with_clients(
        corpus: C,
        matching: MatchingConfig,
        chat: Box<dyn ChatProvider>,
        images: Option<Box<dyn ImageClient>>,
    ) -> Self {
        RecipeAssistant {
            finder: RecipeFinder::new(corpus, matching),
            chat,
            images,
        }
    }

    pub fn finder(&self) -> &RecipeFinder<C> {
        &self.finder
    }

    /// Preference-driven discovery: name-search the corpus for each
    /// declared facet, dedup by id keeping the first occurrence, filter,
    /// and fall back to generated recipes when nothing survives.
    pub async fn discover(
        &self,
        prefs: &PreferenceFilter,
    ) -> Result<Vec<StructuredRecipe>, EngineError> {
        let queries: Vec<&str> = [
            prefs.cuisine.as_deref(),
            prefs.meal_type.as_deref(),
            prefs.dietary_preference.as_deref(),
            prefs.additional_info.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|query| !query.trim().is_empty())
        .collect();

        let mut found = Vec::new();
        let mut seen = HashSet::new();
        for query in &queries {
            let results = match self.finder.corpus().search_by_name(query).await {
                Ok(results) => results,
                Err(err) => {
                    warn!("name search for {query:?} failed: {err}");
                    continue;
                }
            };
            for recipe in results {
                if seen.insert(recipe.id.clone()) {
                    found.push(recipe);
                }
            }
        }

        let mut matches = apply_filters(found, prefs);
        if !matches.is_empty() {
            matches.truncate(RESULT_LIMIT);
            return Ok(matches);
        }

        info!("corpus had nothing for the declared preferences, generating instead");
        let provenance = Provenance {
            category: prefs.meal_type.clone().or_else(|| Some("AI".to_string())),
            area: prefs
                .cuisine
                .clone()
                .or_else(|| Some("AI Generated".to_string())),
            tags: prefs.dietary_preference.clone(),
        };
        self.generate_recipes(&providers::preference_prompt(prefs), &provenance)
            .await
    }

    /// Generate recipes from a prompt, keep the parses that pass the
    /// acceptance policy, and attach generated images where available.
    ///
    /// Errors only when the chat backend fails or a whole batch yields
    /// nothing acceptable ([`EngineError::NoRecipesParsed`]); individual
    /// bad blocks are dropped silently.
    pub async fn generate_recipes(
        &self,
        user_prompt: &str,
        provenance: &Provenance,
    ) -> Result<Vec<StructuredRecipe>, EngineError> {
        let text = self
            .chat
            .complete(providers::CHEF_SYSTEM_PROMPT, user_prompt)
            .await?;

        let mut recipes = Vec::new();
        for (index, block) in parser::split_blocks(&text).into_iter().enumerate() {
            let parsed = parser::parse_block(block);
            if !parser::is_acceptable(&parsed) {
                debug!("discarding generated block {index}: incomplete parse");
                continue;
            }
            let thumbnail = match &self.images {
                Some(images) => images.generate(&parsed.title).await,
                None => None,
            };
            recipes.push(parsed.into_recipe(index, provenance, thumbnail));
        }

        if recipes.is_empty() {
            return Err(EngineError::NoRecipesParsed);
        }
        Ok(recipes)
    }

    /// One pantry chat turn.
    ///
    /// Recognizes ingredient terms in the input, intersects corpus results
    /// across them, hydrates the top hits, and asks the model for creative
    /// alternatives built on the same terms. Without recognized terms the
    /// input is treated as plain conversation. Remote faults degrade to
    /// empty sections; the reply itself always comes back.
    pub async fn pantry_chat_turn(&self, input: &str) -> PantryChatReply {
        let recognized = extract_pantry_terms(input);
        let mut reply = PantryChatReply {
            recognized_terms: recognized.clone(),
            ..Default::default()
        };

        if recognized.is_empty() {
            match self.chat.complete(providers::CHEF_SYSTEM_PROMPT, input).await {
                Ok(text) => reply.assistant_text = Some(text),
                Err(err) => warn!("chat completion failed: {err}"),
            }
            return reply;
        }

        let stubs = self.finder.intersect_by_ingredient(&recognized).await;
        reply.corpus_recipes = self.finder.hydrate_top(&stubs, RESULT_LIMIT).await;

        let provenance = Provenance {
            category: Some("AI Chat".to_string()),
            area: Some("AI Generated".to_string()),
            tags: Some("AI,Chat".to_string()),
        };
        match self
            .generate_recipes(&providers::ingredient_prompt(&recognized), &provenance)
            .await
        {
            Ok(recipes) => reply.generated_recipes = recipes,
            Err(err) => warn!("generated alternatives unavailable: {err}"),
        }

        reply
    }
}
