//! Corpus search strategies: the multi-ingredient prefilter/hydrate/match
//! pipeline, and the id-set intersection variant used by chat turns.

use std::collections::HashSet;

use log::{debug, warn};

use crate::config::MatchingConfig;
use crate::corpus::{RecipeCorpusClient, RecipeSummary};
use crate::matching;
use crate::model::StructuredRecipe;

/// Orchestrates remote corpus lookups for ingredient-driven searches.
///
/// Remote faults never escape these methods: a failed call degrades to an
/// empty result for that step and the pipeline continues (or ends)
/// accordingly. Callers that need to distinguish faults from genuine
/// no-matches should drive the corpus client directly.
pub struct RecipeFinder<C> {
    corpus: C,
    matching: MatchingConfig,
}

impl<C: RecipeCorpusClient> RecipeFinder<C> {
    pub fn new(corpus: C, matching: MatchingConfig) -> Self {
        RecipeFinder { corpus, matching }
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    /// Find corpus recipes that use every queried ingredient.
    ///
    /// The first term drives a single prefilter fetch; an empty prefilter
    /// is final (later terms never broaden a fruitless first filter). With
    /// one term the prefilter stubs are returned as-is. Otherwise each
    /// candidate is hydrated with a detail fetch (dropped on failure, not
    /// retried) and kept only if every remaining term fuzzy-matches one of
    /// its ingredients.
    pub async fn search_by_ingredients(&self, terms: &[String]) -> Vec<StructuredRecipe> {
        let Some(first) = terms.first() else {
            return Vec::new();
        };

        let stubs = match self.corpus.search_by_ingredient(first).await {
            Ok(stubs) => stubs,
            Err(err) => {
                warn!("prefilter fetch for {first:?} failed: {err}");
                return Vec::new();
            }
        };
        if stubs.is_empty() {
            return Vec::new();
        }
        if terms.len() == 1 {
            return stubs.into_iter().map(RecipeSummary::into_recipe).collect();
        }

        let later_terms = &terms[1..];
        let mut matches = Vec::new();
        for stub in stubs {
            let recipe = match self.corpus.get_by_id(&stub.id).await {
                Ok(Some(recipe)) => recipe,
                Ok(None) => {
                    debug!("candidate {} vanished from the corpus, skipping", stub.id);
                    continue;
                }
                Err(err) => {
                    warn!("detail fetch for {} failed, skipping: {err}", stub.id);
                    continue;
                }
            };
            if matching::has_all_ingredients(&recipe, later_terms, &self.matching) {
                matches.push(recipe);
            }
        }
        matches
    }

    /// Intersect prefilter result sets across terms by recipe id,
    /// preserving the first term's ordering. Cheaper than full hydration
    /// when exact per-ingredient index hits are enough.
    pub async fn intersect_by_ingredient(&self, terms: &[String]) -> Vec<RecipeSummary> {
        let Some(first) = terms.first() else {
            return Vec::new();
        };

        let mut survivors = match self.corpus.search_by_ingredient(first).await {
            Ok(stubs) => stubs,
            Err(err) => {
                warn!("prefilter fetch for {first:?} failed: {err}");
                return Vec::new();
            }
        };

        for term in &terms[1..] {
            if survivors.is_empty() {
                break;
            }
            let next = match self.corpus.search_by_ingredient(term).await {
                Ok(stubs) => stubs,
                Err(err) => {
                    warn!("prefilter fetch for {term:?} failed: {err}");
                    Vec::new()
                }
            };
            let ids: HashSet<String> = next.into_iter().map(|stub| stub.id).collect();
            survivors.retain(|stub| ids.contains(&stub.id));
        }

        survivors
    }

    /// Fetch full details for the first `limit` stubs, dropping any the
    /// corpus no longer resolves.
    pub async fn hydrate_top(
        &self,
        stubs: &[RecipeSummary],
        limit: usize,
    ) -> Vec<StructuredRecipe> {
        let mut recipes = Vec::new();
        for stub in stubs.iter().take(limit) {
            match self.corpus.get_by_id(&stub.id).await {
                Ok(Some(recipe)) => recipes.push(recipe),
                Ok(None) => debug!("candidate {} vanished from the corpus, skipping", stub.id),
                Err(err) => warn!("detail fetch for {} failed, skipping: {err}", stub.id),
            }
        }
        recipes
    }
}
