//! Fuzzy ingredient matching: normalization, edit distance, and the
//! substring-or-distance rule that resolves pantry terms against recipe
//! ingredient lists despite spelling variation.

mod distance;
mod normalize;

pub use distance::edit_distance;
pub use normalize::normalize;

use crate::config::MatchingConfig;
use crate::model::StructuredRecipe;

/// True when `term` matches any of the given ingredient names.
///
/// Both sides are normalized first. A match is substring containment in
/// either direction, or an edit distance within the configured tolerance
/// ([`MatchingConfig::max_edit_distance`]).
pub fn term_matches(ingredient_names: &[String], term: &str, config: &MatchingConfig) -> bool {
    let needle = normalize(term);
    ingredient_names.iter().any(|name| {
        let candidate = normalize(name);
        candidate.contains(&needle)
            || needle.contains(&candidate)
            || edit_distance(&candidate, &needle) <= config.max_edit_distance
    })
}

/// True when every term after the first matches at least one ingredient of
/// the recipe.
///
/// The first term is reserved for the corpus prefilter and is not
/// re-checked here; pass the full query and this looks at `terms[1..]`.
pub fn has_all_ingredients(
    recipe: &StructuredRecipe,
    later_terms: &[String],
    config: &MatchingConfig,
) -> bool {
    let names: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.clone())
        .collect();
    later_terms
        .iter()
        .all(|term| term_matches(&names, term, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn config() -> MatchingConfig {
        MatchingConfig::default()
    }

    fn recipe_with(names: &[&str]) -> StructuredRecipe {
        StructuredRecipe {
            id: "test".to_string(),
            title: "Test".to_string(),
            instructions: String::new(),
            category: None,
            area: None,
            tags: None,
            thumbnail: None,
            ingredients: names.iter().map(|n| Ingredient::named(*n)).collect(),
        }
    }

    #[test]
    fn test_misspelling_within_tolerance_matches() {
        let names = vec!["chicken breast".to_string()];
        assert!(term_matches(&names, "chiken", &config()));
    }

    #[test]
    fn test_unrelated_term_does_not_match() {
        let names = vec!["chicken breast".to_string()];
        assert!(!term_matches(&names, "beef", &config()));
    }

    #[test]
    fn test_substring_matches_either_direction() {
        let names = vec!["extra virgin olive oil".to_string()];
        assert!(term_matches(&names, "olive oil", &config()));

        let names = vec!["egg".to_string()];
        assert!(term_matches(&names, "eggs", &config()));
    }

    #[test]
    fn test_both_sides_are_normalized() {
        let names = vec!["  Chicken   Breast ".to_string()];
        assert!(term_matches(&names, "CHICKEN breast", &config()));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let names = vec!["bread".to_string()];
        // "beef" -> "bread" needs 3 edits
        assert!(!term_matches(&names, "beef", &MatchingConfig { max_edit_distance: 2 }));
        assert!(term_matches(&names, "beef", &MatchingConfig { max_edit_distance: 3 }));
    }

    #[test]
    fn test_has_all_ingredients_requires_every_later_term() {
        let recipe = recipe_with(&["chicken breast", "garlic clove", "rice"]);

        assert!(has_all_ingredients(
            &recipe,
            &["garlic".to_string(), "rise".to_string()],
            &config()
        ));
        assert!(!has_all_ingredients(
            &recipe,
            &["garlic".to_string(), "saffron".to_string()],
            &config()
        ));
    }

    #[test]
    fn test_has_all_ingredients_with_no_later_terms() {
        let recipe = recipe_with(&["flour"]);
        assert!(has_all_ingredients(&recipe, &[], &config()));
    }
}
