//! Preference filtering over structured recipes.
//!
//! The per-diet and per-meal-type keyword sets are rule tables, kept as
//! data rather than inline branching so they can be tested and extended
//! without touching the filter control flow.

use crate::classify::{classify, Difficulty, TimeBucket};
use crate::model::StructuredRecipe;

/// User-declared preferences. `None` on an axis means no constraint; a
/// recipe must pass every configured axis to survive.
#[derive(Debug, Clone, Default)]
pub struct PreferenceFilter {
    /// Diet name, matched against [`DIET_RULES`] ("vegetarian", "vegan",
    /// "gluten-free"); diets without a rule impose no constraint
    pub dietary_preference: Option<String>,
    /// Meal type ("breakfast", "lunch", "dinner", "snack", "dessert")
    pub meal_type: Option<String>,
    /// Cuisine/area name ("Italian", "Jamaican")
    pub cuisine: Option<String>,
    /// Required cooking-time bucket, compared by identity
    pub cooking_time: Option<TimeBucket>,
    /// Required difficulty, compared by identity
    pub skill_level: Option<Difficulty>,
    /// Free-form extras (occasions, on-hand ingredients); feeds search
    /// queries and prompts, never a filter axis
    pub additional_info: Option<String>,
}

/// Scope of recipe text a diet rule scans for disqualifying keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DietScope {
    CategoryAndTags,
    Instructions,
}

struct DietRule {
    diet: &'static str,
    keywords: &'static [&'static str],
    scope: DietScope,
}

/// Disqualifying keyword sets per dietary preference. A recipe mentioning
/// any keyword inside the rule's scope fails the axis.
static DIET_RULES: &[DietRule] = &[
    DietRule {
        diet: "vegetarian",
        keywords: &["beef", "chicken", "pork", "lamb", "seafood", "fish"],
        scope: DietScope::CategoryAndTags,
    },
    DietRule {
        diet: "vegan",
        keywords: &[
            "meat", "chicken", "beef", "pork", "fish", "egg", "milk", "cheese", "dairy",
        ],
        scope: DietScope::CategoryAndTags,
    },
    DietRule {
        diet: "gluten-free",
        keywords: &["wheat", "flour", "pasta", "bread"],
        scope: DietScope::Instructions,
    },
];

/// Qualifying keywords per meal type, checked against title and tags when
/// the category itself doesn't name the meal type.
static MEAL_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("breakfast", &["breakfast", "morning", "brunch"]),
    ("lunch", &["lunch", "sandwich", "salad"]),
    ("dinner", &["dinner", "supper", "main course"]),
    ("snack", &["snack", "appetizer", "side"]),
    ("dessert", &["dessert", "sweet", "cake", "pie"]),
];

/// Keep the recipes passing every configured preference axis, preserving
/// their relative order. Pure; filtering an already-filtered set with the
/// same preferences is a no-op.
pub fn apply_filters(
    recipes: Vec<StructuredRecipe>,
    prefs: &PreferenceFilter,
) -> Vec<StructuredRecipe> {
    recipes
        .into_iter()
        .filter(|recipe| passes(recipe, prefs))
        .collect()
}

fn passes(recipe: &StructuredRecipe, prefs: &PreferenceFilter) -> bool {
    passes_diet(recipe, prefs.dietary_preference.as_deref())
        && passes_meal_type(recipe, prefs.meal_type.as_deref())
        && passes_cuisine(recipe, prefs.cuisine.as_deref())
        && prefs
            .cooking_time
            .map_or(true, |bucket| classify(recipe).estimated_time == bucket)
        && prefs
            .skill_level
            .map_or(true, |level| classify(recipe).difficulty == level)
}

fn passes_diet(recipe: &StructuredRecipe, diet: Option<&str>) -> bool {
    let Some(diet) = diet else { return true };
    let diet = diet.to_lowercase();
    let Some(rule) = DIET_RULES.iter().find(|rule| rule.diet == diet) else {
        return true;
    };

    let haystack = match rule.scope {
        DietScope::CategoryAndTags => format!(
            "{} {}",
            recipe.category.as_deref().unwrap_or_default(),
            recipe.tags.as_deref().unwrap_or_default()
        )
        .to_lowercase(),
        DietScope::Instructions => recipe.instructions.to_lowercase(),
    };

    !rule.keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn passes_meal_type(recipe: &StructuredRecipe, meal_type: Option<&str>) -> bool {
    let Some(meal_type) = meal_type else { return true };
    let wanted = meal_type.to_lowercase();

    let category = recipe.category.as_deref().unwrap_or_default().to_lowercase();
    if category.contains(&wanted) {
        return true;
    }

    let keywords = MEAL_TYPE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, keywords)| *keywords)
        .unwrap_or_default();
    let title = recipe.title.to_lowercase();
    let tags = recipe.tags.as_deref().unwrap_or_default().to_lowercase();

    keywords
        .iter()
        .any(|keyword| title.contains(keyword) || tags.contains(keyword))
}

fn passes_cuisine(recipe: &StructuredRecipe, cuisine: Option<&str>) -> bool {
    let Some(cuisine) = cuisine else { return true };

    let area_matches = recipe
        .area
        .as_deref()
        .is_some_and(|area| area.eq_ignore_ascii_case(cuisine));
    let tags_match = recipe
        .tags
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .contains(&cuisine.to_lowercase());

    area_matches || tags_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn recipe(
        title: &str,
        category: Option<&str>,
        area: Option<&str>,
        tags: Option<&str>,
        ingredient_count: usize,
        instructions: &str,
    ) -> StructuredRecipe {
        StructuredRecipe {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            instructions: instructions.to_string(),
            category: category.map(String::from),
            area: area.map(String::from),
            tags: tags.map(String::from),
            thumbnail: None,
            ingredients: (0..ingredient_count)
                .map(|i| Ingredient::named(format!("ingredient {i}")))
                .collect(),
        }
    }

    #[test]
    fn test_unconfigured_filter_keeps_everything() {
        let recipes = vec![
            recipe("A", Some("Beef"), None, None, 3, "Cook."),
            recipe("B", None, None, None, 3, "Cook."),
        ];
        let kept = apply_filters(recipes.clone(), &PreferenceFilter::default());
        assert_eq!(kept, recipes);
    }

    #[test]
    fn test_vegetarian_drops_meat_categories() {
        let prefs = PreferenceFilter {
            dietary_preference: Some("Vegetarian".to_string()),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Stew", Some("Beef"), None, None, 4, "Cook."),
            recipe("Salad", Some("Vegetarian"), None, None, 4, "Toss."),
            recipe("Curry", Some("Side"), None, Some("Chicken,Spicy"), 4, "Cook."),
        ];

        let kept = apply_filters(recipes, &prefs);
        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Salad"]);
    }

    #[test]
    fn test_gluten_free_scans_instructions() {
        let prefs = PreferenceFilter {
            dietary_preference: Some("gluten-free".to_string()),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Cake", None, None, None, 4, "Mix the flour and bake."),
            recipe("Roast", None, None, None, 4, "Roast the vegetables."),
        ];

        let kept = apply_filters(recipes, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Roast");
    }

    #[test]
    fn test_unknown_diet_imposes_no_constraint() {
        let prefs = PreferenceFilter {
            dietary_preference: Some("pescatarian".to_string()),
            ..Default::default()
        };
        let recipes = vec![recipe("Stew", Some("Beef"), None, None, 4, "Cook.")];
        assert_eq!(apply_filters(recipes, &prefs).len(), 1);
    }

    #[test]
    fn test_meal_type_matches_category_or_keywords() {
        let prefs = PreferenceFilter {
            meal_type: Some("Breakfast".to_string()),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Full English", Some("Breakfast"), None, None, 6, "Fry."),
            recipe("Morning Oats", Some("Misc"), None, None, 3, "Soak."),
            recipe("Beef Wellington", Some("Beef"), None, None, 9, "Roast."),
        ];

        let kept = apply_filters(recipes, &prefs);
        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Full English", "Morning Oats"]);
    }

    #[test]
    fn test_cuisine_matches_area_or_tags() {
        let prefs = PreferenceFilter {
            cuisine: Some("italian".to_string()),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Carbonara", None, Some("Italian"), None, 5, "Cook."),
            recipe("Fusion Bowl", None, Some("American"), Some("Italian,Fusion"), 5, "Cook."),
            recipe("Tacos", None, Some("Mexican"), None, 5, "Cook."),
        ];

        let kept = apply_filters(recipes, &prefs);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_skill_level_drops_other_difficulties() {
        let prefs = PreferenceFilter {
            skill_level: Some(Difficulty::Beginner),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Simple", None, None, None, 3, "Stir."),
            recipe("Involved", None, None, None, 8, "Cook."),
            recipe("Epic", None, None, None, 12, "Cook."),
        ];

        let kept = apply_filters(recipes, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Simple");
    }

    #[test]
    fn test_cooking_time_compares_bucket_identity() {
        let prefs = PreferenceFilter {
            cooking_time: Some(TimeBucket::Min30To60),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Braise", None, None, None, 9, "Simmer gently."),
            recipe("Snack", None, None, None, 2, "Assemble."),
        ];

        let kept = apply_filters(recipes, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Braise");
    }

    #[test]
    fn test_axes_combine_with_and() {
        let prefs = PreferenceFilter {
            cuisine: Some("Italian".to_string()),
            skill_level: Some(Difficulty::Beginner),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Carbonara", None, Some("Italian"), None, 12, "Cook."),
            recipe("Bruschetta", None, Some("Italian"), None, 4, "Assemble."),
        ];

        let kept = apply_filters(recipes, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Bruschetta");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let prefs = PreferenceFilter {
            skill_level: Some(Difficulty::Beginner),
            ..Default::default()
        };
        let recipes = vec![
            recipe("Simple", None, None, None, 3, "Stir."),
            recipe("Epic", None, None, None, 12, "Cook."),
        ];

        let once = apply_filters(recipes, &prefs);
        let twice = apply_filters(once.clone(), &prefs);
        assert_eq!(once, twice);
    }
}
