use crate::filters::PreferenceFilter;

/// System prompt for recipe-generation turns. The strict output format it
/// demands is what the tolerant parser undoes on the way back in.
pub const CHEF_SYSTEM_PROMPT: &str = "You are a helpful AI chef assistant. When asked for recipes, always return a list of 3 creative recipes in the strict format described by the user prompt.";

/// The per-recipe layout the model is asked to emit.
const RECIPE_FORMAT: &str = "Title: <Recipe Title>\nDescription: <Brief appetizing description>\nIngredients:\n- <ingredient 1>\n- <ingredient 2>\n...\nInstructions:\n1. <step 1>\n2. <step 2>\n...\nSeparate each recipe with\n---";

/// User prompt asking for recipes built around specific ingredients.
pub fn ingredient_prompt(terms: &[String]) -> String {
    format!(
        "List 3 creative recipes using the following ingredients: {}. For each recipe, use this format:\n{}",
        terms.join(", "),
        RECIPE_FORMAT
    )
}

/// User prompt asking for recipes matching declared preferences. Unset
/// axes are passed through empty; the model treats them as "any".
pub fn preference_prompt(prefs: &PreferenceFilter) -> String {
    format!(
        "Generate 3 creative recipes based on these preferences: Dietary: {}, Meal: {}, Cuisine: {}, Cooking Time: {}, Skill: {}, Additional: {}.\n\nPlease format your response strictly as follows for each recipe:\n{}",
        prefs.dietary_preference.as_deref().unwrap_or_default(),
        prefs.meal_type.as_deref().unwrap_or_default(),
        prefs.cuisine.as_deref().unwrap_or_default(),
        prefs
            .cooking_time
            .map(|bucket| bucket.to_string())
            .unwrap_or_default(),
        prefs
            .skill_level
            .map(|level| level.to_string())
            .unwrap_or_default(),
        prefs.additional_info.as_deref().unwrap_or_default(),
        RECIPE_FORMAT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Difficulty, TimeBucket};

    #[test]
    fn test_ingredient_prompt_lists_terms_and_format() {
        let prompt = ingredient_prompt(&["egg".to_string(), "spinach".to_string()]);
        assert!(prompt.contains("egg, spinach"));
        assert!(prompt.contains("Title: <Recipe Title>"));
        assert!(prompt.contains("---"));
    }

    #[test]
    fn test_preference_prompt_includes_configured_axes() {
        let prefs = PreferenceFilter {
            dietary_preference: Some("Vegan".to_string()),
            cuisine: Some("Indian".to_string()),
            cooking_time: Some(TimeBucket::Min15To30),
            skill_level: Some(Difficulty::Beginner),
            ..Default::default()
        };

        let prompt = preference_prompt(&prefs);
        assert!(prompt.contains("Dietary: Vegan"));
        assert!(prompt.contains("Cuisine: Indian"));
        assert!(prompt.contains("Cooking Time: 15-30 minutes"));
        assert!(prompt.contains("Skill: Beginner"));
        // unset axes come through empty, not as "None"
        assert!(prompt.contains("Meal: ,"));
    }
}
