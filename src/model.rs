use serde::{Deserialize, Serialize};

use crate::classify::{classify, Difficulty, TimeBucket};
use crate::error::EngineError;

/// Number of ingredient slots in the corpus wire format
/// (`strIngredient1`..`strIngredient20`). The cap is a wire-format
/// artifact; core code works with a dense ordered list and only meets the
/// slot numbering at the corpus boundary.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One ingredient entry: a name plus a free-form measure ("1 cup", "2 tbsp",
/// or empty when the source gave none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            measure: String::new(),
        }
    }
}

/// Canonical recipe representation shared by the corpus pipeline and the
/// generated-text pipeline.
///
/// Instances are immutable once built by either pipeline; downstream code
/// only reads them. Difficulty and estimated time are derived from the
/// ingredient list and instruction text on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRecipe {
    /// Opaque unique id, corpus-issued ("52940") or synthesized ("ai-3-0")
    pub id: String,
    pub title: String,
    /// Free-text instructions; the empty string is the canonical "unknown"
    #[serde(default)]
    pub instructions: String,
    pub category: Option<String>,
    pub area: Option<String>,
    /// Comma-separated classification tags, as the corpus delivers them
    pub tags: Option<String>,
    /// `None` renders a deterministic placeholder downstream
    pub thumbnail: Option<String>,
    /// Ordered for display; at most [`MAX_INGREDIENT_SLOTS`] entries, every
    /// name non-empty after trimming
    pub ingredients: Vec<Ingredient>,
}

impl StructuredRecipe {
    /// Drop blank ingredient names and enforce the slot cap. Both pipelines
    /// route their ingredient lists through here at construction time.
    pub fn dense_ingredients(raw: Vec<Ingredient>) -> Vec<Ingredient> {
        raw.into_iter()
            .filter(|ingredient| !ingredient.name.trim().is_empty())
            .take(MAX_INGREDIENT_SLOTS)
            .collect()
    }

    /// Slot-indexed ingredient access in the corpus wire numbering
    /// (1..=20). `Ok(None)` for a valid but unfilled slot; out-of-range
    /// slots are a caller bug and fail fast.
    pub fn ingredient_slot(&self, slot: usize) -> Result<Option<&Ingredient>, EngineError> {
        if slot == 0 || slot > MAX_INGREDIENT_SLOTS {
            return Err(EngineError::SlotOutOfRange(slot));
        }
        Ok(self.ingredients.get(slot - 1))
    }

    /// Derived difficulty; recomputed on each call.
    pub fn difficulty(&self) -> Difficulty {
        classify(self).difficulty
    }

    /// Derived cooking-time bucket; recomputed on each call.
    pub fn estimated_time(&self) -> TimeBucket {
        classify(self).estimated_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StructuredRecipe {
        StructuredRecipe {
            id: "1".to_string(),
            title: "Toast".to_string(),
            instructions: String::new(),
            category: None,
            area: None,
            tags: None,
            thumbnail: None,
            ingredients: vec![Ingredient::named("bread"), Ingredient::named("butter")],
        }
    }

    #[test]
    fn test_dense_ingredients_drops_blanks_and_caps() {
        let mut raw: Vec<Ingredient> = (0..25).map(|i| Ingredient::named(format!("item {i}"))).collect();
        raw.insert(3, Ingredient::named("   "));
        raw.insert(7, Ingredient::named(""));

        let dense = StructuredRecipe::dense_ingredients(raw);
        assert_eq!(dense.len(), MAX_INGREDIENT_SLOTS);
        assert!(dense.iter().all(|i| !i.name.trim().is_empty()));
        assert_eq!(dense[0].name, "item 0");
    }

    #[test]
    fn test_ingredient_slot_valid_range() {
        let recipe = sample();
        assert_eq!(recipe.ingredient_slot(1).unwrap().unwrap().name, "bread");
        assert_eq!(recipe.ingredient_slot(2).unwrap().unwrap().name, "butter");
        assert!(recipe.ingredient_slot(3).unwrap().is_none());
        assert!(recipe.ingredient_slot(20).unwrap().is_none());
    }

    #[test]
    fn test_ingredient_slot_out_of_range_fails_fast() {
        let recipe = sample();
        assert!(matches!(
            recipe.ingredient_slot(0),
            Err(EngineError::SlotOutOfRange(0))
        ));
        assert!(matches!(
            recipe.ingredient_slot(21),
            Err(EngineError::SlotOutOfRange(21))
        ));
    }
}
