//! Tolerant parser for model-generated recipe text.
//!
//! Generation prompts ask for a strict Title/Ingredients/Instructions
//! layout, but models drift, so extraction is best-effort and never fails.
//! Whether a parse is *good enough* is a separate acceptance policy applied
//! by callers ([`is_acceptable`]); the parser itself always returns what it
//! could find.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Ingredient, StructuredRecipe, MAX_INGREDIENT_SLOTS};

/// `Title: ...` line anywhere in the block.
static TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?im)^title:\s*(.+)$").unwrap());

/// Ingredients section: from an `Ingredients` header up to the next
/// Instructions/Steps header, blank line, or end of block.
static INGREDIENTS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)ingredients[:\-\n]*(.*?)(?:instructions[:\-\n]|steps[:\-\n]|\n\n|$)")
        .unwrap()
});

/// Instructions section: from an `Instructions` or `Steps` header to the
/// end of the block.
static INSTRUCTIONS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(?:instructions|steps)[:\-\n]*(.*)").unwrap());

/// Leading bullet/numbering markup on an ingredient line.
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*\d.\s]+").unwrap());

/// A line that is itself an instructions header, leaked into the
/// ingredients section.
static INSTRUCTIONS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^instructions?").unwrap());

/// Horizontal-rule delimiter between recipes in a batch: a line of three or
/// more hyphens on its own.
static BLOCK_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*-{3,}\s*$").unwrap());

static NEXT_RECIPE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Best-effort extraction from one block of generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Category/area/tags stamped onto recipes synthesized from generated
/// text, recording where they came from.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Option<String>,
}

/// Split model output into candidate recipe blocks on `---` rule lines,
/// trimming and discarding empty segments. Each surviving segment is parsed
/// independently; one bad segment never affects its neighbors.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Parse one block into title, ingredient lines, and instruction text.
///
/// Title falls back to the block's first line when no `Title:` marker is
/// present. Missing sections come back empty rather than failing.
pub fn parse_block(block: &str) -> ParsedRecipe {
    let title = TITLE
        .captures(block)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| first_line(block));

    let ingredients = INGREDIENTS_SECTION
        .captures(block)
        .and_then(|captures| captures.get(1))
        .map(|m| ingredient_lines(m.as_str()))
        .unwrap_or_default();

    let instructions = INSTRUCTIONS_SECTION
        .captures(block)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| after_ingredients(block));

    ParsedRecipe {
        title,
        ingredients,
        instructions,
    }
}

/// Acceptance policy for parsed blocks: a usable recipe has a title, more
/// than one ingredient, and a non-trivial instruction body. Rejected
/// parses are reported by omission at the batch level.
pub fn is_acceptable(parsed: &ParsedRecipe) -> bool {
    !parsed.title.is_empty()
        && parsed.ingredients.len() > 1
        && parsed.instructions.chars().count() > 10
}

impl ParsedRecipe {
    /// Convert into the canonical schema.
    ///
    /// Ids combine the `ai` source tag with a process-monotonic sequence
    /// and the block's batch index, so synthesized ids collide neither with
    /// corpus ids nor with each other. Ingredients beyond the slot cap are
    /// dropped; generated text carries no measures.
    pub fn into_recipe(
        self,
        index: usize,
        provenance: &Provenance,
        thumbnail: Option<String>,
    ) -> StructuredRecipe {
        let seq = NEXT_RECIPE_SEQ.fetch_add(1, Ordering::Relaxed);
        let ingredients = self
            .ingredients
            .into_iter()
            .take(MAX_INGREDIENT_SLOTS)
            .map(Ingredient::named)
            .collect();

        StructuredRecipe {
            id: format!("ai-{seq}-{index}"),
            title: self.title,
            instructions: self.instructions,
            category: provenance.category.clone(),
            area: provenance.area.clone(),
            tags: provenance.tags.clone(),
            thumbnail,
            ingredients: StructuredRecipe::dense_ingredients(ingredients),
        }
    }
}

fn first_line(block: &str) -> String {
    block.lines().next().unwrap_or("").trim().to_string()
}

fn ingredient_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(|line| BULLET.replace(line, "").trim().to_string())
        .filter(|line| line.chars().count() > 1 && !INSTRUCTIONS_LINE.is_match(line))
        .collect()
}

/// Fallback when no Instructions/Steps header exists: everything after the
/// ingredients section.
fn after_ingredients(block: &str) -> String {
    INGREDIENTS_SECTION
        .find(block)
        .map(|m| block[m.end()..].trim().to_string())
        .unwrap_or_default()
}
