//! Derived recipe metadata: difficulty and estimated cooking time, computed
//! heuristically from the ingredient count and instruction text. Pure
//! functions; nothing here is stored on the recipe.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::StructuredRecipe;

/// "1.", "2." style step markers inside instruction text.
static STEP_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.").unwrap());

/// Skill level required by a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Ordered set of estimated cooking-time buckets. The `Display` labels are
/// the canonical strings shown to users and accepted back by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeBucket {
    Min15To30,
    Min30To45,
    Min30To60,
    Over60,
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeBucket::Min15To30 => "15-30 minutes",
            TimeBucket::Min30To45 => "30-45 minutes",
            TimeBucket::Min30To60 => "30-60 minutes",
            TimeBucket::Over60 => "Over 60 minutes",
        };
        f.write_str(label)
    }
}

impl FromStr for TimeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "15-30 minutes" => Ok(TimeBucket::Min15To30),
            "30-45 minutes" => Ok(TimeBucket::Min30To45),
            "30-60 minutes" => Ok(TimeBucket::Min30To60),
            "over 60 minutes" => Ok(TimeBucket::Over60),
            other => Err(format!("unknown time bucket: {other}")),
        }
    }
}

/// Derived metadata for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub difficulty: Difficulty,
    pub estimated_time: TimeBucket,
}

/// Number of segments produced by splitting the instructions on numbered
/// step markers. Splitting always yields at least one segment; empty
/// instructions count as a single (empty) step segment.
fn step_count(instructions: &str) -> usize {
    STEP_MARKER.split(instructions).count()
}

/// Classify a recipe by ingredient count and instruction shape.
///
/// Difficulty tiers are checked from Advanced down; the time bucket is the
/// first keyword trigger that fires, falling through to the 30-45 minute
/// bucket when nothing else applies.
pub fn classify(recipe: &StructuredRecipe) -> Classification {
    let ingredient_count = recipe.ingredients.len();
    let steps = step_count(&recipe.instructions);

    let difficulty = if ingredient_count > 10 || steps > 8 {
        Difficulty::Advanced
    } else if ingredient_count > 6 || steps > 5 {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    };

    let text = recipe.instructions.to_lowercase();
    let estimated_time = if text.contains("overnight") || text.contains("hours") {
        TimeBucket::Over60
    } else if text.contains("simmer") || text.contains("bake") || ingredient_count > 8 {
        TimeBucket::Min30To60
    } else if text.contains("quick") || ingredient_count <= 5 {
        TimeBucket::Min15To30
    } else {
        TimeBucket::Min30To45
    };

    Classification {
        difficulty,
        estimated_time,
    }
}
