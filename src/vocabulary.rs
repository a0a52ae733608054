//! Known pantry terms recognized in free-text chat input.
//!
//! The table is deliberately broad and flat: recognition is plain substring
//! containment, so multi-word entries ("green onion", "sweet potato") must
//! be claimed before their single-word suffixes.

/// Ingredient words the pantry extractor recognizes.
pub static PANTRY_TERMS: &[&str] = &[
    "eggs",
    "egg",
    "chicken",
    "beef",
    "fish",
    "rice",
    "potato",
    "onion",
    "tomato",
    "cheese",
    "milk",
    "bread",
    "pasta",
    "carrot",
    "spinach",
    "pepper",
    "mushroom",
    "garlic",
    "beans",
    "lentil",
    "tofu",
    "paneer",
    "shrimp",
    "lamb",
    "broccoli",
    "cauliflower",
    "corn",
    "peas",
    "avocado",
    "bacon",
    "sausage",
    "turkey",
    "duck",
    "salmon",
    "tuna",
    "apple",
    "banana",
    "orange",
    "lemon",
    "lime",
    "strawberry",
    "blueberry",
    "yogurt",
    "cream",
    "butter",
    "flour",
    "sugar",
    "honey",
    "oats",
    "coconut",
    "almond",
    "walnut",
    "cashew",
    "pistachio",
    "lettuce",
    "cabbage",
    "zucchini",
    "eggplant",
    "pumpkin",
    "sweet potato",
    "chickpea",
    "quinoa",
    "barley",
    "basil",
    "cilantro",
    "parsley",
    "mint",
    "rosemary",
    "thyme",
    "sage",
    "dill",
    "coriander",
    "mustard",
    "kale",
    "arugula",
    "rocket",
    "radish",
    "turnip",
    "celery",
    "leek",
    "scallion",
    "green onion",
    "chive",
    "artichoke",
    "asparagus",
    "beet",
    "brussels sprout",
    "cucumber",
    "date",
    "fig",
    "grape",
    "kiwi",
    "mango",
    "melon",
    "papaya",
    "peach",
    "pear",
    "pineapple",
    "plum",
    "pomegranate",
    "raspberry",
    "watermelon",
];

/// Pull recognized ingredient terms out of free text.
///
/// Longer terms are claimed first so "green onion" wins over "onion"; a
/// term that overlaps one already found (containing it or contained by it)
/// is skipped. Returned in claim order.
pub fn extract_pantry_terms(input: &str) -> Vec<String> {
    let input = input.to_lowercase();

    let mut by_length: Vec<&str> = PANTRY_TERMS.to_vec();
    by_length.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut found: Vec<String> = Vec::new();
    for term in by_length {
        if input.contains(term)
            && !found
                .iter()
                .any(|existing| existing.contains(term) || term.contains(existing.as_str()))
        {
            found.push(term.to_string());
        }
    }
    found
}
