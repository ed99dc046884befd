//! Formatting of raw upstream records into [`RecipeSummary`] values.

use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::model::{IngredientMeasure, NutritionInfo, RawRecipe, RecipeSummary};
use crate::normalize::normalize;

const PLACEHOLDER_THUMB: &str =
    "https://via.placeholder.com/350x250.png?text=Image+not+available";
const DEFAULT_CATEGORY: &str = "Uncategorized";
const DEFAULT_AREA: &str = "Brasileira";
const DEFAULT_MEASURE: &str = "to taste";
const SERVINGS: u32 = 4;

/// Ingredients that disqualify a recipe from being vegetarian.
const MEAT_WORDS: &[&str] = &[
    "carne", "frango", "peixe", "atum", "bacon", "presunto", "salsicha", "linguica",
];

/// Ingredients that disqualify a recipe from being vegan.
const ANIMAL_PRODUCT_WORDS: &[&str] = &[
    "carne", "frango", "peixe", "atum", "bacon", "presunto", "leite", "ovo", "mel",
    "queijo", "manteiga", "iogurte",
];

/// Ingredients that disqualify a recipe from being gluten-free.
const GLUTEN_WORDS: &[&str] = &[
    "farinha de trigo", "trigo", "aveia", "cevada", "malte", "centeio",
];

fn measure_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\d+\s*(kg|g|ml|l|xícaras?|colher(?:es)?|unidades?)")
            .expect("valid measure pattern")
    })
}

fn number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("valid number pattern"))
}

/// Extract the measure from an ingredient description.
///
/// Tries a quantity-plus-unit match first ("200g", "2 xícaras"), then a bare
/// number, and falls back to "to taste" when the text carries no quantity.
pub fn extract_measure(ingredient: &str) -> String {
    if ingredient.is_empty() {
        return DEFAULT_MEASURE.to_string();
    }
    if let Some(m) = measure_pattern().find(ingredient) {
        return m.as_str().to_string();
    }
    if let Some(m) = number_pattern().find(ingredient) {
        return m.as_str().to_string();
    }
    DEFAULT_MEASURE.to_string()
}

/// Estimate preparation time in minutes from the instructions text.
///
/// Each sentence-terminating period or newline counts as one step at ten
/// minutes, clamped to 15..=120.
pub fn estimate_prep_time(instructions: &str) -> u32 {
    let steps = instructions.matches('.').count() + instructions.matches('\n').count();
    (steps as u32 * 10).clamp(15, 120)
}

/// Render an estimated preparation time as text: "45 minutes", "1h 30min",
/// "2h".
pub fn format_prep_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{hours}h {rest}min")
    } else {
        format!("{hours}h")
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Map a raw upstream record into the public summary shape.
///
/// Returns `None` for records missing `name` or `ingredients`; such records
/// are dropped silently and never affect their siblings. All defaults for
/// optional fields are applied here.
pub fn format_recipe(raw: &RawRecipe) -> Option<RecipeSummary> {
    let name = raw.name.as_deref()?;
    let ingredients_text = raw.ingredients.as_deref()?;

    let ingredients: Vec<IngredientMeasure> = ingredients_text
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| IngredientMeasure {
            name: piece.to_string(),
            measure: extract_measure(piece),
        })
        .collect();

    let instructions = raw.preparation_steps.clone().unwrap_or_default();
    let minutes = estimate_prep_time(&instructions);

    let normalized_ingredients = normalize(ingredients_text);
    let has_ingredients = !normalized_ingredients.is_empty();

    Some(RecipeSummary {
        id: raw
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: name.to_string(),
        thumbnail: raw
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string()),
        category: raw
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        area: DEFAULT_AREA.to_string(),
        ingredients,
        prep_time_minutes: minutes,
        prep_time_text: format_prep_time(minutes),
        servings: SERVINGS,
        nutrition: NutritionInfo::default(),
        url: raw.image_url.clone().unwrap_or_default(),
        vegetarian: has_ingredients && !contains_any(&normalized_ingredients, MEAT_WORDS),
        vegan: has_ingredients
            && !contains_any(&normalized_ingredients, ANIMAL_PRODUCT_WORDS),
        gluten_free: has_ingredients
            && !contains_any(&normalized_ingredients, GLUTEN_WORDS),
        instructions,
    })
}
