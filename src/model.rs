use serde::{Deserialize, Serialize};

/// A recipe record as returned by the upstream API.
///
/// The upstream payload is loosely typed, so every field is optional at the
/// wire boundary. Records missing `name` or `ingredients` are not valid
/// recipes and get dropped during filtering and formatting.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub name: Option<String>,
    /// Comma-separated free text, e.g. "200g farinha, 2 ovos, sal"
    pub ingredients: Option<String>,
    pub id: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub preparation_steps: Option<String>,
}

/// One ingredient of a formatted recipe, with the measure extracted from
/// its free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientMeasure {
    pub name: String,
    pub measure: String,
}

/// Nutrition placeholder. The upstream data carries no nutrition facts, so
/// all values are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// The public output shape of a search: a formatted recipe summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Upstream identifier, or a generated one when the record has none
    pub id: String,
    pub name: String,
    /// Image URL, or a placeholder when the record has none
    pub thumbnail: String,
    pub category: String,
    pub area: String,
    pub ingredients: Vec<IngredientMeasure>,
    pub instructions: String,
    /// Estimated preparation time, clamped to 15..=120 minutes
    pub prep_time_minutes: u32,
    /// Human-readable rendering of `prep_time_minutes`
    pub prep_time_text: String,
    pub servings: u32,
    pub nutrition: NutritionInfo,
    pub url: String,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
}
