//! Relevance scoring between a normalized query and a recipe record.

/// Points for an exact match between query and recipe name.
const NAME_EXACT: u32 = 10;
/// Points per query word found in the recipe name.
const NAME_PARTIAL: u32 = 5;
/// Points for the whole query occurring in the ingredients.
const INGREDIENT_EXACT: u32 = 8;
/// Points per query word found in the ingredients.
const INGREDIENT_PARTIAL: u32 = 3;

/// Score how well a recipe matches a query. All inputs must already be
/// normalized (see [`crate::normalize::normalize`]).
///
/// The rules are additive:
/// - +10 when the name equals the query exactly
/// - +5 per whitespace-delimited query word occurring in the name
/// - +8 when the ingredients contain the whole query
/// - +3 per query word occurring in the ingredients
///
/// A score of 0 means no determinable relevance; whether such a record is
/// shown at all is decided by the engine's filter step, not here.
pub fn relevance(name: &str, ingredients: &str, query: &str) -> u32 {
    let mut score = 0;

    if name == query {
        score += NAME_EXACT;
    }
    if ingredients.contains(query) {
        score += INGREDIENT_EXACT;
    }

    // split_whitespace skips the empty tokens repeated spaces would produce
    for word in query.split_whitespace() {
        if name.contains(word) {
            score += NAME_PARTIAL;
        }
        if ingredients.contains(word) {
            score += INGREDIENT_PARTIAL;
        }
    }

    score
}
