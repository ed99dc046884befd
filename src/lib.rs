//! Recipe search with relevance ranking over an upstream recipe API.
//!
//! Given a free-text query, [`RecipeSearchEngine`] returns a ranked,
//! size-bounded list of [`RecipeSummary`] values, using a TTL cache to
//! avoid redundant corpus fetches. Search never fails from the caller's
//! point of view: upstream and cache problems are logged and degrade to an
//! empty result.

pub mod builder;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod score;
pub mod source;

use std::collections::BTreeMap;
use std::time::Duration;

pub use builder::SearchEngineBuilder;
pub use cache::{CacheGateway, CachedPayload, MemoryStore};
pub use config::SearchConfig;
pub use engine::{RecipeSearchEngine, CACHE_TTL, MAX_RESULTS};
pub use error::Error;
pub use model::{IngredientMeasure, NutritionInfo, RawRecipe, RecipeSummary};
pub use source::{HttpRecipeSource, RecipeSource};

/// Search for recipes using an engine configured from the environment.
///
/// Convenience wrapper: loads [`SearchConfig`], builds a default engine and
/// runs one search. Only configuration problems surface as errors; the
/// search itself always yields a (possibly empty) list.
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>, Error> {
    let config = SearchConfig::load()?;
    let engine = RecipeSearchEngine::builder()
        .base_url(config.base_url)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;
    Ok(engine.search(query).await)
}

/// Batch variant of [`search_recipes`]: best hit per query.
pub async fn search_recipes_batch(
    queries: &[String],
) -> Result<BTreeMap<String, RecipeSummary>, Error> {
    let config = SearchConfig::load()?;
    let engine = RecipeSearchEngine::builder()
        .base_url(config.base_url)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;
    Ok(engine.search_batch(queries).await)
}
