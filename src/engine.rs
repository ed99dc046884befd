//! Search orchestration: cache lookup, corpus fetch, filtering, scoring,
//! formatting and ranking.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};

use crate::builder::SearchEngineBuilder;
use crate::cache::{CacheGateway, CachedPayload};
use crate::format::format_recipe;
use crate::model::{RawRecipe, RecipeSummary};
use crate::normalize::normalize;
use crate::score::relevance;
use crate::source::RecipeSource;

/// Upper bound on the number of results returned by a search.
pub const MAX_RESULTS: usize = 12;

/// Lifetime of every cache entry written by the engine.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

const SEARCH_KEY_PREFIX: &str = "receitas:";
const BATCH_KEY_PREFIX: &str = "receitas_busca_lote_";

/// Ranked recipe search over an upstream corpus, with a TTL cache in front.
///
/// Both collaborators are injected: the [`RecipeSource`] supplying the
/// corpus and the [`CacheGateway`] holding past results. A search is
/// request-scoped and holds no lock across the fetch-then-store sequence;
/// two concurrent misses for the same query may both fetch and both write,
/// and the last write wins.
pub struct RecipeSearchEngine {
    source: Arc<dyn RecipeSource>,
    cache: Arc<dyn CacheGateway>,
}

impl RecipeSearchEngine {
    pub fn new(source: Arc<dyn RecipeSource>, cache: Arc<dyn CacheGateway>) -> Self {
        Self { source, cache }
    }

    /// Start building an engine with the default HTTP source and in-memory
    /// cache.
    pub fn builder() -> SearchEngineBuilder {
        SearchEngineBuilder::default()
    }

    /// Search the corpus for recipes matching `query`, ranked by relevance.
    ///
    /// Returns at most [`MAX_RESULTS`] summaries, sorted by descending
    /// score; equal scores keep corpus order. This never fails: upstream
    /// errors, an empty corpus and malformed records all degrade to a
    /// shorter (possibly empty) list, with the condition logged.
    ///
    /// Callers are expected to reject empty queries beforehand; if one gets
    /// through anyway it is reported and answered with an empty list rather
    /// than matching the whole corpus.
    pub async fn search(&self, query: &str) -> Vec<RecipeSummary> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            warn!("empty search query after normalization, returning no results");
            return Vec::new();
        }

        let cache_key = format!("{SEARCH_KEY_PREFIX}{normalized}");
        if let Some(CachedPayload::Results(cached)) = self.cache.get(&cache_key) {
            return cached;
        }

        let corpus = match self.source.fetch_all().await {
            Ok(corpus) => corpus,
            Err(e) => {
                error!("recipe search for {query:?} failed: {e}");
                return Vec::new();
            }
        };
        if corpus.is_empty() {
            info!("upstream returned no recipes for query {query:?}");
            return Vec::new();
        }

        let results = rank(&corpus, &normalized);

        if !self.cache.put(
            &cache_key,
            CachedPayload::Results(results.clone()),
            CACHE_TTL,
        ) {
            warn!("failed to cache results for {query:?}");
        }

        results
    }

    /// Run one search per query and keep the best hit of each.
    ///
    /// Queries are processed in the given order; queries with no results
    /// are omitted from the map. Per-query cache entries written by
    /// [`search`](Self::search) are reused, and the composite map itself is
    /// cached under a key derived from the joined query list, so a repeat
    /// of the same batch short-circuits entirely.
    pub async fn search_batch(&self, queries: &[String]) -> BTreeMap<String, RecipeSummary> {
        let cache_key = format!("{BATCH_KEY_PREFIX}{:x}", batch_hash(queries));
        if let Some(CachedPayload::Batch(cached)) = self.cache.get(&cache_key) {
            return cached;
        }

        let mut found = BTreeMap::new();
        for query in queries {
            let mut results = self.search(query).await;
            if !results.is_empty() {
                found.insert(query.clone(), results.swap_remove(0));
            }
        }

        if !self
            .cache
            .put(&cache_key, CachedPayload::Batch(found.clone()), CACHE_TTL)
        {
            warn!("failed to cache batch results for {queries:?}");
        }

        found
    }
}

/// Filter, score, format, rank and truncate the corpus for one query.
fn rank(corpus: &[RawRecipe], normalized_query: &str) -> Vec<RecipeSummary> {
    let mut scored: Vec<(u32, RecipeSummary)> = corpus
        .iter()
        .filter_map(|record| {
            let name = normalize(record.name.as_deref()?);
            let ingredients = normalize(record.ingredients.as_deref()?);
            if !name.contains(normalized_query) && !ingredients.contains(normalized_query) {
                return None;
            }
            let score = relevance(&name, &ingredients, normalized_query);
            format_recipe(record).map(|summary| (score, summary))
        })
        .collect();

    // sort_by is stable, so equal scores keep filter order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .map(|(_, summary)| summary)
        .take(MAX_RESULTS)
        .collect()
}

fn batch_hash(queries: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    queries.join("_").hash(&mut hasher);
    hasher.finish()
}
