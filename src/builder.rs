use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheGateway, MemoryStore};
use crate::engine::RecipeSearchEngine;
use crate::error::Error;
use crate::source::{HttpRecipeSource, RecipeSource};

/// Builder for wiring up a [`RecipeSearchEngine`].
///
/// By default the engine talks to the HTTP recipe API at the configured
/// base URL and caches in an in-process [`MemoryStore`]; both collaborators
/// can be replaced, which is how tests inject fakes.
///
/// # Example
/// ```no_run
/// use receitas_search::RecipeSearchEngine;
/// use std::time::Duration;
///
/// # fn build() -> Result<(), receitas_search::Error> {
/// let engine = RecipeSearchEngine::builder()
///     .base_url("https://api.example.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SearchEngineBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    source: Option<Arc<dyn RecipeSource>>,
    cache: Option<Arc<dyn CacheGateway>>,
}

impl SearchEngineBuilder {
    /// Set the base URL of the upstream recipe API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests to the recipe API.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom recipe source instead of the HTTP API.
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a custom cache store instead of the in-process default.
    pub fn cache(mut self, cache: Arc<dyn CacheGateway>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the engine.
    ///
    /// Fails when neither a base URL nor a custom source was provided.
    pub fn build(self) -> Result<RecipeSearchEngine, Error> {
        let source = match (self.source, self.base_url) {
            (Some(source), _) => source,
            (None, Some(base_url)) => {
                Arc::new(HttpRecipeSource::new(base_url, self.timeout)) as Arc<dyn RecipeSource>
            }
            (None, None) => {
                return Err(Error::Builder(
                    "either a base URL or a custom recipe source is required".to_string(),
                ))
            }
        };
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn CacheGateway>);

        Ok(RecipeSearchEngine::new(source, cache))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url_or_source() {
        let result = RecipeSearchEngine::builder().build();
        assert!(matches!(result, Err(Error::Builder(_))));
    }

    #[test]
    fn test_build_with_base_url() {
        let result = RecipeSearchEngine::builder()
            .base_url("http://localhost:9999")
            .timeout(Duration::from_secs(5))
            .build();
        assert!(result.is_ok());
    }
}
