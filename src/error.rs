use thiserror::Error;

/// Errors that can occur while talking to the upstream recipe API or
/// while wiring up an engine.
///
/// None of these ever reach callers of [`search`](crate::RecipeSearchEngine::search)
/// or [`search_batch`](crate::RecipeSearchEngine::search_batch); those
/// operations degrade to an empty result and log the condition instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The recipe API answered with a non-success status
    #[error("recipe API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The recipe API could not be reached
    #[error("failed to reach recipe API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("builder error: {0}")]
    Builder(String),
}
