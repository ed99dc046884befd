//! Upstream recipe API boundary.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::Error;
use crate::model::RawRecipe;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (compatible; ReceitasSearchBot/1.0)";

/// Read-only access to the full recipe corpus.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch every recipe the upstream knows about.
    async fn fetch_all(&self) -> Result<Vec<RawRecipe>, Error>;
}

/// [`RecipeSource`] over the HTTP recipe API.
pub struct HttpRecipeSource {
    client: Client,
    base_url: String,
}

impl HttpRecipeSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecipe>, Error> {
        let url = format!("{}/receitas/todas", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let corpus: Vec<RawRecipe> = response.json().await?;
        debug!("fetched {} recipes from {url}", corpus.len());
        Ok(corpus)
    }
}
