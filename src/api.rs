//! Recipe API client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::Error;
use crate::model::{RecipeDetail, RecipeSummary};

/// The remote recipe catalogue, seen from the stores.
///
/// Kept behind a trait so controllers stay transport-agnostic; the only
/// production implementation is [`HttpRecipeApi`].
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Full-text search, returning lightweight summaries.
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error>;

    /// Fetch one recipe's detail payload.
    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail, Error>;
}

/// JSON-over-HTTPS client for the recipe API.
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// Build a client against `base_url` (no trailing slash) with the
    /// given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, Error> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpRecipeApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `url` and decode the body, distinguishing transport, status
    /// and payload failures.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {url}");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error> {
        let url = format!("{}/search", self.base_url);
        self.get_json(&url, &[("q", query)]).await
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail, Error> {
        let url = format!("{}/recipes/{id}", self.base_url);
        self.get_json(&url, &[]).await
    }
}
