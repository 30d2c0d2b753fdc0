//! TheCocktailDB HTTP client

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use super::cocktail::{Cocktail, DrinksEnvelope};
use crate::{log_api_request, log_api_result};

/// Read-only source of cocktail records
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// One random cocktail; `None` when the API answers `{"drinks": null}`
    async fn random_cocktail(&self) -> Result<Option<Cocktail>>;

    /// Cocktails whose name matches `query`; no matches is an empty list
    async fn search_cocktails(&self, query: &str) -> Result<Vec<Cocktail>>;
}

#[derive(Clone)]
pub struct CocktailClient {
    http: Client,
    base_url: String,
}

impl CocktailClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cocktail-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_drinks(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Cocktail>> {
        let url = format!("{}/{}", self.base_url, path);
        let envelope: DrinksEnvelope = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.into_cocktails())
    }
}

#[async_trait]
impl RecipeSource for CocktailClient {
    async fn random_cocktail(&self) -> Result<Option<Cocktail>> {
        log_api_request!("random", base_url = %self.base_url);
        let result = self.get_drinks("random.php", &[]).await;
        log_api_result!("random", result);
        Ok(result?.into_iter().next())
    }

    async fn search_cocktails(&self, query: &str) -> Result<Vec<Cocktail>> {
        log_api_request!("search", query);
        let result = self.get_drinks("search.php", &[("s", query)]).await;
        log_api_result!("search", result);
        let cocktails = result?;
        tracing::debug!(query, matches = cocktails.len(), "Search answered");
        Ok(cocktails)
    }
}
