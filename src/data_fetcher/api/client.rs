use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use super::fetch_utils::fetch_json;
use super::http_client::create_http_client;
use super::urls::{Endpoint, build_competition_url};

/// Client for the upstream football-data API.
///
/// Holds the shared reqwest client, the base URL and the API key. Cloning is
/// cheap: the reqwest client is reference counted internally.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("api_base_url", &self.api_base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl UpstreamClient {
    pub fn new(client: Client, api_base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_base_url,
            api_key,
        }
    }

    /// Builds a client (and its underlying HTTP client) from the configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            config.api_base_url(),
            config.api_key.clone(),
        ))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches the raw standings document of a competition.
    pub async fn fetch_standings(&self, competition_id: u32) -> Result<Value, AppError> {
        self.fetch(competition_id, Endpoint::Standings).await
    }

    /// Fetches the raw top scorers document of a competition.
    pub async fn fetch_scorers(&self, competition_id: u32) -> Result<Value, AppError> {
        self.fetch(competition_id, Endpoint::Scorers).await
    }

    /// Issues one GET for the given competition sub-resource.
    #[instrument(skip(self))]
    pub async fn fetch(&self, competition_id: u32, endpoint: Endpoint) -> Result<Value, AppError> {
        let url = build_competition_url(&self.api_base_url, competition_id, endpoint);
        fetch_json(&self.client, &url, self.api_key.as_deref()).await
    }
}
