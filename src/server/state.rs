use crate::config::Config;
use crate::data_fetcher::UpstreamClient;
use crate::error::AppError;
use crate::leagues::LeagueRegistry;
use std::sync::Arc;

/// Read-only state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<LeagueRegistry>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(registry: LeagueRegistry, upstream: UpstreamClient) -> Self {
        Self {
            registry: Arc::new(registry),
            upstream: Arc::new(upstream),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            config.league_registry()?,
            UpstreamClient::from_config(config)?,
        ))
    }

    /// Resolves the `league` query parameter. Absent and empty values are invalid.
    pub fn resolve_league(&self, league: Option<&str>) -> Result<u32, AppError> {
        match league {
            Some(name) if !name.is_empty() => self.registry.lookup(name),
            _ => Err(AppError::invalid_league(league)),
        }
    }
}
