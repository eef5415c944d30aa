pub mod api;
pub mod models;
pub mod processors;

pub use api::{Endpoint, UpstreamClient};
pub use models::{ScorerRow, ScorersResponse, StandingsResponse, StandingsRow};
pub use processors::{to_scorers, to_standings};

use crate::error::AppError;
use tracing::info;

/// Fetches and flattens the league table of a competition.
pub async fn fetch_standings_rows(
    upstream: &UpstreamClient,
    competition_id: u32,
) -> Result<Vec<StandingsRow>, AppError> {
    let raw = upstream.fetch_standings(competition_id).await?;
    let rows = to_standings(&raw)?;
    info!(
        "Transformed {} standings rows for competition {}",
        rows.len(),
        competition_id
    );
    Ok(rows)
}

/// Fetches and flattens the top scorers of a competition.
pub async fn fetch_scorer_rows(
    upstream: &UpstreamClient,
    competition_id: u32,
) -> Result<Vec<ScorerRow>, AppError> {
    let raw = upstream.fetch_scorers(competition_id).await?;
    let rows = to_scorers(&raw)?;
    info!(
        "Transformed {} scorer rows for competition {}",
        rows.len(),
        competition_id
    );
    Ok(rows)
}
