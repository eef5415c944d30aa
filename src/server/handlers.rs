use super::error::ApiError;
use super::index::render_index;
use super::state::AppState;
use crate::data_fetcher::{
    Endpoint, ScorersResponse, StandingsResponse, fetch_scorer_rows, fetch_standings_rows,
};
use crate::leagues::LeagueEntry;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Serialize;
use tracing::{instrument, warn};

/// Raw `key=value` pairs of the query string, in request order.
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize)]
pub struct LeaguesResponse {
    pub leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.registry.names()))
}

/// `GET /api/standings?league=<name>`
#[instrument(skip(state, query))]
pub async fn standings(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let competition_id = resolve(&state, query, Endpoint::Standings)?;
    let standings = fetch_standings_rows(&state.upstream, competition_id)
        .await
        .map_err(|e| ApiError::from_app_error(Endpoint::Standings, e))?;
    Ok(Json(StandingsResponse { standings }))
}

/// `GET /api/scorers?league=<name>`
#[instrument(skip(state, query))]
pub async fn scorers(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<ScorersResponse>, ApiError> {
    let competition_id = resolve(&state, query, Endpoint::Scorers)?;
    let scorers = fetch_scorer_rows(&state.upstream, competition_id)
        .await
        .map_err(|e| ApiError::from_app_error(Endpoint::Scorers, e))?;
    Ok(Json(ScorersResponse { scorers }))
}

/// `GET /api/leagues`
pub async fn leagues(State(state): State<AppState>) -> Json<LeaguesResponse> {
    Json(LeaguesResponse {
        leagues: state.registry.entries().to_vec(),
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}

/// First value of the `league` key. Later repetitions are ignored.
fn first_league(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "league")
        .map(|(_, value)| value.as_str())
}

/// Validates the query against the registry before any upstream call is made.
/// An unparseable query string is treated like a missing league.
fn resolve(
    state: &AppState,
    query: Result<Query<QueryPairs>, QueryRejection>,
    endpoint: Endpoint,
) -> Result<u32, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            warn!("Unparseable {endpoint} query: {rejection}");
            Vec::new()
        }
    };

    state
        .resolve_league(first_league(&pairs))
        .map_err(|e| ApiError::from_app_error(endpoint, e))
}
