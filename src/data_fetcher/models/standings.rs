use super::common::NamedRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamTableRow {
    pub position: i32,
    pub team: NamedRef,
    #[serde(rename = "playedGames")]
    pub played_games: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    #[serde(rename = "goalsFor")]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: i32,
}

/// Flattened standings row returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: i32,
    pub team: String,
    pub played: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    #[serde(rename = "goalsFor")]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: i32,
}

impl From<UpstreamTableRow> for StandingsRow {
    fn from(row: UpstreamTableRow) -> Self {
        Self {
            position: row.position,
            team: row.team.name,
            played: row.played_games,
            won: row.won,
            draw: row.draw,
            lost: row.lost,
            points: row.points,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
        }
    }
}

/// Body of a successful `/api/standings` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingsRow>,
}
