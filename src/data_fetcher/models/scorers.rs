use super::common::NamedRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamScorer {
    pub player: NamedRef,
    pub team: NamedRef,
    pub goals: i32,
}

/// Flattened scorer row returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub player: String,
    pub team: String,
    pub goals: i32,
}

impl From<UpstreamScorer> for ScorerRow {
    fn from(scorer: UpstreamScorer) -> Self {
        Self {
            player: scorer.player.name,
            team: scorer.team.name,
            goals: scorer.goals,
        }
    }
}

/// Body of a successful `/api/scorers` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorersResponse {
    pub scorers: Vec<ScorerRow>,
}
