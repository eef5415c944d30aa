pub mod common;
pub mod scorers;
pub mod standings;

pub use common::NamedRef;
pub use scorers::{ScorerRow, ScorersResponse, UpstreamScorer};
pub use standings::{StandingsResponse, StandingsRow, UpstreamTableRow};
