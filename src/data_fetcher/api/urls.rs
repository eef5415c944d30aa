//! URL building utilities for upstream endpoints

use std::fmt;

/// Competition sub-resources served by this proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Standings,
    Scorers,
}

impl Endpoint {
    /// Path segment appended to the competition URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            Endpoint::Standings => "standings",
            Endpoint::Scorers => "scorers",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Builds the URL of a competition sub-resource.
///
/// # Example
/// ```
/// use league_tables::data_fetcher::api::{Endpoint, build_competition_url};
///
/// let url = build_competition_url("https://api.example.com/v4", 2014, Endpoint::Standings);
/// assert_eq!(url, "https://api.example.com/v4/competitions/2014/standings");
/// ```
pub fn build_competition_url(api_base_url: &str, competition_id: u32, endpoint: Endpoint) -> String {
    format!(
        "{}/competitions/{competition_id}/{}",
        api_base_url.trim_end_matches('/'),
        endpoint.path_segment()
    )
}
