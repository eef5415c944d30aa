//! League standings and top scorers proxy
//!
//! This library validates a league name against a fixed registry, fetches the
//! matching competition data from the football-data.org API and reshapes it
//! into flat standings and scorer rows served over HTTP.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_tables::config::Config;
//! use league_tables::error::AppError;
//! use league_tables::server::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let state = AppState::from_config(&config)?;
//!
//!     let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
//!     server::serve(listener, state).await
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod leagues;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{ScorerRow, StandingsRow, UpstreamClient};
pub use error::AppError;
pub use leagues::{LeagueEntry, LeagueRegistry};
pub use server::{AppState, create_router};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
