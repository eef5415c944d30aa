//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed values used across the service so the
//! defaults live in a single place.

/// Default base URL of the football-data.org v4 API
pub const DEFAULT_API_BASE_URL: &str = "https://api.football-data.org/v4";

/// Default socket address the HTTP server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Header carrying the upstream API key
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "league_tables.log";

/// Environment variable names
pub mod env_vars {
    /// Upstream API key (kept out of the config file)
    pub const API_KEY: &str = "FOOTBALL_DATA_API_KEY";

    /// Override for the upstream base URL
    pub const API_URL: &str = "LEAGUE_TABLES_API_URL";

    /// Override for the server bind address
    pub const BIND: &str = "LEAGUE_TABLES_BIND";

    /// Override for the log file path
    pub const LOG_FILE: &str = "LEAGUE_TABLES_LOG_FILE";

    /// Override for the upstream request timeout in seconds
    pub const HTTP_TIMEOUT: &str = "LEAGUE_TABLES_HTTP_TIMEOUT";
}

/// JSON error messages returned to HTTP clients
pub mod messages {
    pub const INVALID_LEAGUE: &str = "Invalid or missing league";

    pub const INTERNAL_ERROR: &str = "Internal server error";
}
