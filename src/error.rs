use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Invalid or missing league: {league:?}")]
    InvalidLeague { league: String },

    /// Non-2xx answer from the upstream API. The status is forwarded to our
    /// own client unchanged.
    #[error("Upstream API error ({status}): {message} (URL: {url})")]
    UpstreamStatus {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Upstream API returned malformed data: {message}")]
    MalformedUpstreamData { message: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid league error. `None` means the parameter was absent.
    pub fn invalid_league(league: Option<&str>) -> Self {
        Self::InvalidLeague {
            league: league.unwrap_or_default().to_string(),
        }
    }

    /// Create an upstream status error (any non-2xx status code)
    pub fn upstream_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a malformed upstream data error
    pub fn malformed_upstream_data(message: impl Into<String>) -> Self {
        Self::MalformedUpstreamData {
            message: message.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Status code reported by the upstream API, if this error carries one
    pub fn upstream_status_code(&self) -> Option<u16> {
        match self {
            AppError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
