use crate::constants::messages;
use crate::data_fetcher::Endpoint;
use crate::error::AppError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use tracing::{error, warn};

/// Error returned to HTTP clients as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_league() -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::INVALID_LEAGUE)
    }

    /// Maps a failure while serving `endpoint` to the client-facing error.
    ///
    /// Upstream status codes are forwarded unchanged.
    pub fn from_app_error(endpoint: Endpoint, err: AppError) -> Self {
        if let Some(status) = err.upstream_status_code() {
            error!("Upstream {endpoint} request failed: {err}");
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            return Self::new(code, format!("Failed to fetch {endpoint}. Status: {status}"));
        }

        match &err {
            AppError::InvalidLeague { league } => {
                warn!("Rejected {endpoint} request for league {league:?}");
                Self::invalid_league()
            }
            AppError::MalformedUpstreamData { .. } => {
                error!("Upstream {endpoint} response rejected: {err}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to fetch {endpoint}. Upstream returned malformed data"),
                )
            }
            AppError::NetworkTimeout { .. } => {
                error!("Upstream {endpoint} request timed out: {err}");
                Self::new(
                    StatusCode::GATEWAY_TIMEOUT,
                    format!("Failed to fetch {endpoint}. Upstream timed out"),
                )
            }
            AppError::NetworkConnection { .. } | AppError::ApiFetch(_) => {
                error!("Upstream {endpoint} request failed: {err}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to fetch {endpoint}. Upstream unreachable"),
                )
            }
            _ => {
                error!("Internal error while serving {endpoint}: {err}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
