use crate::error::AppError;
use crate::leagues::LeagueRegistry;
use std::net::SocketAddr;
use std::path::Path;

use super::Config;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Bind address must parse as a socket address
/// - If log file path is provided, it cannot be empty and its parent must be creatable
/// - HTTP timeout, when set, must be positive
/// - Configured leagues must have unique, non-empty names
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_api_base_url(&config.api_base_url)?;

    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        AppError::config_error(format!(
            "Invalid bind address '{}': {e}",
            config.bind_address
        ))
    })?;

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if config.http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero seconds",
        ));
    }

    LeagueRegistry::from_config(&config.leagues)?;

    Ok(())
}

fn validate_api_base_url(api_base_url: &str) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }
    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }
    Ok(())
}
