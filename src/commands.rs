use crate::cli::Args;
use league_tables::config::Config;
use league_tables::error::AppError;
use league_tables::server::{self, AppState};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Applies per-run command line overrides and re-validates the result.
pub fn apply_args(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }
    if let Some(api_url) = &args.api_url {
        config.api_base_url = api_url.clone();
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config.validate()
}

/// Logs the outcome of loading `.env`. Returns false when a file exists but
/// could not be read or parsed.
pub fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) -> bool {
    match result {
        Ok(path) => {
            info!("Loaded environment from {}", path.display());
            true
        }
        Err(e) if e.not_found() => true,
        Err(e) => {
            warn!("Ignoring unreadable .env file: {e}");
            false
        }
    }
}

/// Handles --list-config.
pub fn handle_list_config_command(config: &Config) -> Result<(), AppError> {
    config.display()
}

/// Handles --list-leagues.
pub fn handle_list_leagues_command(config: &Config) -> Result<(), AppError> {
    let registry = config.league_registry()?;
    for entry in registry.entries() {
        println!("{:<20} {}", entry.name, entry.competition_id);
    }
    Ok(())
}

/// Handles configuration update commands (--set-api-url, --set-log-file, --clear-log-file).
///
/// Only file values are persisted: environment overrides are not written back.
/// A config file that fails to parse is left untouched and the error is returned.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_or_default(&Config::get_config_path()).await?;

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Binds the configured address and serves until shutdown.
pub async fn run_server(config: &Config) -> Result<(), AppError> {
    let state = AppState::from_config(config)?;
    if !state.upstream.has_api_key() {
        warn!(
            "No upstream API key configured; requests are sent without an auth header and will likely be rejected"
        );
    }

    info!(
        "Serving {} leagues from {}",
        state.registry.len(),
        state.upstream.api_base_url()
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    server::serve(listener, state).await
}
