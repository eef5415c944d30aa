// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use league_tables::config::Config;
use league_tables::error::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Reported once logging is up. A missing .env file is fine.
    let dotenv_result = dotenvy::dotenv();

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let mut config = Config::load().await?;
    commands::apply_args(&mut config, &args)?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");
    commands::report_dotenv(dotenv_result);

    if args.list_config {
        return commands::handle_list_config_command(&config);
    }

    if args.list_leagues {
        return commands::handle_list_leagues_command(&config);
    }

    commands::run_server(&config).await
}
