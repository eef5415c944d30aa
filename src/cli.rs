use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only updates the persisted configuration
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Determines if the invocation prints information and exits without serving
pub fn is_info_command(args: &Args) -> bool {
    args.list_config || args.list_leagues
}

/// League tables web service
///
/// Serves league standings and top scorers for Europe's top five football
/// leagues, fetched on demand from the football-data.org API.
///
/// The upstream API key is read from the FOOTBALL_DATA_API_KEY environment
/// variable (a `.env` file in the working directory is honoured).
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Address to listen on, e.g. 0.0.0.0:8080. Overrides the config file for this run.
    #[arg(long = "bind", short = 'b', help_heading = "Server")]
    pub bind: Option<String>,

    /// Upstream API base URL. Overrides the config file for this run.
    #[arg(long = "api-url", help_heading = "Server")]
    pub api_url: Option<String>,

    /// Persist a new upstream API base URL in the config file.
    #[arg(long = "set-api-url", help_heading = "Configuration", value_name = "API_URL")]
    pub new_api_url: Option<String>,

    /// Persist a custom log file path in the config file.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// List the served leagues and their competition ids
    #[arg(long = "list-leagues", help_heading = "Configuration")]
    pub list_leagues: bool,

    /// Log at debug level, including upstream response details.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
