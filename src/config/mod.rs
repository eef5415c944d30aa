use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::leagues::{LeagueEntry, LeagueRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the service.
/// Handles loading, saving, and managing settings.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the upstream football-data API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Socket address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Timeout for upstream requests. Unset means the HTTP client default (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Upstream API key. Only ever read from the environment, never written to disk.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// League table. Empty means the built-in top five leagues.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leagues: Vec<LeagueEntry>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            bind_address: default_bind_address(),
            log_file_path: None,
            http_timeout_seconds: None,
            api_key: None,
            leagues: Vec::new(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("bind_address", &self.bind_address)
            .field("log_file_path", &self.log_file_path)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("leagues", &self.leagues)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: defaults are used instead.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_DATA_API_KEY` - Upstream API key
    /// - `LEAGUE_TABLES_API_URL` - Override upstream base URL
    /// - `LEAGUE_TABLES_BIND` - Override bind address
    /// - `LEAGUE_TABLES_LOG_FILE` - Override log file path
    /// - `LEAGUE_TABLES_HTTP_TIMEOUT` - Upstream timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_or_default(&get_config_path()).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file at `path`, or returns defaults when it does not exist.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without applying environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    /// Unparseable timeout values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY)
            && !api_key.trim().is_empty()
        {
            self.api_key = Some(api_key.trim().to_string());
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(bind_address) = std::env::var(env_vars::BIND) {
            self.bind_address = bind_address;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Base URL with any trailing slashes removed.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Builds the league registry described by this configuration.
    pub fn league_registry(&self) -> Result<LeagueRegistry, AppError> {
        LeagueRegistry::from_config(&self.leagues)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    /// The API key itself is never printed.
    pub fn display(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = self;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url());
        println!("────────────────────────────────────");
        println!("API Key:");
        if config.api_key.is_some() {
            println!("set via {}", env_vars::API_KEY);
        } else {
            println!("not set ({} is empty)", env_vars::API_KEY);
        }
        println!("────────────────────────────────────");
        println!("Bind Address:");
        println!("{}", config.bind_address);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        match config.http_timeout_seconds {
            Some(seconds) => println!("{seconds} seconds"),
            None => println!("client default (none)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }
        println!("────────────────────────────────────");
        println!("Leagues:");
        for entry in config.league_registry()?.entries() {
            println!("{} ({})", entry.name, entry.competition_id);
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the API base URL. The API key is never written.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url().to_string(),
            api_key: None,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::API_URL);
            std::env::remove_var(env_vars::BIND);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "https://api.example.com/v4"
bind_address = "0.0.0.0:8080"
log_file_path = "/custom/log/path"
http_timeout_seconds = 10
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/v4");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, Some(10));
        assert!(config.leagues.is_empty());
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn test_config_load_minimal_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.http_timeout_seconds, None);
    }

    #[tokio::test]
    async fn test_config_load_custom_leagues() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
[[leagues]]
name = "Eredivisie"
competition_id = 2003

[[leagues]]
name = "Primeira Liga"
competitionId = 2017
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        let registry = config.league_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("Eredivisie").unwrap(), 2003);
        assert_eq!(registry.lookup("Primeira Liga").unwrap(), 2017);
    }

    #[tokio::test]
    async fn test_config_load_or_default_missing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_base_url = [not toml")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_never_writes_api_key() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config = Config {
            api_base_url: "https://api.example.com/v4/".to_string(),
            api_key: Some("super-secret".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("super-secret"));
        assert!(!content.contains("api_key"));

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.example.com/v4");
        assert_eq!(loaded.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(loaded.api_key, None);
    }

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let config = Config {
            api_base_url: "https://api.example.com/v4//".to_string(),
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), "https://api.example.com/v4");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("super-secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let invalid_configs = vec![
            Config {
                api_base_url: String::new(),
                ..Config::default()
            },
            Config {
                api_base_url: "api.example.com".to_string(),
                ..Config::default()
            },
            Config {
                bind_address: "not an address".to_string(),
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: Some(0),
                ..Config::default()
            },
            Config {
                leagues: vec![
                    LeagueEntry::new("Serie A", 2019),
                    LeagueEntry::new("Serie A", 2019),
                ],
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_KEY, " key-from-env ");
            std::env::set_var(env_vars::API_URL, "https://env.example.com/v4");
            std::env::set_var(env_vars::BIND, "0.0.0.0:9000");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "15");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key.as_deref(), Some("key-from-env"));
        assert_eq!(config.api_base_url, "https://env.example.com/v4");
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.log_file_path.as_deref(), Some("/env/log/path.log"));
        assert_eq!(config.http_timeout_seconds, Some(15));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_environment_blank_key_and_bad_timeout_are_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_KEY, "   ");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key, None);
        assert_eq!(config.http_timeout_seconds, None);

        clear_env();
    }
}
