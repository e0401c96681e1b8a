use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Default output artifact name
pub const DEFAULT_OUTPUT_FILE: &str = "op_return_data.txt";

/// Application configuration loaded from config.toml or environment variables
///
/// Built once at process start and passed down by reference; nothing in the
/// crate reads configuration from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub bitcoin_rpc: BitcoinRpcConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON file holding `{"txids": [...]}`
    #[serde(default)]
    pub input_json: Option<PathBuf>,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is not set
    pub level: String,
}

/// Bitcoin RPC session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitcoinRpcConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for BitcoinRpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 14122,
            username: "bitcoin".to_string(),
            password: "password".to_string(),
            timeout_seconds: 60,
            max_retries: 5,
            initial_backoff_ms: 100,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
        }
    }
}

impl BitcoinRpcConfig {
    /// Endpoint URL handed to the RPC client (credentials travel separately)
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Reject settings the retry loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Message("RPC host must not be empty".to_string()));
        }
        if self.max_retries == 0 {
            return Err(ConfigError::Message(
                "bitcoin_rpc.max_retries must be greater than 0".to_string(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "bitcoin_rpc.timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.backoff_multiplier < 1.0 {
            return Err(ConfigError::Message(format!(
                "bitcoin_rpc.backoff_multiplier must be at least 1.0 (got {})",
                self.backoff_multiplier
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from config.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(File::from(path).required(true))
    }

    fn load_with<S>(file_source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = BitcoinRpcConfig::default();
        let config = Config::builder()
            .set_default("paths.output_file", DEFAULT_OUTPUT_FILE)?
            .set_default("logging.level", "info")?
            // Bitcoin RPC defaults
            .set_default("bitcoin_rpc.host", defaults.host)?
            .set_default("bitcoin_rpc.port", defaults.port as i64)?
            .set_default("bitcoin_rpc.username", defaults.username)?
            .set_default("bitcoin_rpc.password", defaults.password)?
            .set_default("bitcoin_rpc.timeout_seconds", defaults.timeout_seconds)?
            .set_default("bitcoin_rpc.max_retries", defaults.max_retries as i64)?
            .set_default(
                "bitcoin_rpc.initial_backoff_ms",
                defaults.initial_backoff_ms,
            )?
            .set_default(
                "bitcoin_rpc.backoff_multiplier",
                defaults.backoff_multiplier,
            )?
            .set_default(
                "bitcoin_rpc.max_backoff_seconds",
                defaults.max_backoff_seconds,
            )?
            .add_source(file_source)
            // OPRETURN_BITCOIN_RPC__PORT=8332 overrides bitcoin_rpc.port
            .add_source(
                Environment::with_prefix("OPRETURN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Short names for the two paths people actually change
        if let Ok(input_path) = env::var("OPRETURN_INPUT_PATH") {
            app_config.paths.input_json = Some(PathBuf::from(input_path));
        }
        if let Ok(output_path) = env::var("OPRETURN_OUTPUT_PATH") {
            app_config.paths.output_file = PathBuf::from(output_path);
        }

        app_config.bitcoin_rpc.validate()?;

        Ok(app_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                input_json: None,
                output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            },
            bitcoin_rpc: BitcoinRpcConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
