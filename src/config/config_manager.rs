use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TEMPERATURE, SUPPORTED_LOG_LEVELS, SUPPORTED_PROVIDERS,
};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Contribution Analyzer Configuration

[server]
# Address the HTTP API listens on
host = "0.0.0.0"
port = 8000

# Origins allowed by CORS; "*" allows any origin
cors_allowed_origins = ["*"]

[agent]
# OpenAI-compatible chat completions endpoint backing the agent
provider = "openai"
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"

# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"

max_tokens = 1024
temperature = 0.0

# "structured" asks for a JSON reply, "labeled" for one "Label: value" line per field.
# Labeled lines are always accepted as a fallback.
reply_format = "structured"

# Optional HTTP timeout for a single agent call
# request_timeout_secs = 120

[logging]
# error, warn, info, debug, trace or off; RUST_LOG takes precedence
level = "info"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads an explicit config file, or the one in the home directory, or the defaults.
    pub fn load(path: Option<&Path>) -> AnalyzerResult<Config> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(AnalyzerError::config_file_error(
                    &path.display().to_string(),
                    "file does not exist",
                ));
            }
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> AnalyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::config_file_error(&path.display().to_string(), &e.to_string())
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> AnalyzerResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                AnalyzerError::config_error("Could not determine home directory", None)
            })?,
        };

        if config_file_path.exists() {
            return Err(AnalyzerError::config_file_error(
                &config_file_path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }
        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        for origin in &config.server.cors_allowed_origins {
            if origin != "*" && !(origin.starts_with("http://") || origin.starts_with("https://")) {
                errors.push(format!("CORS origin '{}' must start with http:// or https://", origin));
            }
        }

        let agent = &config.agent;
        if !SUPPORTED_PROVIDERS.contains(&agent.provider.as_str()) {
            errors.push(format!(
                "Unknown agent provider '{}', expected one of: {}",
                agent.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }
        if agent.base_url.trim().is_empty() {
            errors.push("agent.base_url must not be empty".to_string());
        }
        if agent.model.trim().is_empty() {
            errors.push("agent.model must not be empty".to_string());
        }
        if agent.api_key_env.trim().is_empty() {
            errors.push("agent.api_key_env must not be empty".to_string());
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&agent.temperature) {
            errors.push(format!(
                "agent.temperature must be between 0 and {}, got {}",
                MAX_TEMPERATURE, agent.temperature
            ));
        }
        if agent.max_tokens == 0 {
            errors.push("agent.max_tokens must be greater than 0".to_string());
        }
        if agent.request_timeout_secs == Some(0) {
            errors.push("agent.request_timeout_secs must be greater than 0".to_string());
        }

        let level = config.logging.level.to_lowercase();
        if !SUPPORTED_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(format!(
                "Unknown log level '{}', expected one of: {}",
                config.logging.level,
                SUPPORTED_LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
