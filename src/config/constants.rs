use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_AGENT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const SUPPORTED_PROVIDERS: &[&str] = &["openai"];
pub const SUPPORTED_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];
pub const MAX_TEMPERATURE: f32 = 2.0;

pub const CONFIG_DIR_NAME: &str = ".contribution-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const MAX_REQUEST_BODY_BYTES: u64 = 16 * 1024;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
