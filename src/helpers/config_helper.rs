use crate::config::constants::{
    DEFAULT_AGENT_BASE_URL, DEFAULT_API_KEY_ENV, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_cors_allowed_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_AGENT_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        1024
    }

    pub fn default_temperature() -> f32 {
        0.0
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
