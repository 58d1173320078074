use std::env;
use std::sync::Arc;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::agents::openai_agent::OpenAiAgent;
use crate::structs::config::agent_config::AgentConfig;
use crate::traits::agent_runtime::AgentRuntime;

pub struct AgentFactory;

impl AgentFactory {
    pub fn create(config: &AgentConfig) -> AnalyzerResult<Arc<dyn AgentRuntime>> {
        let api_key = env::var(&config.api_key_env).map_err(|_| {
            AnalyzerError::config_error(
                &format!("Environment variable {} is not set", config.api_key_env),
                Some("agent.api_key_env"),
            )
        })?;

        Self::create_with_key(config, api_key)
    }

    pub fn create_with_key(config: &AgentConfig, api_key: String) -> AnalyzerResult<Arc<dyn AgentRuntime>> {
        match config.provider.as_str() {
            "openai" => {
                let agent = OpenAiAgent::from_config(api_key, config)
                    .map_err(|e| AnalyzerError::config_error(&e.to_string(), Some("agent")))?;
                log::info!("🤖 Agent ready: {} via {}", agent.model(), config.base_url);
                Ok(Arc::new(agent))
            }
            other => Err(AnalyzerError::config_error(
                &format!("Unsupported agent provider: {}", other),
                Some("agent.provider"),
            )),
        }
    }
}
