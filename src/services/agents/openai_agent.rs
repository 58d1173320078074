use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::enums::agent_error::AgentError;
use crate::prompts::contribution_prompt::CONTRIBUTION_SYSTEM_PROMPT;
use crate::structs::agent::chat_message::ChatMessage;
use crate::structs::agent::chat_request::ChatCompletionRequest;
use crate::structs::agent::chat_response::{ChatCompletionResponse, ChatErrorResponse};
use crate::structs::config::agent_config::AgentConfig;
use crate::traits::agent_runtime::AgentRuntime;

/// Agent backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiAgent {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system_prompt: String,
}

impl OpenAiAgent {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            system_prompt: CONTRIBUTION_SYSTEM_PROMPT.trim().to_string(),
        }
    }

    pub fn from_config(api_key: String, config: &AgentConfig) -> Result<Self, AgentError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_secs {
            builder = builder.timeout(timeout_duration(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| AgentError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        let mut agent = Self::new(api_key, config.base_url.clone())
            .with_model(config.model.clone())
            .with_sampling(config.max_tokens, config.temperature);
        agent.client = client;
        if let Some(prompt) = &config.custom_prompt {
            agent.system_prompt = prompt.clone();
        }
        Ok(agent)
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn get_request(&self, task: &str) -> ChatCompletionRequest {
        let mut messages = Vec::new();
        if !self.system_prompt.is_empty() {
            messages.push(ChatMessage::system(&self.system_prompt));
        }
        messages.push(ChatMessage::user(task));

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
        }
    }

    async fn make_request(&self, request_body: &ChatCompletionRequest) -> Result<reqwest::Response, AgentError> {
        self.client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AgentError::NetworkError(e.to_string()))
    }
}

/// Maps a non-success status and its body onto an agent error.
pub fn error_for_status(status: u16, body: &str) -> AgentError {
    let detail = serde_json::from_str::<ChatErrorResponse>(body)
        .map(|e| match e.error.error_type {
            Some(error_type) => format!("{}: {}", error_type, e.error.message),
            None => e.error.message,
        })
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => AgentError::AuthenticationError(detail),
        429 => AgentError::ApiError(format!("Rate limit exceeded: {}", detail)),
        _ => AgentError::ApiError(format!("HTTP {}: {}", status, detail)),
    }
}

#[async_trait]
impl AgentRuntime for OpenAiAgent {
    async fn run(&self, task: String) -> Result<String, AgentError> {
        log::debug!("📦 Request model: {}", self.model);

        let request_body = self.get_request(&task);
        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Agent API error response ({}): {}", status, error_text);
            return Err(error_for_status(status.as_u16(), &error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AgentError::SerializationError(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            log::debug!(
                "Agent usage: {} prompt + {} completion = {} tokens",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| AgentError::SerializationError("No content in response".to_string()))
    }
}
