use std::error::Error as StdError;
use std::fmt::Write as _;
use thiserror::Error;
use crate::enums::agent_error::AgentError;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile {
        path: String,
        reason: String,
    },

    // Request errors
    #[error("Invalid request: field '{field}' {reason}")]
    Validation {
        field: String,
        reason: String,
    },

    // Agent errors
    #[error("Agent invocation failed for request {request_id}: {source}")]
    AgentInvocation {
        request_id: String,
        #[source]
        source: AgentError,
    },

    // Server errors
    #[error("Server error during {operation}: {reason}")]
    Server {
        operation: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AnalyzerError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn agent_error(request_id: &str, source: AgentError) -> Self {
        Self::AgentInvocation {
            request_id: request_id.to_string(),
            source,
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::Server {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status used when this error reaches the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            _ => 500,
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Message, cause chain and debug rendering, for the error body of a failed request.
    pub fn diagnostic(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(out, "\nCaused by: {}", cause);
            source = cause.source();
        }
        let _ = write!(out, "\n{}", self.technical_details());
        out
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
