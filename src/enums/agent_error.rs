use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentError::ApiError(msg) => write!(f, "Agent API Error: {}", msg),
            AgentError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AgentError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AgentError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
        }
    }
}

impl Error for AgentError {}
