use async_trait::async_trait;
use crate::enums::agent_error::AgentError;

/// The external agent. Takes one instruction and yields exactly one textual reply;
/// any retries or streaming happen inside the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn run(&self, task: String) -> Result<String, AgentError>;
}
