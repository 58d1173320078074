use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use contribution_analyzer::enums::agent_error::AgentError;
use contribution_analyzer::enums::reply_format::ReplyFormat;
use contribution_analyzer::helpers::prompt_generator::PromptGenerator;
use contribution_analyzer::services::contribution_analyzer::ContributionAnalyzer;
use contribution_analyzer::traits::agent_runtime::AgentRuntime;

pub const EXAMPLE_REPLY: &str = "Project name: ASTRA_Autogen
Author name: MUVivekanand
Total commits: 10
No of commits by author: 4
Contribution Percentage: 40.0%
Contribution Rating: 4/6";

/// Agent that answers every task with the same canned result.
pub struct StubAgent {
    reply: Result<String, AgentError>,
    calls: AtomicUsize,
}

impl StubAgent {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: AgentError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentRuntime for StubAgent {
    async fn run(&self, _task: String) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub fn analyzer_for(agent: Arc<StubAgent>) -> Arc<ContributionAnalyzer> {
    Arc::new(ContributionAnalyzer::new(
        agent,
        PromptGenerator::new(ReplyFormat::Structured),
    ))
}
