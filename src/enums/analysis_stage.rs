use std::fmt;

/// Lifecycle of a single analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Idle,
    AgentInvoked,
    ResponseReceived,
    Parsed,
    Responded,
    Failed,
}

impl AnalysisStage {
    pub fn can_transition_to(self, next: AnalysisStage) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::AgentInvoked)
                | (Self::AgentInvoked, Self::ResponseReceived)
                | (Self::AgentInvoked, Self::Failed)
                | (Self::ResponseReceived, Self::Parsed)
                | (Self::Parsed, Self::Responded)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Responded | Self::Failed)
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AgentInvoked => "agent_invoked",
            Self::ResponseReceived => "response_received",
            Self::Parsed => "parsed",
            Self::Responded => "responded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
