use std::sync::Arc;
use uuid::Uuid;
use crate::enums::analysis_stage::AnalysisStage;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt_generator::PromptGenerator;
use crate::services::report_assembler::ReportAssembler;
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::contribution_report::ContributionReport;
use crate::traits::agent_runtime::AgentRuntime;

/// Runs one analysis per call: instruction out, one reply back, report assembled.
/// Holds no per-request state, so one instance is shared across concurrent requests.
pub struct ContributionAnalyzer {
    agent: Arc<dyn AgentRuntime>,
    prompt_generator: PromptGenerator,
}

impl ContributionAnalyzer {
    pub fn new(agent: Arc<dyn AgentRuntime>, prompt_generator: PromptGenerator) -> Self {
        Self {
            agent,
            prompt_generator,
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<ContributionReport> {
        request.validate()?;

        let request_id = Uuid::new_v4().to_string();
        log::info!(
            "[{}] Request received - Project: {}, Author: {}, Owner: {}",
            request_id,
            request.project,
            request.author,
            request.owner().unwrap_or("-")
        );

        let mut stage = AnalysisStage::Idle;
        let task = self.prompt_generator.task_for(request);
        log::debug!(
            "[{}] Calling agent ({:?} reply) with task: {}",
            request_id,
            self.prompt_generator.reply_format(),
            task
        );

        stage = advance(&request_id, stage, AnalysisStage::AgentInvoked);
        let raw = match self.agent.run(task).await {
            Ok(raw) => raw,
            Err(e) => {
                advance(&request_id, stage, AnalysisStage::Failed);
                log::error!("[{}] ❌ Failed to call agent: {}", request_id, e);
                return Err(AnalyzerError::agent_error(&request_id, e));
            }
        };
        stage = advance(&request_id, stage, AnalysisStage::ResponseReceived);

        let fields = ResponseParser::parse(&raw);
        stage = advance(&request_id, stage, AnalysisStage::Parsed);

        let report = ReportAssembler::assemble(&fields);
        advance(&request_id, stage, AnalysisStage::Responded);

        log::info!(
            "[{}] ✅ {} made {} of {} commits ({:.1}%): {}",
            request_id,
            report.author_name,
            report.commits_by_author,
            report.total_commits,
            report.contribution_percentage,
            report.rating_description
        );
        Ok(report)
    }

    /// Normalizes an already captured agent reply without calling the agent.
    pub fn report_from_text(raw: &str) -> ContributionReport {
        ReportAssembler::assemble(&ResponseParser::parse(raw))
    }
}

fn advance(request_id: &str, from: AnalysisStage, to: AnalysisStage) -> AnalysisStage {
    debug_assert!(from.can_transition_to(to), "invalid stage transition {} -> {}", from, to);
    log::debug!("[{}] {} -> {}", request_id, from, to);
    to
}
