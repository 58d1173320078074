use crate::enums::reply_format::ReplyFormat;
use crate::prompts::contribution_prompt::{LABELED_REPLY_INSTRUCTIONS, STRUCTURED_REPLY_INSTRUCTIONS};
use crate::structs::analysis_request::AnalysisRequest;

#[derive(Debug, Clone, Copy)]
pub struct PromptGenerator {
    reply_format: ReplyFormat,
}

impl PromptGenerator {
    pub fn new(reply_format: ReplyFormat) -> Self {
        Self { reply_format }
    }

    pub fn reply_format(&self) -> ReplyFormat {
        self.reply_format
    }

    /// The single instruction sent to the agent for one request.
    pub fn task_for(&self, request: &AnalysisRequest) -> String {
        let instructions = match self.reply_format {
            ReplyFormat::Structured => STRUCTURED_REPLY_INSTRUCTIONS,
            ReplyFormat::Labeled => LABELED_REPLY_INSTRUCTIONS,
        };

        format!(
            "Analyze GitHub contributions for {} in the {} repository. \
             Use the tool get_recent_commits to count the commits by this author out of the total commits in the repository.\n{}",
            request.author.trim(),
            request.repository(),
            instructions.trim_end()
        )
    }
}
