use serde::{Deserialize, Serialize};

/// Shape of the reply the agent is asked to produce.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    /// A fenced JSON object; labeled lines are still parsed as a fallback.
    #[serde(rename = "structured")]
    #[default]
    Structured,
    /// One `Label: value` line per field.
    #[serde(rename = "labeled")]
    Labeled,
}
