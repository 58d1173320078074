use serde::{Deserialize, Serialize};
use crate::errors::{AnalyzerError, AnalyzerResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisRequest {
    pub project: String,
    pub author: String,
    #[serde(default)]
    pub owner: Option<String>,
}

impl AnalysisRequest {
    pub fn new(project: &str, author: &str, owner: Option<&str>) -> Self {
        Self {
            project: project.to_string(),
            author: author.to_string(),
            owner: owner.map(|s| s.to_string()),
        }
    }

    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.project.trim().is_empty() {
            return Err(AnalyzerError::validation_error("project", "must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(AnalyzerError::validation_error("author", "must not be empty"));
        }
        Ok(())
    }

    /// Owner with blank values treated as absent.
    pub fn owner(&self) -> Option<&str> {
        self.owner
            .as_deref()
            .map(str::trim)
            .filter(|owner| !owner.is_empty())
    }

    /// `owner/project` when an owner is known, otherwise just the project.
    pub fn repository(&self) -> String {
        match self.owner() {
            Some(owner) => format!("{}/{}", owner, self.project.trim()),
            None => self.project.trim().to_string(),
        }
    }
}
