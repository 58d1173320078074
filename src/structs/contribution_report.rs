use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionReport {
    pub project_name: String,
    pub author_name: String,
    pub total_commits: u64,
    pub commits_by_author: u64,
    pub contribution_percentage: f64,
    pub rating: u8,
    pub rating_description: String,
}
