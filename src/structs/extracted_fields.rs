pub const PROJECT_NAME: &str = "project_name";
pub const AUTHOR_NAME: &str = "author_name";
pub const TOTAL_COMMITS: &str = "total_commits";
pub const COMMITS_BY_AUTHOR: &str = "commits_by_author";
pub const CONTRIBUTION_PERCENTAGE: &str = "contribution_percentage";
pub const RATING: &str = "rating";

pub const MAX_PERCENTAGE: f64 = 100.0;
pub const MAX_RATING: u8 = 6;

/// Fields recovered from one agent reply. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub project_name: Option<String>,
    pub author_name: Option<String>,
    pub total_commits: Option<u64>,
    pub commits_by_author: Option<u64>,
    pub contribution_percentage: Option<f64>,
    pub rating: Option<u8>,
}

impl ExtractedFields {
    /// Names of the fields that were not found, in report order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.project_name.is_none() {
            missing.push(PROJECT_NAME);
        }
        if self.author_name.is_none() {
            missing.push(AUTHOR_NAME);
        }
        if self.total_commits.is_none() {
            missing.push(TOTAL_COMMITS);
        }
        if self.commits_by_author.is_none() {
            missing.push(COMMITS_BY_AUTHOR);
        }
        if self.contribution_percentage.is_none() {
            missing.push(CONTRIBUTION_PERCENTAGE);
        }
        if self.rating.is_none() {
            missing.push(RATING);
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == 6
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Keeps every value already present and takes the rest from `other`.
    pub fn or(self, other: ExtractedFields) -> ExtractedFields {
        ExtractedFields {
            project_name: self.project_name.or(other.project_name),
            author_name: self.author_name.or(other.author_name),
            total_commits: self.total_commits.or(other.total_commits),
            commits_by_author: self.commits_by_author.or(other.commits_by_author),
            contribution_percentage: self.contribution_percentage.or(other.contribution_percentage),
            rating: self.rating.or(other.rating),
        }
    }
}

pub fn is_valid_percentage(value: f64) -> bool {
    (0.0..=MAX_PERCENTAGE).contains(&value)
}

pub fn is_valid_rating(value: u8) -> bool {
    value <= MAX_RATING
}
