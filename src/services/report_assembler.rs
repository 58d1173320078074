use crate::services::rating_classifier::classify;
use crate::structs::contribution_report::{ContributionReport, NOT_AVAILABLE};
use crate::structs::extracted_fields::ExtractedFields;

pub struct ReportAssembler;

impl ReportAssembler {
    /// Fills every gap with its default. The agent's own `rating` is carried
    /// as reported; `rating_description` always comes from the percentage.
    pub fn assemble(fields: &ExtractedFields) -> ContributionReport {
        if let Some(warning) = incomplete_response_warning(fields) {
            log::warn!("⚠️ {}. Parsed data: {:?}", warning, fields);
        }

        let contribution_percentage = fields.contribution_percentage.unwrap_or(0.0);

        ContributionReport {
            project_name: fields
                .project_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            author_name: fields
                .author_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            total_commits: fields.total_commits.unwrap_or(0),
            commits_by_author: fields.commits_by_author.unwrap_or(0),
            contribution_percentage,
            rating: fields.rating.unwrap_or(0),
            rating_description: classify(contribution_percentage).to_string(),
        }
    }
}

fn incomplete_response_warning(fields: &ExtractedFields) -> Option<String> {
    let missing = fields.missing_fields();
    if missing.is_empty() {
        None
    } else {
        Some(format!("Incomplete agent response, missing fields: [{}]", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_give_a_fully_defaulted_report() {
        let report = ReportAssembler::assemble(&ExtractedFields::default());

        assert_eq!(
            report,
            ContributionReport {
                project_name: "N/A".to_string(),
                author_name: "N/A".to_string(),
                total_commits: 0,
                commits_by_author: 0,
                contribution_percentage: 0.0,
                rating: 0,
                rating_description: "Minimal contributor - Limited involvement in the project"
                    .to_string(),
            }
        );
    }

    #[test]
    fn warning_lists_only_the_missing_fields() {
        let fields = ExtractedFields {
            total_commits: Some(12),
            commits_by_author: Some(3),
            ..ExtractedFields::default()
        };

        assert_eq!(
            incomplete_response_warning(&fields).as_deref(),
            Some("Incomplete agent response, missing fields: [project_name, author_name, contribution_percentage, rating]")
        );
    }

    #[test]
    fn complete_fields_produce_no_warning() {
        let fields = ExtractedFields {
            project_name: Some("p".to_string()),
            author_name: Some("a".to_string()),
            total_commits: Some(1),
            commits_by_author: Some(1),
            contribution_percentage: Some(100.0),
            rating: Some(6),
        };
        assert_eq!(incomplete_response_warning(&fields), None);
    }

    #[test]
    fn agent_rating_is_independent_of_band() {
        let fields = ExtractedFields {
            contribution_percentage: Some(80.0),
            rating: Some(1),
            ..ExtractedFields::default()
        };
        let report = ReportAssembler::assemble(&fields);

        assert_eq!(report.rating, 1);
        assert_eq!(report.rating_description, "Lead contributor - Primary developer of the project");
    }

    #[test]
    fn present_fields_are_kept() {
        let fields = ExtractedFields {
            project_name: Some("ASTRA_Autogen".to_string()),
            author_name: Some("MUVivekanand".to_string()),
            total_commits: Some(10),
            commits_by_author: Some(4),
            contribution_percentage: Some(40.0),
            rating: Some(4),
        };
        let report = ReportAssembler::assemble(&fields);

        assert_eq!(report.project_name, "ASTRA_Autogen");
        assert_eq!(report.author_name, "MUVivekanand");
        assert_eq!(report.total_commits, 10);
        assert_eq!(report.commits_by_author, 4);
        assert_eq!(report.rating, 4);
        assert_eq!(
            report.rating_description,
            "Significant contributor - Major role in project development"
        );
    }

    #[test]
    fn serialized_report_has_exactly_the_public_keys() {
        let report = ReportAssembler::assemble(&ExtractedFields::default());
        let value = serde_json::to_value(&report).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "author_name",
                "commits_by_author",
                "contribution_percentage",
                "project_name",
                "rating",
                "rating_description",
                "total_commits",
            ]
        );
    }
}
