use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use crate::structs::extracted_fields::{
    is_valid_percentage, is_valid_rating, ExtractedFields, COMMITS_BY_AUTHOR,
    CONTRIBUTION_PERCENTAGE, RATING, TOTAL_COMMITS,
};

const PROJECT_NAME_FIELD: &str = "Project name:";
const AUTHOR_NAME_FIELD: &str = "Author name:";
const TOTAL_COMMITS_FIELD: &str = "Total commits:";
const COMMITS_BY_AUTHOR_FIELD: &str = "No of commits by author:";
const PERCENTAGE_MARKER: &str = "Contribution Percentage";
const RATING_FIELD: &str = "Contribution Rating:";

static PERCENTAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").expect("valid percentage pattern"));
static RATING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)/6").expect("valid rating pattern"));

/// A single field that could not be read. Never fatal for the reply as a whole.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFieldError {
    #[error("Invalid number '{value}' for field '{field}' at line {line}")]
    InvalidNumber { field: &'static str, value: String, line: usize },

    #[error("Value '{value}' for field '{field}' at line {line} is out of range")]
    OutOfRange { field: &'static str, value: String, line: usize },

    #[error("Rejected value {value} for key '{field}' in structured reply")]
    InvalidStructuredValue { field: &'static str, value: String },
}

/// Reads the labeled-line reply format:
///
/// ```text
/// Project name: ASTRA_Autogen
/// Author name: MUVivekanand
/// Total commits: 10
/// No of commits by author: 4
/// Contribution Percentage: 40.0%
/// Contribution Rating: 4/6
/// ```
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(text: &str) -> ExtractedFields {
        let (fields, errors) = Self::extract_with_errors(text);
        for error in &errors {
            log::warn!("⚠️ {}", error);
        }
        fields
    }

    /// Same as [`FieldExtractor::extract`], returning the per-field failures instead of logging them.
    pub fn extract_with_errors(text: &str) -> (ExtractedFields, Vec<ParseFieldError>) {
        let mut fields = ExtractedFields::default();
        let mut errors = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            let line_number = index + 1;

            if let Some(rest) = line.strip_prefix(PROJECT_NAME_FIELD) {
                fields.project_name = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(AUTHOR_NAME_FIELD) {
                fields.author_name = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(TOTAL_COMMITS_FIELD) {
                match parse_count(TOTAL_COMMITS, rest, line_number) {
                    Ok(count) => fields.total_commits = Some(count),
                    Err(e) => errors.push(e),
                }
            } else if let Some(rest) = line.strip_prefix(COMMITS_BY_AUTHOR_FIELD) {
                match parse_count(COMMITS_BY_AUTHOR, rest, line_number) {
                    Ok(count) => fields.commits_by_author = Some(count),
                    Err(e) => errors.push(e),
                }
            } else if line.contains(PERCENTAGE_MARKER) && line.contains('%') {
                match parse_percentage(line, line_number) {
                    Ok(Some(percentage)) => fields.contribution_percentage = Some(percentage),
                    Ok(None) => {}
                    Err(e) => errors.push(e),
                }
            } else if line.starts_with(RATING_FIELD) {
                match parse_rating(line, line_number) {
                    Ok(Some(rating)) => fields.rating = Some(rating),
                    Ok(None) => {}
                    Err(e) => errors.push(e),
                }
            }
        }

        (fields, errors)
    }
}

fn parse_count(field: &'static str, value: &str, line: usize) -> Result<u64, ParseFieldError> {
    let value = value.trim();
    value.parse::<u64>().map_err(|_| ParseFieldError::InvalidNumber {
        field,
        value: value.to_string(),
        line,
    })
}

fn parse_percentage(line: &str, line_number: usize) -> Result<Option<f64>, ParseFieldError> {
    let Some(captures) = PERCENTAGE_PATTERN.captures(line) else {
        return Ok(None);
    };
    let matched = &captures[1];
    let percentage = matched.parse::<f64>().map_err(|_| ParseFieldError::InvalidNumber {
        field: CONTRIBUTION_PERCENTAGE,
        value: matched.to_string(),
        line: line_number,
    })?;

    if !is_valid_percentage(percentage) {
        return Err(ParseFieldError::OutOfRange {
            field: CONTRIBUTION_PERCENTAGE,
            value: matched.to_string(),
            line: line_number,
        });
    }

    Ok(Some(percentage))
}

fn parse_rating(line: &str, line_number: usize) -> Result<Option<u8>, ParseFieldError> {
    let Some(captures) = RATING_PATTERN.captures(line) else {
        return Ok(None);
    };
    let matched = &captures[1];
    let out_of_range = || ParseFieldError::OutOfRange {
        field: RATING,
        value: matched.to_string(),
        line: line_number,
    };

    // Digits that overflow u8 are out of range rather than malformed.
    let rating = matched.parse::<u8>().map_err(|_| out_of_range())?;
    if !is_valid_rating(rating) {
        return Err(out_of_range());
    }

    Ok(Some(rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "Project name: ASTRA_Autogen
Author name: MUVivekanand
Total commits: 10
No of commits by author: 4
Contribution Percentage: 40.0%
Contribution Rating: 4/6";

    #[test]
    fn extracts_all_labeled_fields() {
        let fields = FieldExtractor::extract(SAMPLE);

        assert_eq!(fields.project_name.as_deref(), Some("ASTRA_Autogen"));
        assert_eq!(fields.author_name.as_deref(), Some("MUVivekanand"));
        assert_eq!(fields.total_commits, Some(10));
        assert_eq!(fields.commits_by_author, Some(4));
        assert_eq!(fields.contribution_percentage, Some(40.0));
        assert_eq!(fields.rating, Some(4));
        assert!(fields.is_complete());
    }

    #[test]
    fn empty_text_yields_nothing() {
        let fields = FieldExtractor::extract("");
        assert!(fields.is_empty());
        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn non_numeric_commit_count_is_left_absent() {
        let (fields, errors) = FieldExtractor::extract_with_errors("Total commits: abc");

        assert_eq!(fields.total_commits, None);
        assert_eq!(
            errors,
            vec![ParseFieldError::InvalidNumber {
                field: TOTAL_COMMITS,
                value: "abc".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn negative_commit_count_is_rejected() {
        let (fields, errors) = FieldExtractor::extract_with_errors("No of commits by author: -3");
        assert_eq!(fields.commits_by_author, None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn surrounding_prose_and_indentation_are_tolerated() {
        let text = "Here is what I found for the repository:

            Project name:   ASTRA_Autogen
            Total commits: 10
            The author's Contribution Percentage is roughly 12.5 % of all commits.
            Contribution Rating: 2/6 (low)

        Let me know if you need anything else.";
        let fields = FieldExtractor::extract(text);

        assert_eq!(fields.project_name.as_deref(), Some("ASTRA_Autogen"));
        assert_eq!(fields.total_commits, Some(10));
        assert_eq!(fields.contribution_percentage, Some(12.5));
        assert_eq!(fields.rating, Some(2));
        assert_eq!(fields.author_name, None);
    }

    #[test]
    fn last_occurrence_wins() {
        let fields = FieldExtractor::extract("Project name: first\nProject name: second");
        assert_eq!(fields.project_name.as_deref(), Some("second"));
    }

    #[test]
    fn percentage_line_without_number_is_ignored() {
        let (fields, errors) =
            FieldExtractor::extract_with_errors("Contribution Percentage: unknown %");
        assert_eq!(fields.contribution_percentage, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn rating_without_out_of_six_suffix_is_ignored() {
        let fields = FieldExtractor::extract("Contribution Rating: 4 out of 6");
        assert_eq!(fields.rating, None);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let (fields, errors) = FieldExtractor::extract_with_errors(
            "Contribution Percentage: 150%\nContribution Rating: 9/6\nContribution Rating: 999/6",
        );
        assert_eq!(fields.contribution_percentage, None);
        assert_eq!(fields.rating, None);
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ParseFieldError::OutOfRange { .. })));
    }

    #[test]
    fn percentage_marker_takes_priority_over_rating_label() {
        let fields =
            FieldExtractor::extract("Contribution Rating: 3/6 (Contribution Percentage 33%)");
        assert_eq!(fields.contribution_percentage, Some(33.0));
        assert_eq!(fields.rating, None);
    }

    #[test]
    fn non_ascii_digits_are_not_read_as_numbers() {
        let (fields, errors) = FieldExtractor::extract_with_errors(
            "Contribution Percentage: \u{664}\u{660}%\nContribution Rating: \u{664}/6",
        );
        assert_eq!(fields.contribution_percentage, None);
        assert_eq!(fields.rating, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let fields = FieldExtractor::extract(&SAMPLE.replace('\n', "\r\n"));
        assert!(fields.is_complete());
        assert_eq!(fields.rating, Some(4));
    }

    proptest! {
        #[test]
        fn extraction_is_idempotent(text in "\\PC*") {
            prop_assert_eq!(FieldExtractor::extract(&text), FieldExtractor::extract(&text));
        }

        #[test]
        fn extracted_values_stay_in_range(total in 0u64..1_000_000, pct in 0.0f64..=100.0, rating in 0u8..=6) {
            let text = format!(
                "Total commits: {}\nContribution Percentage: {:.2}%\nContribution Rating: {}/6",
                total, pct, rating
            );
            let fields = FieldExtractor::extract(&text);
            prop_assert_eq!(fields.total_commits, Some(total));
            prop_assert_eq!(fields.rating, Some(rating));
            let parsed = fields.contribution_percentage.unwrap();
            prop_assert!((0.0..=100.0).contains(&parsed));
        }
    }
}
