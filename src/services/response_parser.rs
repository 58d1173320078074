use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use crate::services::field_extractor::{FieldExtractor, ParseFieldError};
use crate::structs::extracted_fields::{
    is_valid_percentage, is_valid_rating, ExtractedFields, AUTHOR_NAME, COMMITS_BY_AUTHOR,
    CONTRIBUTION_PERCENTAGE, PROJECT_NAME, RATING, TOTAL_COMMITS,
};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Entry point for turning an agent reply into fields.
///
/// A JSON object (fenced as ```json or sent bare) is decoded first, one key at
/// a time. Whatever it leaves absent, including everything when there is no
/// JSON at all, is taken from the labeled-line [`FieldExtractor`].
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(raw: &str) -> ExtractedFields {
        log::debug!("Raw agent response:\n{}", raw);

        let fields = match Self::parse_structured(raw) {
            Some(fields) if fields.is_complete() => {
                log::debug!("Decoded structured agent reply");
                fields
            }
            Some(fields) => {
                log::debug!(
                    "Structured reply missing [{}], reading labeled lines",
                    fields.missing_fields().join(", ")
                );
                fields.or(FieldExtractor::extract(raw))
            }
            None => FieldExtractor::extract(raw),
        };

        log::debug!("Parsed fields: {:?}", fields);
        fields
    }

    pub fn parse_structured(raw: &str) -> Option<ExtractedFields> {
        let (fields, errors) = Self::parse_structured_with_errors(raw)?;
        for error in &errors {
            log::warn!("⚠️ {}", error);
        }
        Some(fields)
    }

    /// Decodes the JSON object in `raw`, if any. A key with the wrong type or an
    /// out-of-range value is reported and left absent; the other keys are kept.
    pub fn parse_structured_with_errors(raw: &str) -> Option<(ExtractedFields, Vec<ParseFieldError>)> {
        let json_str = extract_json_block(raw)?;

        let reply: StructuredReply = match serde_json::from_str(json_str) {
            Ok(reply) => reply,
            Err(e) => {
                log::debug!("Structured reply rejected, falling back to labeled lines: {}", e);
                return None;
            }
        };

        Some(reply.into_fields())
    }
}

fn extract_json_block(raw: &str) -> Option<&str> {
    if let Some(start) = raw.find(JSON_FENCE) {
        let content_start = start + JSON_FENCE.len();
        let end = raw[content_start..].find(FENCE)?;
        return Some(raw[content_start..content_start + end].trim());
    }

    let trimmed = raw.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        Some(trimmed)
    } else {
        None
    }
}

#[derive(Deserialize)]
struct StructuredReply {
    project_name: Option<Value>,
    author_name: Option<Value>,
    total_commits: Option<Value>,
    commits_by_author: Option<Value>,
    contribution_percentage: Option<Value>,
    rating: Option<Value>,
}

impl StructuredReply {
    fn into_fields(self) -> (ExtractedFields, Vec<ParseFieldError>) {
        let mut errors = Vec::new();

        let project_name: Option<String> = decode(PROJECT_NAME, self.project_name, &mut errors);
        let author_name: Option<String> = decode(AUTHOR_NAME, self.author_name, &mut errors);
        let total_commits = decode(TOTAL_COMMITS, self.total_commits, &mut errors);
        let commits_by_author = decode(COMMITS_BY_AUTHOR, self.commits_by_author, &mut errors);
        let contribution_percentage = decode(CONTRIBUTION_PERCENTAGE, self.contribution_percentage, &mut errors)
            .filter(|p: &f64| keep_if(is_valid_percentage(*p), CONTRIBUTION_PERCENTAGE, p, &mut errors));
        let rating = decode(RATING, self.rating, &mut errors)
            .filter(|r: &u8| keep_if(is_valid_rating(*r), RATING, r, &mut errors));

        let fields = ExtractedFields {
            project_name: project_name.map(|s| s.trim().to_string()),
            author_name: author_name.map(|s| s.trim().to_string()),
            total_commits,
            commits_by_author,
            contribution_percentage,
            rating,
        };
        (fields, errors)
    }
}

fn decode<T: DeserializeOwned>(
    field: &'static str,
    value: Option<Value>,
    errors: &mut Vec<ParseFieldError>,
) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(_) => {
            errors.push(ParseFieldError::InvalidStructuredValue {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

fn keep_if<T: ToString>(valid: bool, field: &'static str, value: &T, errors: &mut Vec<ParseFieldError>) -> bool {
    if !valid {
        errors.push(ParseFieldError::InvalidStructuredValue {
            field,
            value: value.to_string(),
        });
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELED: &str = "Project name: ASTRA_Autogen
Author name: MUVivekanand
Total commits: 10
No of commits by author: 4
Contribution Percentage: 40.0%
Contribution Rating: 4/6";

    #[test]
    fn decodes_fenced_json_reply() {
        let raw = r#"Here are the numbers:

```json
{
  "project_name": "ASTRA_Autogen",
  "author_name": "MUVivekanand",
  "total_commits": 10,
  "commits_by_author": 4,
  "contribution_percentage": 40.0,
  "rating": 4
}
```
"#;
        let fields = ResponseParser::parse(raw);
        assert!(fields.is_complete());
        assert_eq!(fields.project_name.as_deref(), Some("ASTRA_Autogen"));
        assert_eq!(fields.contribution_percentage, Some(40.0));
    }

    #[test]
    fn decodes_bare_json_object_with_missing_keys() {
        let fields = ResponseParser::parse(r#"{"total_commits": 12, "commits_by_author": 3}"#);
        assert_eq!(fields.total_commits, Some(12));
        assert_eq!(fields.commits_by_author, Some(3));
        assert_eq!(
            fields.missing_fields(),
            vec!["project_name", "author_name", "contribution_percentage", "rating"]
        );
    }

    #[test]
    fn one_mistyped_key_keeps_the_other_five() {
        let raw = r#"```json
{
  "project_name": "ASTRA_Autogen",
  "author_name": "MUVivekanand",
  "total_commits": 10,
  "commits_by_author": 4,
  "contribution_percentage": "40.0%",
  "rating": 4
}
```"#;
        let (fields, errors) = ResponseParser::parse_structured_with_errors(raw).unwrap();

        assert_eq!(fields.project_name.as_deref(), Some("ASTRA_Autogen"));
        assert_eq!(fields.author_name.as_deref(), Some("MUVivekanand"));
        assert_eq!(fields.total_commits, Some(10));
        assert_eq!(fields.commits_by_author, Some(4));
        assert_eq!(fields.rating, Some(4));
        assert_eq!(fields.contribution_percentage, None);
        assert_eq!(
            errors,
            vec![ParseFieldError::InvalidStructuredValue {
                field: CONTRIBUTION_PERCENTAGE,
                value: "\"40.0%\"".to_string(),
            }]
        );

        assert_eq!(ResponseParser::parse(raw).total_commits, Some(10));
    }

    #[test]
    fn fractional_rating_and_string_count_are_rejected_individually() {
        let (fields, errors) = ResponseParser::parse_structured_with_errors(
            r#"{"rating": 4.5, "total_commits": "10", "commits_by_author": 2}"#,
        )
        .unwrap();

        assert_eq!(fields.rating, None);
        assert_eq!(fields.total_commits, None);
        assert_eq!(fields.commits_by_author, Some(2));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn null_values_are_absent_without_errors() {
        let (fields, errors) =
            ResponseParser::parse_structured_with_errors(r#"{"project_name": null, "rating": 2}"#).unwrap();
        assert_eq!(fields.project_name, None);
        assert_eq!(fields.rating, Some(2));
        assert!(errors.is_empty());
    }

    #[test]
    fn out_of_range_structured_values_are_dropped() {
        let (fields, errors) = ResponseParser::parse_structured_with_errors(
            r#"{"contribution_percentage": 140.0, "rating": 9, "total_commits": 1}"#,
        )
        .unwrap();
        assert_eq!(fields.contribution_percentage, None);
        assert_eq!(fields.rating, None);
        assert_eq!(fields.total_commits, Some(1));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn unrelated_json_block_does_not_hide_labeled_lines() {
        let raw = format!("Tool output:\n```json\n{{\"commits\": [\"a1\", \"b2\"]}}\n```\n{}", LABELED);
        let fields = ResponseParser::parse(&raw);

        assert!(fields.is_complete());
        assert_eq!(fields.total_commits, Some(10));
        assert_eq!(fields.project_name.as_deref(), Some("ASTRA_Autogen"));
        assert_eq!(fields.rating, Some(4));
    }

    #[test]
    fn labeled_lines_fill_keys_the_json_left_out() {
        let raw = "```json\n{\"total_commits\": 12}\n```\nTotal commits: 99\nContribution Rating: 5/6";
        let fields = ResponseParser::parse(raw);
        assert_eq!(fields.total_commits, Some(12));
        assert_eq!(fields.rating, Some(5));
    }

    #[test]
    fn labeled_lines_are_the_fallback() {
        let fields = ResponseParser::parse("Total commits: 7\nContribution Rating: 1/6");
        assert_eq!(fields.total_commits, Some(7));
        assert_eq!(fields.rating, Some(1));
    }

    #[test]
    fn malformed_json_falls_back_to_labeled_lines() {
        let raw = "```json\n{\"total_commits\": \"many\"}\n```\nTotal commits: 10";
        let fields = ResponseParser::parse(raw);
        assert_eq!(fields.total_commits, Some(10));
    }

    #[test]
    fn unclosed_fence_is_not_structured() {
        assert_eq!(ResponseParser::parse_structured("```json\n{\"rating\": 2}"), None);
    }
}
