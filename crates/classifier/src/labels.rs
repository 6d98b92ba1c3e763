use crate::errors::{ClassifyError, Result};
use crate::models::{Label, ThreadHead};
use crate::payloads::RawRecord;

pub const BUG_LABEL: &str = "bug";

/// Decodes the JSON-encoded label column of a thread-head row. An absent or
/// empty column is an empty label set; anything else must decode as an array
/// of label objects or the export format has shifted.
pub fn decode_labels(record: &RawRecord) -> Result<Vec<Label>> {
    match record.labels.as_deref() {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|source| ClassifyError::MalformedLabels {
            url: record.url.clone(),
            source,
        }),
    }
}

/// Exact, case-sensitive membership test against the decoded label set.
pub fn has_label(head: &ThreadHead, name: &str) -> bool {
    head.labels.iter().any(|label| label.name == name)
}

pub fn is_bug(head: &ThreadHead) -> bool {
    has_label(head, BUG_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record_with_labels(labels: Option<&str>) -> RawRecord {
        RawRecord {
            url: "https://api.github.com/repos/o/r/issues/1".into(),
            html_url: Some("https://github.com/o/r/issues/1".into()),
            closed_at: Some(Utc::now()),
            labels: labels.map(str::to_string),
            body: None,
            comment_created_at: None,
            comment_body: None,
            number: Some(1),
        }
    }

    fn head_with_labels(labels: Vec<Label>) -> ThreadHead {
        ThreadHead {
            url: "https://api.github.com/repos/o/r/issues/1".into(),
            number: 1,
            body: None,
            labels,
            closed_at: Utc::now(),
        }
    }

    #[test]
    fn absent_column_is_empty_label_set() {
        assert_eq!(decode_labels(&record_with_labels(None)).unwrap(), vec![]);
        assert_eq!(decode_labels(&record_with_labels(Some(""))).unwrap(), vec![]);
    }

    #[test]
    fn decodes_label_names_and_ignores_extra_fields() {
        let raw = r#"[{"name":"bug","color":"fc2929"},{"name":"help wanted","color":"159818"}]"#;
        let labels = decode_labels(&record_with_labels(Some(raw))).unwrap();
        assert_eq!(
            labels,
            vec![
                Label { name: "bug".into() },
                Label {
                    name: "help wanted".into()
                }
            ]
        );
    }

    #[test]
    fn decoding_is_idempotent() {
        let raw = r#"[{"name":"bug"}]"#;
        let record = record_with_labels(Some(raw));
        let first = decode_labels(&record).unwrap();
        let second = decode_labels(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_label_data_reports_url() {
        let record = record_with_labels(Some("not json"));
        let err = decode_labels(&record).unwrap_err();
        match err {
            ClassifyError::MalformedLabels { ref url, .. } => {
                assert_eq!(url, &record.url);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let head = head_with_labels(vec![Label { name: "bug".into() }]);
        assert!(has_label(&head, "bug"));
        assert!(!has_label(&head, "Bug"));
        assert!(!has_label(&head, "bugs"));
        assert!(is_bug(&head));
    }
}
