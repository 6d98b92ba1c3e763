use crate::errors::{ClassifyError, Result};
use crate::labels::decode_labels;
use crate::models::{ClassifiedRecords, Record, ThreadComment, ThreadHead};
use crate::payloads::RawRecord;

const PULL_REQUEST_MARKER: &str = "/pull/";
const ISSUE_MARKER: &str = "/issues/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThreadKind {
    Issue,
    PullRequest,
}

fn thread_kind(record: &RawRecord) -> Result<ThreadKind> {
    let html_url = record.html_url.as_deref().unwrap_or("");
    if html_url.contains(PULL_REQUEST_MARKER) {
        Ok(ThreadKind::PullRequest)
    } else if html_url.contains(ISSUE_MARKER) {
        Ok(ThreadKind::Issue)
    } else {
        Err(ClassifyError::UnrecognizedThreadUrl {
            url: record.url.clone(),
        })
    }
}

/// Classifies one raw row. Returns `None` for open threads and their
/// comments, which are excluded from the analysis entirely.
///
/// The filters apply in a fixed order: closed first, then the issue/pull
/// split on `html_url` (comment rows repeat their head's columns, so they
/// inherit the split), then the head/comment split on `comment_created_at`.
pub fn classify_record(record: &RawRecord) -> Result<Option<Record>> {
    let Some(closed_at) = record.closed_at else {
        return Ok(None);
    };

    let kind = thread_kind(record)?;

    let record = if let Some(created_at) = record.comment_created_at {
        let comment = ThreadComment {
            thread_url: record.url.clone(),
            body: record.comment_body.clone(),
            created_at,
        };
        match kind {
            ThreadKind::Issue => Record::IssueComment(comment),
            ThreadKind::PullRequest => Record::PullRequestComment(comment),
        }
    } else {
        let number = record
            .number
            .ok_or_else(|| ClassifyError::MissingNumber {
                url: record.url.clone(),
            })?;
        let head = ThreadHead {
            url: record.url.clone(),
            number,
            body: record.body.clone(),
            labels: decode_labels(record)?,
            closed_at,
        };
        match kind {
            ThreadKind::Issue => Record::IssueHead(head),
            ThreadKind::PullRequest => Record::PullRequestHead(head),
        }
    };

    Ok(Some(record))
}

/// Partitions the full export into the four disjoint sets. The first record
/// that cannot be classified aborts the run with its `url`; dropping it
/// silently would skew every downstream statistic.
pub fn partition(records: &[RawRecord]) -> Result<ClassifiedRecords> {
    let mut classified = ClassifiedRecords::default();
    for record in records {
        if let Some(record) = classify_record(record)? {
            classified.push(record);
        }
    }
    Ok(classified)
}
