use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadHead {
    pub url: String,
    pub number: i64,
    pub body: Option<String>,
    pub labels: Vec<Label>,
    pub closed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadComment {
    pub thread_url: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A classified row. The variant is decided once and never revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    IssueHead(ThreadHead),
    IssueComment(ThreadComment),
    PullRequestHead(ThreadHead),
    PullRequestComment(ThreadComment),
}

/// The four disjoint output sets: every closed input record lands in exactly
/// one of them.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClassifiedRecords {
    pub issues: Vec<ThreadHead>,
    pub issue_comments: Vec<ThreadComment>,
    pub pull_requests: Vec<ThreadHead>,
    pub pull_request_comments: Vec<ThreadComment>,
}

impl ClassifiedRecords {
    pub fn total(&self) -> usize {
        self.issues.len()
            + self.issue_comments.len()
            + self.pull_requests.len()
            + self.pull_request_comments.len()
    }

    pub fn push(&mut self, record: Record) {
        match record {
            Record::IssueHead(head) => self.issues.push(head),
            Record::IssueComment(comment) => self.issue_comments.push(comment),
            Record::PullRequestHead(head) => self.pull_requests.push(head),
            Record::PullRequestComment(comment) => self.pull_request_comments.push(comment),
        }
    }
}
