use std::collections::{HashMap, HashSet};

use classifier::{ThreadComment, ThreadHead};
use tracing::debug;

use crate::mentions::extract_mentions;

/// Selects the pull requests whose body, or whose comments, mention at least
/// one number in `bug_numbers`. A single match anywhere links the pull
/// request; there is no weighting. A pull request without any mention is
/// simply not linked.
///
/// This is a recall-oriented heuristic over literal `#number` text.
/// Associations GitHub tracks through its own cross-reference UI never
/// appear as text, so the result under-reports the true fix relationships.
pub fn link_bug_mentions<'a>(
    bug_numbers: &HashSet<i64>,
    pull_requests: &'a [ThreadHead],
    pull_request_comments: &[ThreadComment],
) -> Vec<&'a ThreadHead> {
    let mut comment_mentions: HashMap<&str, Vec<i64>> = HashMap::new();
    for comment in pull_request_comments {
        let mentions = extract_mentions(comment.body.as_deref().unwrap_or(""));
        if !mentions.is_empty() {
            comment_mentions
                .entry(comment.thread_url.as_str())
                .or_default()
                .extend(mentions);
        }
    }

    let linked: Vec<&ThreadHead> = pull_requests
        .iter()
        .filter(|pull_request| {
            let own = extract_mentions(pull_request.body.as_deref().unwrap_or(""));
            let from_comments = comment_mentions
                .get(pull_request.url.as_str())
                .into_iter()
                .flatten();
            own.iter()
                .chain(from_comments)
                .any(|number| bug_numbers.contains(number))
        })
        .collect();

    debug!(
        candidates = pull_requests.len(),
        linked = linked.len(),
        "bug mention linkage computed"
    );
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pull_request(url: &str, number: i64, body: Option<&str>) -> ThreadHead {
        ThreadHead {
            url: url.into(),
            number,
            body: body.map(str::to_string),
            labels: Vec::new(),
            closed_at: Utc.with_ymd_and_hms(2016, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    fn comment(thread_url: &str, body: &str) -> ThreadComment {
        ThreadComment {
            thread_url: thread_url.into(),
            body: Some(body.into()),
            created_at: Utc.with_ymd_and_hms(2016, 5, 2, 0, 0, 0).unwrap(),
        }
    }

    fn bug_numbers() -> HashSet<i64> {
        HashSet::from([12, 99])
    }

    #[test]
    fn body_mention_links_the_pull_request() {
        let prs = vec![pull_request("pr/100", 100, Some("See issue #12"))];
        let linked = link_bug_mentions(&bug_numbers(), &prs, &[]);
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].number, 100);
    }

    #[test]
    fn non_bug_mention_does_not_link() {
        let prs = vec![pull_request("pr/101", 101, Some("See issue #13"))];
        let linked = link_bug_mentions(&bug_numbers(), &prs, &[]);
        assert!(linked.is_empty());
    }

    #[test]
    fn comment_mention_links_a_pull_request_with_empty_body() {
        let prs = vec![pull_request("pr/102", 102, None)];
        let comments = vec![comment("pr/102", "duplicate of #99")];
        let linked = link_bug_mentions(&bug_numbers(), &prs, &comments);
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].number, 102);
    }

    #[test]
    fn comment_mentions_only_count_for_their_own_thread() {
        let prs = vec![
            pull_request("pr/103", 103, None),
            pull_request("pr/104", 104, None),
        ];
        let comments = vec![comment("pr/103", "#12")];
        let linked = link_bug_mentions(&bug_numbers(), &prs, &comments);
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].number, 103);
    }

    #[test]
    fn no_mentions_anywhere_links_nothing() {
        let prs = vec![pull_request("pr/105", 105, Some("plain text"))];
        let comments = vec![comment("pr/105", "also plain")];
        assert!(link_bug_mentions(&bug_numbers(), &prs, &comments).is_empty());
    }
}
