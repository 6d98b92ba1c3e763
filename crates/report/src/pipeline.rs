use std::collections::HashSet;

use analysis::{label_statistics, link_bug_mentions, LabelStat};
use classifier::{has_label, partition, ClassifiedRecords, RawRecord, ThreadHead};
use common::Result;

/// Everything one analysis run produces. Each field is computed once and not
/// mutated afterwards; downstream reporting only reads from here.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub classified: ClassifiedRecords,
    pub bug_numbers: Vec<i64>,
    pub label_stats: Vec<LabelStat>,
    pub linked_pull_requests: Vec<ThreadHead>,
}

pub fn run(records: &[RawRecord], bug_label: &str) -> Result<AnalysisReport> {
    let classified = partition(records).map_err(anyhow::Error::from)?;

    let bug_issues: Vec<&ThreadHead> = classified
        .issues
        .iter()
        .filter(|issue| has_label(issue, bug_label))
        .collect();
    let bug_number_set: HashSet<i64> = bug_issues.iter().map(|issue| issue.number).collect();
    let label_stats = label_statistics(&bug_issues);
    let linked_pull_requests: Vec<ThreadHead> = link_bug_mentions(
        &bug_number_set,
        &classified.pull_requests,
        &classified.pull_request_comments,
    )
    .into_iter()
    .cloned()
    .collect();

    let mut bug_numbers: Vec<i64> = bug_number_set.into_iter().collect();
    bug_numbers.sort_unstable();

    Ok(AnalysisReport {
        classified,
        bug_numbers,
        label_stats,
        linked_pull_requests,
    })
}
