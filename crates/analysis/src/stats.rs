use std::collections::HashMap;

use classifier::ThreadHead;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabelStat {
    pub name: String,
    pub count: usize,
    pub proportion: f64,
}

/// Counts, over the bug-issue set, how often each label name occurs, and the
/// share of bug issues carrying it. Sorted by descending count, then name, so
/// reports are stable across runs.
pub fn label_statistics(bug_issues: &[&ThreadHead]) -> Vec<LabelStat> {
    if bug_issues.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for issue in bug_issues {
        for label in &issue.labels {
            *counts.entry(label.name.as_str()).or_insert(0) += 1;
        }
    }

    let total = bug_issues.len() as f64;
    let mut stats: Vec<LabelStat> = counts
        .into_iter()
        .map(|(name, count)| LabelStat {
            name: name.to_string(),
            count,
            proportion: count as f64 / total,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    stats
}
