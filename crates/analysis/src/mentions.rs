use once_cell::sync::Lazy;
use regex::Regex;

// A mention is a '#' immediately followed by one to four decimal digits.
// Longer digit runs are capped at four: "#12345" yields 1234 and leaves the
// trailing digit unmatched. The range cap is the pattern itself; values that
// cannot be real issue numbers are kept as an accepted false-positive source.
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\d{1,4})").expect("invalid regex"));

/// Extracts every `#number` mention from `text`, in order, duplicates kept.
pub fn extract_mentions(text: &str) -> Vec<i64> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}
