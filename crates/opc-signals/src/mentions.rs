//! Mention-count extraction from narrative reasons.

use regex::Regex;
use std::sync::LazyLock;

/// "<number> [recent] mentions", e.g. "12 recent mentions", "1,200 mentions".
///
/// ASCII digits only: `\d` would also accept other Unicode digit runs,
/// which `u64::from_str` rejects.
static MENTIONS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)\s+(?:recent\s+)?mentions\b").ok()
});

/// Count embedded in the first reason that mentions one, or 0.
///
/// Later matching reasons are ignored. Counts too large for `u64` saturate.
pub fn extract_mention_count<S: AsRef<str>>(reasons: &[S]) -> u64 {
    let Some(re) = MENTIONS_RE.as_ref() else {
        return 0;
    };
    reasons
        .iter()
        .find_map(|reason| re.captures(reason.as_ref()))
        .and_then(|caps| caps.get(1))
        .map(|m| parse_count(m.as_str()))
        .unwrap_or(0)
}

/// Parse a digit run, optionally comma-grouped.
fn parse_count(digits: &str) -> u64 {
    let plain: String = digits.chars().filter(|c| *c != ',').collect();
    // Only ASCII digits remain, so the sole failure is overflow.
    plain.parse::<u64>().unwrap_or(u64::MAX)
}
