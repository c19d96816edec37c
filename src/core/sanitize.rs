// src/core/sanitize.rs

use crate::config::consts::{BREAKDOWN_YEAR, TEAM_PREFIX_CHARS};

/// Drop the team key prefix the way the scripts always have: every leading
/// `f`, `r` or `c` goes, not just the literal `"frc"`.
///
/// `frc254` → `254`, but `frcrc9` → `9` too.
pub fn strip_team_prefix(key: &str) -> &str {
    key.trim_start_matches(TEAM_PREFIX_CHARS)
}

/// Team key as printed: stripped unless the caller wants the raw key.
pub fn team_field(key: &str, keep_prefix: bool) -> String {
    if keep_prefix { s!(key) } else { s!(strip_team_prefix(key)) }
}

/// Score breakdown columns only exist for the 2022 season.
pub fn is_breakdown_event(event_key: &str) -> bool {
    event_key.starts_with(BREAKDOWN_YEAR)
}
