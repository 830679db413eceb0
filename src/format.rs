//! Display formatting for elapsed times.

/// Formats milliseconds as `m:ss`.
///
/// Minutes are not padded and keep counting past 59; seconds are always two
/// digits. Sub-second remainders are truncated.
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
