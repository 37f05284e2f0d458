//! Stale-bar annotation.

use crate::model::instant::Instant;

const TERMINAL_STATUSES: &[&str] = &[
    "completed",
    "complete",
    "done",
    "published",
    "accepted",
    "cancelled",
    "canceled",
];

/// Whether `status` names a finished state (case-insensitive).
pub fn is_terminal_status(status: &str) -> bool {
    let normalized = status.trim().to_ascii_lowercase();
    TERMINAL_STATUSES.contains(&normalized.as_str())
}

/// True when `now` is past `end` and the item has not reached a terminal
/// status. Items without an end are never stale.
pub fn is_stale(now: Instant, end: Option<Instant>, status: &str) -> bool {
    match end {
        Some(end) => now > end && !is_terminal_status(status),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_stale, is_terminal_status};
    use crate::model::instant::parse_instant;

    #[test]
    fn terminal_statuses_ignore_case_and_padding() {
        assert!(is_terminal_status(" Published "));
        assert!(is_terminal_status("DONE"));
        assert!(!is_terminal_status("Under Review"));
        assert!(!is_terminal_status(""));
    }

    #[test]
    fn stale_requires_past_end_and_open_status() {
        let now = parse_instant("2026-03-15").unwrap();
        let past = parse_instant("2026-03-01");
        let future = parse_instant("2026-04-01");

        assert!(is_stale(now, past, "Drafting"));
        assert!(!is_stale(now, past, "Accepted"));
        assert!(!is_stale(now, future, "Drafting"));
        assert!(!is_stale(now, Some(now), "Drafting"));
        assert!(!is_stale(now, None, "Drafting"));
    }
}
