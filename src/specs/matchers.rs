// src/specs/matchers.rs
//! Pure text predicates used to recognise page structure.

use crate::core::sanitize::normalize_ws;
use crate::snapshot::GameDay;

/// The live visitor banner: "We have 12 guests online", and nothing else
/// around it (surrounding whitespace aside).
pub fn is_guest_counter(text: &str) -> bool {
    regex!(r"(?s)\A\s*We have\b.*\d{1,3}.*guests.*online\s*\z").is_match(text)
}

/// First Monday..Friday name in `text`, any case.
pub fn find_weekday(text: &str) -> Option<GameDay> {
    regex!(r"(?i)monday|tuesday|wednesday|thursday|friday")
        .find(text)
        .and_then(|m| GameDay::from_name(m.as_str()))
}

/// `"Division 1"` out of a bold heading: from a "div" (any case) on the
/// heading's last line through to its end. `None` if the heading is not a
/// division heading, or if the "div" line is followed by more text.
pub fn division_label(text: &str) -> Option<&str> {
    regex!(r"(?i)div.*\z").find(text.trim()).map(|m| m.as_str())
}

/// "6:45", "7.30pm", "8pm".
pub fn is_time_label(text: &str) -> bool {
    regex!(r"\d{1,2}[.:]\d{2}|\dpm").is_match(text)
}

/// A standings row that just repeats the column headers.
pub fn is_standings_header(team_name: &str) -> bool {
    let t = normalize_ws(team_name);
    ["team", "team name", "teamname"].iter().any(|h| t.eq_ignore_ascii_case(h))
}

/// Fixtures header cells are literally "Team A" / "Team B".
pub fn is_fixture_header(cell: &str) -> bool {
    matches!(cell, "Team A" | "Team B")
}
