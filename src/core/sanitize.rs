// src/core/sanitize.rs

/// Every line break (`\r\n`, `\n`, `\r`) becomes one space; then trim.
pub fn line_breaks_to_spaces(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filesystem-safe stem from a snapshot id (`ladder:2026…-000001`).
pub fn file_stem(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for ch in id.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); }
        else { out.push('_'); }
    }
    if out.is_empty() { s!("snapshot") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_breaks_become_single_spaces() {
        assert_eq!(line_breaks_to_spaces("  Round 5\nResults\r\n"), "Round 5 Results");
        assert_eq!(line_breaks_to_spaces("a\r\nb\rc"), "a b c");
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  Team \t A \n"), "Team A");
    }

    #[test]
    fn stem_has_no_colons() {
        assert_eq!(file_stem("ladder:20261019-000001"), "ladder_20261019-000001");
        assert_eq!(file_stem(""), "snapshot");
    }
}
