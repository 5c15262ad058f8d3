// src/specs/roster.rs
//! Roster page: inside the `.article` block, bold time headings ("6:45pm")
//! each followed by a fixtures table of `Team A | VS | Team B` rows.
//!
//! The "VS" column is a single `<td rowspan=9>` per table. It is cut out
//! first so the remaining cells line up as (team A, team B).

use scraper::{ElementRef, Html};

use super::matchers::{is_fixture_header, is_time_label};
use super::pair_by_position;
use crate::config::consts::{ARTICLE_MARKER, JUNK_CELL};
use crate::config::options::PairingPolicy;
use crate::core::html::{bold_texts, table_cells};
use crate::error::{Result, ScrapeError};
use crate::snapshot::{Match, TimeSlot};

/// Time-slot labels in document order, trimmed.
pub fn time_labels(root: ElementRef<'_>) -> Vec<String> {
    bold_texts(root)
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| is_time_label(t))
        .collect()
}

/// Cells zip onto (team A, team B). Blank sides and header echoes are dropped.
pub fn match_from_cells(cells: Vec<String>) -> Option<Match> {
    let mut it = cells.into_iter();
    let keep = |s: &String| !s.is_empty() && !is_fixture_header(s);
    let team_a = it.next().filter(keep)?;
    let team_b = it.next().filter(keep)?;
    Some(Match { team_a, team_b })
}

pub fn fixture_tables(root: ElementRef<'_>) -> Vec<Vec<Match>> {
    table_cells(root)
        .into_iter()
        .map(|rows| rows.into_iter().filter_map(match_from_cells).collect())
        .collect()
}

/// Copy of `doc` with every junk cell under `.article` detached.
/// Returns the cleaned document and how many cells went.
pub fn strip_junk_cells(doc: &Html) -> Result<(Html, usize)> {
    let mut doc = doc.clone();
    let article = doc
        .select(selector!(ARTICLE_MARKER))
        .next()
        .map(|el| el.id())
        .ok_or_else(|| ScrapeError::mismatch("article container not found"))?;

    let mut removed = 0usize;
    loop {
        let junk = doc
            .tree
            .get(article)
            .and_then(ElementRef::wrap)
            .and_then(|el| el.select(selector!(JUNK_CELL)).next())
            .map(|td| td.id());

        match junk.and_then(|id| doc.tree.get_mut(id)) {
            Some(mut node) => {
                node.detach();
                removed += 1;
            }
            None => break,
        }
    }
    Ok((doc, removed))
}

pub fn extract_roster(doc: &Html, pairing: PairingPolicy) -> Result<Vec<TimeSlot>> {
    let t = std::time::Instant::now();
    let (cleaned, removed) = strip_junk_cells(doc)?;

    let article = cleaned
        .select(selector!(ARTICLE_MARKER))
        .next()
        .ok_or_else(|| ScrapeError::mismatch("article container not found"))?;

    let labels = time_labels(article);
    let tables = fixture_tables(article);

    let slots: Vec<TimeSlot> = pair_by_position(labels, tables, pairing, "time-slot")?
        .into_iter()
        .map(|(label, matches)| TimeSlot { label, matches })
        .collect();

    tracing::debug!(slots = slots.len(), junk_cells = removed, elapsed = ?t.elapsed(), "parsed roster");
    Ok(slots)
}
