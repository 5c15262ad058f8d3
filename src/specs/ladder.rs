// src/specs/ladder.rs
//! Ladder page: bold "Division N" headings, each followed (in document order)
//! by a standings table of `Rank | Team | Score` rows.

use scraper::{ElementRef, Html};

use super::matchers::{division_label, is_standings_header};
use super::pair_by_position;
use crate::config::options::PairingPolicy;
use crate::core::html::{bold_texts, table_cells};
use crate::error::Result;
use crate::snapshot::{Division, TeamStanding};

/// Division labels in document order.
pub fn division_labels(root: ElementRef<'_>) -> Vec<String> {
    bold_texts(root)
        .iter()
        .filter_map(|t| division_label(t).map(str::to_string))
        .collect()
}

/// Cells zip positionally onto (rank, team, score). No team name, no row.
pub fn standing_from_cells(cells: Vec<String>) -> Option<TeamStanding> {
    let mut it = cells.into_iter();
    let rank = it.next()?;
    let team_name = it.next().filter(|t| !t.is_empty() && !is_standings_header(t))?;
    let score = it.next();
    Some(TeamStanding { rank, team_name, score })
}

/// One filtered standings list per `<table>`, document order.
pub fn standings_tables(root: ElementRef<'_>) -> Vec<Vec<TeamStanding>> {
    table_cells(root)
        .into_iter()
        .map(|rows| rows.into_iter().filter_map(standing_from_cells).collect())
        .collect()
}

pub fn extract_ladder(doc: &Html, pairing: PairingPolicy) -> Result<Vec<Division>> {
    let t = std::time::Instant::now();
    let root = doc.root_element();

    let labels = division_labels(root);
    let tables = standings_tables(root);

    let divisions: Vec<Division> = pair_by_position(labels, tables, pairing, "division")?
        .into_iter()
        .map(|(label, standings)| Division { label, standings })
        .collect();

    tracing::debug!(divisions = divisions.len(), elapsed = ?t.elapsed(), "parsed ladder");
    Ok(divisions)
}
