// src/csv.rs
use std::io::{self, Write};

use crate::snapshot::Snapshot;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Snapshot → table ---------------- */

/// Flatten a snapshot into one row per team / match, group label first.
///   Ladder: Division, Rank, Team, Score
///   Roster: Time, Team A, Team B
pub fn snapshot_table(snap: &Snapshot) -> (Vec<String>, Vec<Vec<String>>) {
    match snap {
        Snapshot::Ladder(l) => {
            let headers = vec![s!("Division"), s!("Rank"), s!("Team"), s!("Score")];
            let rows = l
                .divisions
                .iter()
                .flat_map(|d| {
                    d.standings.iter().map(move |t| {
                        vec![
                            d.label.clone(),
                            t.rank.clone(),
                            t.team_name.clone(),
                            t.score.clone().unwrap_or_default(),
                        ]
                    })
                })
                .collect();
            (headers, rows)
        }
        Snapshot::Roster(r) => {
            let headers = vec![s!("Time"), s!("Team A"), s!("Team B")];
            let rows = r
                .slots
                .iter()
                .flat_map(|s| {
                    s.matches
                        .iter()
                        .map(move |m| vec![s.label.clone(), m.team_a.clone(), m.team_b.clone()])
                })
                .collect();
            (headers, rows)
        }
    }
}

/// Whole snapshot as delimited text.
pub fn to_delimited(snap: &Snapshot, sep: char, include_headers: bool) -> io::Result<String> {
    let (headers, rows) = snapshot_table(snap);
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        write_row(&mut buf, &headers, sep)?;
    }
    for r in &rows {
        write_row(&mut buf, r, sep)?;
    }

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
