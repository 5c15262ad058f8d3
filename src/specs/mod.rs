// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows *where the ground truth lives* on one page convention of the
//! league site and how to lift it out of a parsed DOM:
//!
//! - `metadata` – competition breadcrumb, headline, game day (both pages).
//! - `ladder`   – `<strong>Division N</strong>` headings + standings tables.
//! - `roster`   – time-slot headings + fixtures tables inside `.article`.
//! - `matchers` – the pure text predicates the above share.
//!
//! Specs never fetch, hash, persist or timestamp; that is `scrape` and
//! `snapshot`. They take an already-normalized `scraper::Html`.
//!
//! Malformed rows are dropped quietly. A missing page convention is an error.
pub mod ladder;
pub mod matchers;
pub mod metadata;
pub mod roster;

use crate::config::options::PairingPolicy;
use crate::error::{Result, ScrapeError};

/// Pair headings with tables by position: Nth label ↔ Nth table.
///
/// The page gives no explicit link between a heading and its table, so order
/// is all there is. `what` names the heading kind for logs and errors.
pub(crate) fn pair_by_position<T>(
    labels: Vec<String>,
    tables: Vec<Vec<T>>,
    policy: PairingPolicy,
    what: &str,
) -> Result<Vec<(String, Vec<T>)>> {
    if labels.len() != tables.len() {
        match policy {
            PairingPolicy::Strict => {
                return Err(ScrapeError::mismatch(format!(
                    "{} {what} headings but {} tables",
                    labels.len(),
                    tables.len()
                )));
            }
            PairingPolicy::Truncate => {
                tracing::warn!(
                    headings = labels.len(),
                    tables = tables.len(),
                    "{what} heading/table count mismatch; truncating to the shorter list"
                );
            }
        }
    }
    Ok(labels.into_iter().zip(tables).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_shorter_side() {
        let got = pair_by_position(
            vec![s!("Division 1"), s!("Division 2"), s!("Division 3")],
            vec![vec![1], vec![2]],
            PairingPolicy::Truncate,
            "division",
        )
        .unwrap();
        assert_eq!(got, vec![(s!("Division 1"), vec![1]), (s!("Division 2"), vec![2])]);
    }

    #[test]
    fn strict_rejects_count_mismatch() {
        let err = pair_by_position(
            vec![s!("6:45pm")],
            Vec::<Vec<u8>>::new(),
            PairingPolicy::Strict,
            "time-slot",
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch(_)));
    }
}
