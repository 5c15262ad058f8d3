// src/diff.rs
//! Change detection between two snapshots of the same page.
//!
//! The fingerprint decides *whether* anything changed. The group comparison
//! only says *where*; a changed headline alone gives `Changed` with no groups.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::snapshot::Snapshot;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Change {
    /// Nothing comparable stored yet.
    First,
    Unchanged,
    /// Division / time-slot labels whose rows were added, removed or edited.
    Changed { groups: Vec<String> },
}

pub fn compare(prev: Option<&Snapshot>, next: &Snapshot) -> Change {
    let prev = match prev {
        Some(p) if p.kind() == next.kind() => p,
        _ => return Change::First,
    };
    if prev.fingerprint() == next.fingerprint() {
        return Change::Unchanged;
    }
    Change::Changed { groups: changed_groups(prev, next) }
}

fn changed_groups(prev: &Snapshot, next: &Snapshot) -> Vec<String> {
    match (prev, next) {
        (Snapshot::Ladder(a), Snapshot::Ladder(b)) => diff_groups(
            a.divisions.iter().map(|d| (d.label.as_str(), d.standings.as_slice())),
            b.divisions.iter().map(|d| (d.label.as_str(), d.standings.as_slice())),
        ),
        (Snapshot::Roster(a), Snapshot::Roster(b)) => diff_groups(
            a.slots.iter().map(|s| (s.label.as_str(), s.matches.as_slice())),
            b.slots.iter().map(|s| (s.label.as_str(), s.matches.as_slice())),
        ),
        _ => Vec::new(),
    }
}

/// Key each group by (label, nth occurrence of that label) so a repeated
/// "Division 1" is compared with its own counterpart, not the first one.
fn keyed<'a, T>(
    groups: impl Iterator<Item = (&'a str, &'a [T])>,
) -> Vec<((&'a str, usize), &'a [T])> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    groups
        .map(|(label, rows)| {
            let n = seen.entry(label).or_default();
            let key = (label, *n);
            *n += 1;
            (key, rows)
        })
        .collect()
}

/// Labels of groups added, edited (new page order), then removed.
fn diff_groups<'a, T: PartialEq + 'a>(
    old: impl Iterator<Item = (&'a str, &'a [T])>,
    new: impl Iterator<Item = (&'a str, &'a [T])>,
) -> Vec<String> {
    let old = keyed(old);
    let new = keyed(new);
    let old_map: HashMap<_, _> = old.iter().copied().collect();
    let new_keys: HashSet<_> = new.iter().map(|(k, _)| *k).collect();

    let mut out = Vec::new();
    for (key, rows) in &new {
        if old_map.get(key) != Some(rows) {
            out.push(s!(key.0));
        }
    }
    for (key, _) in &old {
        if !new_keys.contains(key) {
            out.push(s!(key.0));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fingerprint;
    use crate::snapshot::*;
    use chrono::Utc;

    fn ladder(fp: &str, divs: Vec<(&str, Vec<(&str, &str)>)>) -> Snapshot {
        Snapshot::Ladder(LadderSnapshot {
            id: s!("ladder:x"),
            url: s!("u"),
            competition_name: s!("Monday Mens"),
            headline: s!("h"),
            game_day: GameDay::Monday,
            scraped_at: Utc::now(),
            fingerprint: Fingerprint::compute(fp),
            divisions: divs
                .into_iter()
                .map(|(label, rows)| Division {
                    label: s!(label),
                    standings: rows
                        .into_iter()
                        .enumerate()
                        .map(|(i, (team, score))| TeamStanding {
                            rank: (i + 1).to_string(),
                            team_name: s!(team),
                            score: Some(s!(score)),
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    #[test]
    fn no_previous_is_first() {
        let next = ladder("a", vec![]);
        assert_eq!(compare(None, &next), Change::First);
    }

    #[test]
    fn same_fingerprint_is_unchanged() {
        let a = ladder("page", vec![("Division 1", vec![("Sharks", "15")])]);
        let b = ladder("page", vec![("Division 1", vec![("Sharks", "15")])]);
        assert_eq!(compare(Some(&a), &b), Change::Unchanged);
    }

    #[test]
    fn names_the_changed_divisions() {
        let a = ladder(
            "v1",
            vec![("Division 1", vec![("Sharks", "15")]), ("Division 2", vec![("Eels", "3")]), ("Division 3", vec![])],
        );
        let b = ladder(
            "v2",
            vec![("Division 1", vec![("Sharks", "15")]), ("Division 2", vec![("Eels", "6")]), ("Division 4", vec![])],
        );
        assert_eq!(
            compare(Some(&a), &b),
            Change::Changed { groups: vec![s!("Division 2"), s!("Division 4"), s!("Division 3")] }
        );
    }

    #[test]
    fn repeated_labels_compared_by_position() {
        let a = ladder(
            "v1",
            vec![("Division 1", vec![("Sharks", "15")]), ("Division 1", vec![("Eels", "3")])],
        );
        let b = ladder(
            "v2",
            vec![("Division 1", vec![("Sharks", "15")]), ("Division 1", vec![("Eels", "4")])],
        );
        assert_eq!(compare(Some(&a), &b), Change::Changed { groups: vec![s!("Division 1")] });

        // dropping the second "Division 1" is a removal, not a no-op
        let c = ladder("v3", vec![("Division 1", vec![("Sharks", "15")])]);
        assert_eq!(compare(Some(&a), &c), Change::Changed { groups: vec![s!("Division 1")] });
    }

    #[test]
    fn roster_slot_edit_named() {
        let slot = |label: &str, a: &str| TimeSlot {
            label: s!(label),
            matches: vec![Match { team_a: s!(a), team_b: s!("Rays") }],
        };
        let roster = |fp: &str, slots: Vec<TimeSlot>| {
            Snapshot::Roster(RosterSnapshot {
                id: s!("roster:x"),
                url: s!("u"),
                headline: s!("h"),
                game_day: GameDay::Monday,
                scraped_at: Utc::now(),
                fingerprint: Fingerprint::compute(fp),
                slots,
            })
        };
        let a = roster("v1", vec![slot("6:45pm", "Sharks"), slot("7.30pm", "Eels")]);
        let b = roster("v2", vec![slot("6:45pm", "Sharks"), slot("7.30pm", "Crabs")]);
        assert_eq!(compare(Some(&a), &b), Change::Changed { groups: vec![s!("7.30pm")] });
    }

    #[test]
    fn headline_only_change_has_no_groups() {
        let a = ladder("v1", vec![("Division 1", vec![("Sharks", "15")])]);
        let b = ladder("v2", vec![("Division 1", vec![("Sharks", "15")])]);
        assert_eq!(compare(Some(&a), &b), Change::Changed { groups: vec![] });
    }

    #[test]
    fn different_kind_is_first() {
        let a = Snapshot::Roster(RosterSnapshot {
            id: s!("roster:x"),
            url: s!("u"),
            headline: s!("h"),
            game_day: GameDay::Monday,
            scraped_at: Utc::now(),
            fingerprint: Fingerprint::compute("a"),
            slots: vec![],
        });
        let b = ladder("b", vec![]);
        assert_eq!(compare(Some(&a), &b), Change::First);
    }
}
