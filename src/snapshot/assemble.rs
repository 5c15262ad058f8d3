// src/snapshot/assemble.rs
//! Turns extracted parts into a finished, identified snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::types::*;
use crate::config::options::ScrapeKind;
use crate::core::Fingerprint;

/// Wall-clock source. Injected so tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> { self.0 }
}

/// Owns the clock and the id sequence. One per process is typical;
/// ids are only ordered within a single assembler.
#[derive(Debug, Default)]
pub struct SnapshotAssembler<C: Clock = SystemClock> {
    clock: C,
    seq: AtomicU64,
}

impl<C: Clock> SnapshotAssembler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, seq: AtomicU64::new(0) }
    }

    /// `ladder:20261019183000123456-000001`. The timestamp keeps ids readable,
    /// the zero-padded sequence keeps them unique when two land in the same
    /// microsecond, and both are fixed width so string order is creation order.
    fn next_id(&self, kind: ScrapeKind) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = self.clock.now().format("%Y%m%d%H%M%S%6f");
        format!("{}:{stamp}-{seq:06}", kind.as_str())
    }

    pub fn ladder(
        &self,
        url: &str,
        competition_name: String,
        headline: String,
        game_day: GameDay,
        divisions: Vec<Division>,
        fingerprint: Fingerprint,
    ) -> LadderSnapshot {
        let scraped_at = self.clock.now();
        LadderSnapshot {
            id: self.next_id(ScrapeKind::Ladder),
            url: s!(url),
            competition_name,
            headline,
            game_day,
            scraped_at,
            fingerprint,
            divisions,
        }
    }

    pub fn roster(
        &self,
        url: &str,
        headline: String,
        game_day: GameDay,
        slots: Vec<TimeSlot>,
        fingerprint: Fingerprint,
    ) -> RosterSnapshot {
        let scraped_at = self.clock.now();
        RosterSnapshot {
            id: self.next_id(ScrapeKind::Roster),
            url: s!(url),
            headline,
            game_day,
            scraped_at,
            fingerprint,
            slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> SnapshotAssembler<FixedClock> {
        let t = Utc.with_ymd_and_hms(2026, 10, 19, 18, 30, 0).unwrap();
        SnapshotAssembler::new(FixedClock(t))
    }

    #[test]
    fn ids_are_prefixed_and_unique_under_a_frozen_clock() {
        let asm = fixed();
        let fp = Fingerprint::compute("x");
        let a = asm.roster("u", s!("h"), GameDay::Monday, vec![], fp.clone());
        let b = asm.roster("u", s!("h"), GameDay::Monday, vec![], fp);

        assert_eq!(a.id, "roster:20261019183000000000-000001");
        assert_eq!(b.id, "roster:20261019183000000000-000002");
        assert!(a.id < b.id);
    }

    #[test]
    fn ladder_carries_parts_through() {
        let asm = fixed();
        let divs = vec![Division { label: s!("Division 1"), standings: vec![] }];
        let snap = asm.ladder(
            "http://example.test",
            s!("Monday Mens"),
            s!("Round 5"),
            GameDay::Monday,
            divs.clone(),
            Fingerprint::compute("page"),
        );
        assert!(snap.id.starts_with("ladder:"));
        assert_eq!(snap.divisions, divs);
        assert_eq!(snap.scraped_at, Utc.with_ymd_and_hms(2026, 10, 19, 18, 30, 0).unwrap());
        assert_eq!(snap.fingerprint, Fingerprint::compute("page"));
    }
}
