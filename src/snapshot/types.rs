// src/snapshot/types.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::options::ScrapeKind;
use crate::core::Fingerprint;

/// The five league nights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl GameDay {
    pub const ALL: [GameDay; 5] = [
        GameDay::Monday,
        GameDay::Tuesday,
        GameDay::Wednesday,
        GameDay::Thursday,
        GameDay::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameDay::Monday => "Monday",
            GameDay::Tuesday => "Tuesday",
            GameDay::Wednesday => "Wednesday",
            GameDay::Thursday => "Thursday",
            GameDay::Friday => "Friday",
        }
    }

    /// Case-insensitive lookup by full name.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for GameDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ladder row. `rank` is kept as printed ("1", "=3", …).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub rank: String,
    pub team_name: String,
    pub score: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub label: String,
    pub standings: Vec<TeamStanding>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team_a: String,
    pub team_b: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub matches: Vec<Match>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSnapshot {
    pub id: String,
    pub url: String,
    pub competition_name: String,
    pub headline: String,
    pub game_day: GameDay,
    pub scraped_at: DateTime<Utc>,
    pub fingerprint: Fingerprint,
    pub divisions: Vec<Division>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub id: String,
    pub url: String,
    pub headline: String,
    pub game_day: GameDay,
    pub scraped_at: DateTime<Utc>,
    pub fingerprint: Fingerprint,
    pub slots: Vec<TimeSlot>,
}

/// Either snapshot kind, tagged in JSON as `"kind": "ladder" | "roster"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Snapshot {
    Ladder(LadderSnapshot),
    Roster(RosterSnapshot),
}

impl Snapshot {
    pub fn kind(&self) -> ScrapeKind {
        match self {
            Snapshot::Ladder(_) => ScrapeKind::Ladder,
            Snapshot::Roster(_) => ScrapeKind::Roster,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Snapshot::Ladder(l) => &l.id,
            Snapshot::Roster(r) => &r.id,
        }
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            Snapshot::Ladder(l) => &l.fingerprint,
            Snapshot::Roster(r) => &r.fingerprint,
        }
    }

    pub fn scraped_at(&self) -> DateTime<Utc> {
        match self {
            Snapshot::Ladder(l) => l.scraped_at,
            Snapshot::Roster(r) => r.scraped_at,
        }
    }
}

impl From<LadderSnapshot> for Snapshot {
    fn from(s: LadderSnapshot) -> Self { Snapshot::Ladder(s) }
}

impl From<RosterSnapshot> for Snapshot {
    fn from(s: RosterSnapshot) -> Self { Snapshot::Roster(s) }
}
