// src/config/options.rs
use serde::{Deserialize, Serialize};

use super::consts::*;

/// Which page convention a run targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ScrapeKind {
    Ladder,
    Roster,
}

impl ScrapeKind {
    /// Id prefix and store subdirectory.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeKind::Ladder => "ladder",
            ScrapeKind::Roster => "roster",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ScrapeKind::Ladder => DEFAULT_LADDER_URL,
            ScrapeKind::Roster => DEFAULT_ROSTER_URL,
        }
    }
}

/// What to do when heading count and table count disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingPolicy {
    /// Zip to the shorter side and log a warning.
    #[default]
    Truncate,
    /// Treat any count mismatch as a structural mismatch.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub kind: ScrapeKind,
    pub url: String,
    pub pairing: PairingPolicy,
}

impl ScrapeOptions {
    pub fn new(kind: ScrapeKind) -> Self {
        Self {
            kind,
            url: s!(kind.default_url()),
            pairing: PairingPolicy::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn strict(mut self) -> Self {
        self.pairing = PairingPolicy::Strict;
        self
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self::new(ScrapeKind::Ladder)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl ExportFormat {
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Json => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}
