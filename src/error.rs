// src/error.rs
//! Error taxonomy for a scrape run.
//!
//! Everything here is fatal to the current snapshot. Row-level oddities
//! (short rows, blank team names) are filtered by the specs and never
//! surface as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Fetch failed: connection, timeout, or a non-2xx status.
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// A markup convention the extraction rules depend on is missing.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// Competition name, headline or game day could not be found.
    #[error("metadata not found: {0}")]
    MetadataNotFound(&'static str),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn transport(url: &str, reason: impl ToString) -> Self {
        Self::Transport { url: s!(url), reason: reason.to_string() }
    }

    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::StructuralMismatch(msg.into())
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
