// src/specs/metadata.rs
//! Page metadata shared by the ladder and roster pages.
//!
//! - Competition name: the breadcrumb `<span class="box-3">Monday Mens</span>`.
//! - Headline: the `.headline` block (news, round number, game date).
//! - Game day: the weekday in `<title>`.
//!
//! All three are load-bearing; missing any of them aborts the run.

use scraper::Html;

use super::matchers::find_weekday;
use crate::config::consts::{COMPETITION_MARKER, HEADLINE_MARKER};
use crate::core::html::{first, text_of};
use crate::core::sanitize::line_breaks_to_spaces;
use crate::error::{Result, ScrapeError};
use crate::snapshot::GameDay;

/// Text of the first breadcrumb span naming a weekday, verbatim.
pub fn extract_competition_name(doc: &Html) -> Result<String> {
    doc.select(selector!(COMPETITION_MARKER))
        .map(text_of)
        .find(|t| find_weekday(t).is_some())
        .ok_or(ScrapeError::MetadataNotFound("competition name"))
}

pub fn extract_headline(doc: &Html) -> Result<String> {
    first(doc, selector!(HEADLINE_MARKER))
        .map(|el| line_breaks_to_spaces(&text_of(el)))
        .ok_or(ScrapeError::MetadataNotFound("headline"))
}

pub fn extract_game_day(doc: &Html) -> Result<GameDay> {
    first(doc, selector!("title"))
        .and_then(|t| find_weekday(&text_of(t)))
        .ok_or(ScrapeError::MetadataNotFound("game day"))
}
