// src/core/normalize.rs
//! Strip the live "We have N guests online" banner so two fetches of an
//! unchanged page serialize (and hash) identically.

use scraper::Html;

use super::html::text_of;
use super::net::Document;
use crate::error::{Result, ScrapeError};
use crate::specs::matchers::is_guest_counter;

/// A page with its volatile banner removed. Lives for one run only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedDocument {
    url: String,
    text: String,
}

impl NormalizedDocument {
    pub fn url(&self) -> &str { &self.url }
    pub fn text(&self) -> &str { &self.text }

    pub fn parse(&self) -> Html {
        Html::parse_document(&self.text)
    }
}

/// Remove exactly one guest-counter element and re-serialize the rest.
///
/// The element's whole text must be the banner, so a container that also
/// holds tables or headings is never a candidate. Of the candidates (a
/// wrapper holding only the banner is one too) the innermost goes.
///
/// A page without such an element is a `StructuralMismatch`: normalization
/// is meant to run once, on raw input, and a missing or merged banner means
/// the layout moved under us.
pub fn normalize(doc: &Document) -> Result<NormalizedDocument> {
    let mut html = Html::parse_document(doc.text());

    let banner = html
        .select(selector!("body *"))
        .filter(|el| is_guest_counter(&text_of(*el)))
        .find(|el| {
            !el.select(selector!("*"))
                .any(|inner| inner.id() != el.id() && is_guest_counter(&text_of(inner)))
        })
        .map(|el| el.id())
        .ok_or_else(|| ScrapeError::mismatch("guest-counter banner not found"))?;

    if let Some(mut node) = html.tree.get_mut(banner) {
        node.detach();
    }

    Ok(NormalizedDocument { url: s!(doc.url()), text: html.html() })
}
