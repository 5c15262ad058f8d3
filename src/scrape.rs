// src/scrape.rs
//! One scrape run: document → normalize → extract → fingerprint → assemble.
//!
//! Nothing here keeps state between runs. Any failure aborts the run and no
//! partial snapshot is returned.

use crate::{
    config::options::{PairingPolicy, ScrapeKind, ScrapeOptions},
    core::{normalize, Document, Fetch, Fingerprint},
    error::Result,
    snapshot::{Clock, LadderSnapshot, RosterSnapshot, Snapshot, SnapshotAssembler},
    specs::{ladder, metadata, roster},
};

pub fn ladder_from_document<C: Clock>(
    doc: &Document,
    pairing: PairingPolicy,
    assembler: &SnapshotAssembler<C>,
) -> Result<LadderSnapshot> {
    let norm = normalize(doc)?;
    let html = norm.parse();

    let competition_name = metadata::extract_competition_name(&html)?;
    let headline = metadata::extract_headline(&html)?;
    let game_day = metadata::extract_game_day(&html)?;
    let divisions = ladder::extract_ladder(&html, pairing)?;

    let fingerprint = Fingerprint::compute(norm.text());

    Ok(assembler.ladder(
        norm.url(),
        competition_name,
        headline,
        game_day,
        divisions,
        fingerprint,
    ))
}

pub fn roster_from_document<C: Clock>(
    doc: &Document,
    pairing: PairingPolicy,
    assembler: &SnapshotAssembler<C>,
) -> Result<RosterSnapshot> {
    let norm = normalize(doc)?;
    let html = norm.parse();

    let headline = metadata::extract_headline(&html)?;
    let game_day = metadata::extract_game_day(&html)?;
    let slots = roster::extract_roster(&html, pairing)?;

    let fingerprint = Fingerprint::compute(norm.text());

    Ok(assembler.roster(norm.url(), headline, game_day, slots, fingerprint))
}

pub fn snapshot_from_document<C: Clock>(
    kind: ScrapeKind,
    doc: &Document,
    pairing: PairingPolicy,
    assembler: &SnapshotAssembler<C>,
) -> Result<Snapshot> {
    Ok(match kind {
        ScrapeKind::Ladder => ladder_from_document(doc, pairing, assembler)?.into(),
        ScrapeKind::Roster => roster_from_document(doc, pairing, assembler)?.into(),
    })
}

/// Fetch `opts.url` and run the matching pipeline.
pub fn fetch_snapshot<C: Clock>(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    assembler: &SnapshotAssembler<C>,
) -> Result<Snapshot> {
    let doc = fetcher.fetch(&opts.url)?;
    let snap = snapshot_from_document(opts.kind, &doc, opts.pairing, assembler)?;
    tracing::info!(id = snap.id(), fingerprint = %snap.fingerprint(), "snapshot assembled");
    Ok(snap)
}
