// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use vb_scrape::config::options::PairingPolicy;
use vb_scrape::core::{normalize, Document, Fingerprint};
use vb_scrape::scrape::{ladder_from_document, roster_from_document};
use vb_scrape::snapshot::{SnapshotAssembler, SystemClock};
use vb_scrape::specs::{ladder, roster};

const LADDER: &str = include_str!("../tests/fixtures/ladder.html");
const ROSTER: &str = include_str!("../tests/fixtures/roster.html");

fn bench_extract(c: &mut Criterion) {
    let ladder_doc = Document::new("ladder", LADDER);
    let roster_doc = Document::new("roster", ROSTER);
    let asm = SnapshotAssembler::new(SystemClock);

    c.bench_function("normalize_ladder", |b| {
        b.iter(|| normalize(black_box(&ladder_doc)).map(|n| n.text().len()))
    });

    let norm = normalize(&ladder_doc).expect("fixture has a guest banner");
    c.bench_function("fingerprint_ladder", |b| {
        b.iter(|| Fingerprint::compute(black_box(norm.text())))
    });

    let html = Html::parse_document(LADDER);
    c.bench_function("ladder_specs_only", |b| {
        b.iter(|| ladder::extract_ladder(black_box(&html), PairingPolicy::Truncate).map(|d| d.len()))
    });

    let html = Html::parse_document(ROSTER);
    c.bench_function("roster_specs_only", |b| {
        b.iter(|| roster::extract_roster(black_box(&html), PairingPolicy::Truncate).map(|s| s.len()))
    });

    c.bench_function("ladder_pipeline", |b| {
        b.iter(|| ladder_from_document(black_box(&ladder_doc), PairingPolicy::Truncate, &asm).is_ok())
    });

    c.bench_function("roster_pipeline", |b| {
        b.iter(|| roster_from_document(black_box(&roster_doc), PairingPolicy::Truncate, &asm).is_ok())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
