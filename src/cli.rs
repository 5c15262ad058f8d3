// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{LOG_FILE, STORE_DIR};
use crate::config::options::{ExportFormat, ExportOptions, ScrapeKind, ScrapeOptions};
use crate::core::{Fetch, FileFetcher, HttpFetcher};
use crate::snapshot::{SnapshotAssembler, SystemClock};
use crate::{csv, diff, scrape, store};

/// Scrape a league ladder or roster page into a snapshot.
#[derive(Debug, Parser)]
#[command(name = "vb_scrape", version, about)]
pub struct Args {
    /// Page convention to extract
    #[arg(value_enum)]
    pub kind: ScrapeKind,

    /// Page URL (defaults to the Monday page for `kind`)
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a saved page instead of fetching
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fail when heading and table counts differ instead of truncating
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Emit a header line (csv/tsv)
    #[arg(long = "headers")]
    pub include_headers: bool,

    /// Archive the snapshot and report whether the page changed
    #[arg(long)]
    pub save: bool,

    #[arg(long, default_value = STORE_DIR)]
    pub store: PathBuf,

    /// Append logs to <store>/debug.log instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Args {
    pub fn scrape_options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions::new(self.kind);
        if let Some(url) = &self.url {
            opts = opts.with_url(url.clone());
        }
        if let Some(path) = &self.file {
            opts = opts.with_url(path.to_string_lossy().into_owned());
        }
        if self.strict {
            opts = opts.strict();
        }
        opts
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { format: self.format, include_headers: self.include_headers }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_path = args.log_file.then(|| args.store.join(LOG_FILE));
    crate::log::init(log_path.as_deref()).wrap_err("could not set up logging")?;

    let opts = args.scrape_options();
    let fetcher: Box<dyn Fetch> = match args.file {
        Some(_) => Box::new(FileFetcher),
        None => Box::new(HttpFetcher::new()?),
    };
    let assembler = SnapshotAssembler::new(SystemClock);

    let snap = scrape::fetch_snapshot(fetcher.as_ref(), &opts, &assembler)
        .wrap_err_with(|| format!("scraping {} failed", opts.url))?;

    let export = args.export_options();
    match export.format.delim() {
        Some(sep) => print!("{}", csv::to_delimited(&snap, sep, export.include_headers)?),
        None => println!("{}", serde_json::to_string_pretty(&snap)?),
    }

    if args.save {
        let prev = store::load_latest(&args.store, snap.kind())?;
        let change = diff::compare(prev.as_ref(), &snap);
        let path = store::save_snapshot(&args.store, &snap)?;
        eprintln!("Saved {}", path.display());
        match change {
            diff::Change::First => eprintln!("First {} snapshot", snap.kind().as_str()),
            diff::Change::Unchanged => eprintln!("Unchanged since last run"),
            diff::Change::Changed { groups } if groups.is_empty() => {
                eprintln!("Changed (page text only)")
            }
            diff::Change::Changed { groups } => eprintln!("Changed: {}", groups.join(", ")),
        }
    }

    Ok(())
}
