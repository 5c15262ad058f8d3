// src/store.rs
//! Local snapshot archive: `<dir>/<kind>/<id>.json` plus a `latest.json`
//! copy per kind for the next run to diff against.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::LATEST_FILE;
use crate::config::options::ScrapeKind;
use crate::core::sanitize::file_stem;
use crate::error::Result;
use crate::snapshot::Snapshot;

fn kind_dir(dir: &Path, kind: ScrapeKind) -> PathBuf {
    dir.join(kind.as_str())
}

/// Write the snapshot and point `latest.json` at it. Returns the archive path.
pub fn save_snapshot(dir: &Path, snap: &Snapshot) -> Result<PathBuf> {
    let kdir = kind_dir(dir, snap.kind());
    fs::create_dir_all(&kdir)?;

    let json = serde_json::to_string_pretty(snap)?;
    let path = kdir.join(format!("{}.json", file_stem(snap.id())));
    fs::write(&path, &json)?;
    fs::write(kdir.join(LATEST_FILE), &json)?;

    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(path)
}

/// The most recently saved snapshot of `kind`, if any.
pub fn load_latest(dir: &Path, kind: ScrapeKind) -> Result<Option<Snapshot>> {
    let path = kind_dir(dir, kind).join(LATEST_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&text)?))
}
