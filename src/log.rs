// src/log.rs
//! Subscriber setup. Library code only emits `tracing` events; the binary
//! decides where they go (stderr, or appended to `.store/debug.log`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::uptime;

/// Install the global subscriber. `RUST_LOG` wins over the `info` default.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let res = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(uptime())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(uptime())
            .with_writer(io::stderr)
            .try_init(),
    };

    res.map_err(io::Error::other)
}
