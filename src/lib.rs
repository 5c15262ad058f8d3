// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod snapshot;
pub mod specs;

pub mod csv;
pub mod diff;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScrapeError};
