// src/snapshot/mod.rs
mod assemble;
mod types;

pub use assemble::{Clock, FixedClock, SnapshotAssembler, SystemClock};
pub use types::*;
