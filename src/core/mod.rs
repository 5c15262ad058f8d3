// src/core/mod.rs

pub mod fingerprint;
pub mod html;
pub mod net;
pub mod normalize;
pub mod sanitize;

pub use fingerprint::Fingerprint;
pub use net::{Document, Fetch, FileFetcher, HttpFetcher};
pub use normalize::{normalize, NormalizedDocument};
