// src/config/consts.rs

// Net config
pub const DEFAULT_LADDER_URL: &str = "http://ossieindoorbeachvolleyball.com.au/monday-mens";
pub const DEFAULT_ROSTER_URL: &str = "http://ossieindoorbeachvolleyball.com.au/monday";
pub const USER_AGENT: &str = concat!("vb_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Page conventions (CSS)
pub const COMPETITION_MARKER: &str = "span.box-3";
pub const HEADLINE_MARKER: &str = ".headline";
pub const ARTICLE_MARKER: &str = ".article";
pub const JUNK_CELL: &str = r#"td[rowspan="9"]"#; // "VS" separator column
pub const BOLD: &str = "strong, b";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LATEST_FILE: &str = "latest.json";
pub const LOG_FILE: &str = "debug.log";
