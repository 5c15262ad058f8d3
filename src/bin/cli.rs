// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    vb_scrape::cli::run()
}
