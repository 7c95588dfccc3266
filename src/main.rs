//! Scrape the webscraper.io e-commerce test pages into per-category CSV files.

use anyhow::Context;
use env_logger::Env;
use product_scraper::{LaunchOptions, export, scrape_products};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let results = scrape_products(LaunchOptions::default()).context("Scrape run failed")?;
    export::write_reports(&results).context("Failed to write CSV reports")?;

    Ok(())
}
