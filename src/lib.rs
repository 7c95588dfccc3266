//! # product-scraper
//!
//! Scrapes product listings from the [webscraper.io](https://webscraper.io/test-sites)
//! e-commerce test pages via Chrome DevTools Protocol (CDP) and writes one CSV
//! report per category.
//!
//! ## How it works
//!
//! The scraper drives a single Chrome/Chromium instance through six fixed
//! category pages. Each page loads additional products through a "load more"
//! control; the extractor clicks that control until it disappears, then reads
//! every product card (title, description, price, rating, review count) in one
//! pass.
//!
//! ## Running the binary
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! This produces `home.csv`, `computers.csv`, `laptops.csv`, `tablets.csv`,
//! `phones.csv`, and `touch.csv` in the current working directory.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use product_scraper::{scrape_products, export, LaunchOptions};
//!
//! # fn main() -> product_scraper::Result<()> {
//! // Visit every catalog page with one browser session
//! let results = scrape_products(LaunchOptions::default())?;
//!
//! // Write one CSV file per category
//! export::write_reports(&results)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and configuration
//! - [`catalog`]: The six fixed category pages and their URLs
//! - [`extract`]: Pagination handling and product extraction
//! - [`scrape`]: Session driver tying catalog and extractor together
//! - [`export`]: Per-category CSV output
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod catalog;
pub mod error;
pub mod export;
pub mod extract;
pub mod product;
pub mod scrape;

pub use browser::{BrowserSession, LaunchOptions};
pub use catalog::{BASE_URL, Category};
pub use error::{Result, ScrapeError};
pub use product::Product;
pub use scrape::scrape_products;
