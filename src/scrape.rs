//! Session driver: one browser, all catalog pages in order
//!
//! Owns the browser session for the whole run and guarantees teardown on
//! both the success and the error path.

use indexmap::IndexMap;

use crate::{
    browser::{BrowserSession, LaunchOptions},
    catalog::Category,
    error::Result,
    extract,
    product::Product,
};

/// Scrape every catalog page with a single browser session
///
/// Pages are visited strictly sequentially in [`Category::ALL`] order. The
/// session is closed before the result is returned, whether or not an error
/// occurred.
pub fn scrape_products(options: LaunchOptions) -> Result<IndexMap<Category, Vec<Product>>> {
    let session = BrowserSession::launch(options)?;

    let result = collect_all(&session);

    if let Err(e) = session.close() {
        log::warn!("Failed to close browser session: {}", e);
    }

    result
}

/// Visit each catalog page once and extract its products
fn collect_all(session: &BrowserSession) -> Result<IndexMap<Category, Vec<Product>>> {
    let mut results = IndexMap::new();

    for category in Category::ALL {
        let url = category.url();
        log::info!("Scraping {} ({})", category, url);

        session.navigate(&url)?;
        session.wait_for_navigation()?;

        let tab = session.tab();
        extract::dismiss_cookie_banner(tab);

        let products = extract::extract_all(tab)?;
        log::info!("{}: {} products", category, products.len());

        results.insert(category, products);
    }

    Ok(results)
}
