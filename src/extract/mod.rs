//! Product extraction from a loaded e-commerce test page
//!
//! The test pages load additional products through an "ecomerce-items-scroll-more"
//! button (the typo is the site's). Extraction first exhausts that control,
//! then reads every product card in one JavaScript pass and parses the raw
//! records on the Rust side.

use crate::error::{Result, ScrapeError};
use headless_chrome::{Element, Tab};
use serde::Deserialize;
use std::{sync::Arc, thread, time::Duration};

use crate::product::Product;

/// Selector for one product card
const PRODUCT_CARD: &str = ".thumbnail";

/// Selector for the "load more" pagination control
const MORE_BUTTON: &str = ".ecomerce-items-scroll-more";

/// Selector for the cookie consent button
const COOKIE_BUTTON: &str = ".acceptCookies";

/// Fixed pause after triggering pagination, to let the next batch render
const PAGE_LOAD_PAUSE: Duration = Duration::from_millis(500);

/// Raw per-card payload returned by the extraction script
///
/// Required fields are optional here; conversion to [`Product`] decides
/// which absences are fatal.
#[derive(Debug, Clone, Deserialize)]
struct RawProduct {
    title: Option<String>,
    price: Option<String>,
    description: Option<String>,
    rating: u32,
    review_text: Option<String>,
}

/// Check whether the element is displayed (not hidden via CSS)
fn is_displayed(element: &Element) -> Result<bool> {
    let js = r#"
        function() {
            const style = window.getComputedStyle(this);
            return style.display !== 'none' && style.visibility !== 'hidden';
        }
    "#;

    let result = element
        .call_js_fn(js, vec![], false)
        .map_err(|e| ScrapeError::EvaluationFailed(format!("Visibility check failed: {}", e)))?;

    Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Check whether the page still offers more products to load
///
/// Returns false when the control is absent or hidden; never errors on
/// absence.
pub fn has_more_pages(tab: &Arc<Tab>) -> bool {
    match tab.find_element(MORE_BUTTON) {
        Ok(button) => is_displayed(&button).unwrap_or(false),
        Err(_) => false,
    }
}

/// Trigger the "load more" control once
///
/// Scrolls the control into view, clicks it, and pauses briefly so the next
/// batch of products can render. Returns false if the control is absent.
pub fn advance_page(tab: &Arc<Tab>) -> Result<bool> {
    let button = match tab.find_element(MORE_BUTTON) {
        Ok(button) => button,
        Err(_) => return Ok(false),
    };

    button
        .scroll_into_view()
        .map_err(|e| ScrapeError::EvaluationFailed(format!("Failed to scroll control into view: {}", e)))?;
    button
        .click()
        .map_err(|e| ScrapeError::ElementNotFound(format!("Failed to click '{}': {}", MORE_BUTTON, e)))?;

    thread::sleep(PAGE_LOAD_PAUSE);

    Ok(true)
}

/// Dismiss the cookie consent prompt if it is shown
///
/// Best effort: absence and click failures are swallowed.
pub fn dismiss_cookie_banner(tab: &Arc<Tab>) {
    let button = match tab.find_element(COOKIE_BUTTON) {
        Ok(button) => button,
        Err(_) => return,
    };

    if is_displayed(&button).unwrap_or(false) {
        if let Err(e) = button.click() {
            log::debug!("Failed to dismiss cookie banner: {}", e);
        }
    }
}

/// Extract every product on the page, paginating first until exhausted
pub fn extract_all(tab: &Arc<Tab>) -> Result<Vec<Product>> {
    while has_more_pages(tab) {
        advance_page(tab)?;
    }

    let raw = read_raw_products(tab)?;
    raw.into_iter().map(build_product).collect()
}

/// Run the extraction script and deserialize its JSON payload
fn read_raw_products(tab: &Arc<Tab>) -> Result<Vec<RawProduct>> {
    let js_code = include_str!("extract_products.js");

    let result = tab
        .evaluate(js_code, false)
        .map_err(|e| ScrapeError::EvaluationFailed(format!("Extraction script failed: {}", e)))?;

    let json_value = result
        .value
        .ok_or_else(|| ScrapeError::PayloadParseFailed("No value returned from extraction script".to_string()))?;

    // The JavaScript returns a JSON string, so parse it as a string first
    let json_str: String = serde_json::from_value(json_value)
        .map_err(|e| ScrapeError::PayloadParseFailed(format!("Failed to get JSON string: {}", e)))?;

    serde_json::from_str(&json_str)
        .map_err(|e| ScrapeError::PayloadParseFailed(format!("Failed to parse product records: {}", e)))
}

/// Convert a raw record into a [`Product`], failing on missing required fields
fn build_product(raw: RawProduct) -> Result<Product> {
    let title = raw
        .title
        .ok_or_else(|| ScrapeError::ElementNotFound(format!("'{} .title' has no title attribute", PRODUCT_CARD)))?;
    let price_text = raw
        .price
        .ok_or_else(|| ScrapeError::ElementNotFound(format!("'{} .price' not found", PRODUCT_CARD)))?;
    let description = raw
        .description
        .ok_or_else(|| ScrapeError::ElementNotFound(format!("'{} .description' not found", PRODUCT_CARD)))?;

    Ok(Product {
        title,
        description: description.trim().to_string(),
        price: parse_price(&price_text)?,
        rating: raw.rating,
        num_of_reviews: parse_review_count(raw.review_text.as_deref())?,
    })
}

/// Parse a printed price, stripping the currency symbol
fn parse_price(raw: &str) -> Result<f64> {
    let stripped = raw.trim().replace('$', "");
    stripped.parse().map_err(|source| ScrapeError::InvalidPrice {
        raw: raw.to_string(),
        source,
    })
}

/// Parse a review count from text like "14 reviews"
///
/// An absent element means zero reviews; a present element must start with
/// an integer token.
fn parse_review_count(raw: Option<&str>) -> Result<u32> {
    let Some(text) = raw else {
        return Ok(0);
    };

    let token = text.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|source| ScrapeError::InvalidReviewCount {
        raw: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        title: Option<&str>,
        price: Option<&str>,
        description: Option<&str>,
        rating: u32,
        review_text: Option<&str>,
    ) -> RawProduct {
        RawProduct {
            title: title.map(String::from),
            price: price.map(String::from),
            description: description.map(String::from),
            rating,
            review_text: review_text.map(String::from),
        }
    }

    #[test]
    fn test_parse_price_strips_currency_symbol() {
        assert_eq!(parse_price("$99.99").unwrap(), 99.99);
        assert_eq!(parse_price("$1769.00").unwrap(), 1769.0);
        assert_eq!(parse_price("  $295.99  ").unwrap(), 295.99);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        let err = parse_price("$free").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPrice { .. }));
    }

    #[test]
    fn test_parse_review_count_absent_is_zero() {
        assert_eq!(parse_review_count(None).unwrap(), 0);
    }

    #[test]
    fn test_parse_review_count_leading_token() {
        assert_eq!(parse_review_count(Some("14 reviews")).unwrap(), 14);
        assert_eq!(parse_review_count(Some("1 review")).unwrap(), 1);
    }

    #[test]
    fn test_parse_review_count_rejects_non_numeric_token() {
        let err = parse_review_count(Some("no reviews")).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidReviewCount { .. }));
    }

    #[test]
    fn test_build_product_complete() {
        let product = build_product(raw(
            Some("Asus VivoBook X441NA-GA190"),
            Some("$295.99"),
            Some("Asus VivoBook X441NA-GA190 Chocolate Black"),
            3,
            Some("14 reviews"),
        ))
        .unwrap();

        assert_eq!(product.title, "Asus VivoBook X441NA-GA190");
        assert_eq!(product.price, 295.99);
        assert_eq!(product.rating, 3);
        assert_eq!(product.num_of_reviews, 14);
    }

    #[test]
    fn test_build_product_defaults_missing_reviews_to_zero() {
        let product = build_product(raw(
            Some("Nokia 123"),
            Some("$24.99"),
            Some("7 day battery"),
            4,
            None,
        ))
        .unwrap();

        assert_eq!(product.num_of_reviews, 0);
    }

    #[test]
    fn test_build_product_missing_title_is_fatal() {
        let err = build_product(raw(None, Some("$1.00"), Some("d"), 0, None)).unwrap_err();
        assert!(matches!(err, ScrapeError::ElementNotFound(_)));
    }

    #[test]
    fn test_build_product_missing_price_is_fatal() {
        let err = build_product(raw(Some("t"), None, Some("d"), 0, None)).unwrap_err();
        assert!(matches!(err, ScrapeError::ElementNotFound(_)));
    }

    #[test]
    fn test_build_product_missing_description_is_fatal() {
        let err = build_product(raw(Some("t"), Some("$1.00"), None, 0, None)).unwrap_err();
        assert!(matches!(err, ScrapeError::ElementNotFound(_)));
    }

    #[test]
    fn test_build_product_trims_description() {
        let product = build_product(raw(Some("t"), Some("$1.00"), Some("  padded  "), 0, None)).unwrap();
        assert_eq!(product.description, "padded");
    }

    #[test]
    fn test_raw_payload_deserializes() {
        let json = r#"[{
            "title": "Acer Aspire",
            "price": "$494.71",
            "description": "15.6 inch",
            "rating": 2,
            "review_text": "2 reviews"
        }]"#;

        let records: Vec<RawProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rating, 2);
    }
}
