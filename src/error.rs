use thiserror::Error;

/// Errors that can occur during browser automation and scraping
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Failed to launch the browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Tab operation failed (creation, activation, teardown)
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation to a URL failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// A required element was not found on the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// JavaScript evaluation in the page failed
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),

    /// Extraction payload could not be parsed
    #[error("Failed to parse extraction payload: {0}")]
    PayloadParseFailed(String),

    /// A price string did not parse as a number after stripping the currency symbol
    #[error("Invalid price text {raw:?}: {source}")]
    InvalidPrice {
        raw: String,
        source: std::num::ParseFloatError,
    },

    /// A review-count string was present but its leading token was not an integer
    #[error("Invalid review count text {raw:?}: {source}")]
    InvalidReviewCount {
        raw: String,
        source: std::num::ParseIntError,
    },

    /// CSV serialization or write failure
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScrapeError::ElementNotFound("'.title' not found".to_string());
        assert_eq!(err.to_string(), "Element not found: '.title' not found");
    }

    #[test]
    fn test_invalid_price_display() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ScrapeError::InvalidPrice {
            raw: "$abc".to_string(),
            source,
        };
        assert!(err.to_string().contains("$abc"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScrapeError = io.into();
        assert!(matches!(err, ScrapeError::Io(_)));
    }
}
