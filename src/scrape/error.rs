//! Error types for the scrape module

use thiserror::Error;

/// Error type for page-level scraping operations.
///
/// A page that fails to load or parse produces one of these; the
/// aggregation driver drops that page and carries on with the rest. A page
/// that loads but yields zero entries is not an error (it is logged as a
/// warning and returns an empty vec).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client error while fetching the page
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// One of the schema's CSS selectors failed to parse
    #[error("invalid selector '{selector}': {message}")]
    Selector {
        /// The selector string that failed
        selector: String,
        /// Parser error detail
        message: String,
    },
}
