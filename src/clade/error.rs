//! Error types for the clade module

use thiserror::Error;

/// Error type for a single clade lookup.
///
/// Failures here are contained per name by the aggregation driver: a failed
/// lookup leaves that entry without a classification instead of aborting
/// the batch.
#[derive(Debug, Error)]
pub enum CladeError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The wiki API returned a non-success status
    #[error("wiki API returned HTTP {status}")]
    Api {
        /// HTTP status code
        status: u16,
    },

    /// The response JSON did not carry the expected page/revision shape
    #[error("unexpected wiki response: {0}")]
    UnexpectedResponse(String),

    /// URL construction error
    #[error("invalid wiki URL: {0}")]
    UrlParse(#[from] url::ParseError),
}
