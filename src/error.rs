//! Error types for the dinodex crate

use thiserror::Error;

/// Result type for dinodex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline-level failures.
///
/// Page-level and per-name failures are contained inside the pipeline
/// (logged and dropped at their own granularity), so only setup failures
/// for the two HTTP clients surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Clade lookup error
    #[error("Clade lookup error: {0}")]
    Clade(#[from] crate::clade::CladeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clade::CladeError;

    #[test]
    fn test_clade_error_converts_and_displays() {
        let err: Error = CladeError::Api { status: 503 }.into();
        assert!(matches!(err, Error::Clade(CladeError::Api { status: 503 })));
        assert_eq!(
            err.to_string(),
            "Clade lookup error: wiki API returned HTTP 503"
        );
    }
}
