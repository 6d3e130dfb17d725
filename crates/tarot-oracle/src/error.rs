//! Error types for interpretation requests.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised while building or sending an interpretation request.
///
/// Every variant except [`OracleError::IncompleteReading`] means the
/// interpretation is unavailable and the request may be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The reading handed to the builder does not fill its spread.
    #[error("incomplete reading: spread needs {expected} cards, got {actual}")]
    IncompleteReading {
        /// Cards the spread calls for.
        expected: usize,
        /// Cards actually supplied.
        actual: usize,
    },

    /// No API key was configured.
    #[error("interpretation unavailable: no API key configured")]
    MissingApiKey,

    /// The service could not be reached.
    #[error("interpretation unavailable: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("interpretation unavailable: HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or summary.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("interpretation unavailable: malformed response: {0}")]
    Parse(String),

    /// The service answered without any text.
    #[error("interpretation unavailable: the spirits are silent")]
    EmptyResponse,
}

impl OracleError {
    /// Whether sending the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::IncompleteReading { .. })
    }
}
