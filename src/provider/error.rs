//! Error types exposed by the user-data provider layer.

use thiserror::Error;

/// Errors surfaced while configuring or calling the user-data provider.
///
/// The TUI treats every variant uniformly: the failure is logged and the
/// current page degrades to an empty table. Callers that need finer-grained
/// handling (the CLI, tests) can still match on the variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidApiBase(String),

    /// The page or page-size parameters were out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Networking failed while calling the provider.
    #[error("network error talking to the user provider: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("user provider returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code from the response.
        status: u16,
        /// Response body message, if one could be extracted.
        message: String,
    },

    /// The response body could not be decoded as the expected JSON envelope.
    #[error("failed to decode provider response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl FetchError {
    /// Wraps a reqwest error in the matching [`FetchError`] variant.
    ///
    /// Body-decoding failures map to [`FetchError::Decode`]; everything else
    /// is treated as a transport failure.
    pub(crate) fn from_reqwest(operation: &str, error: &reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode {
                message: format!("{operation}: {error}"),
            }
        } else {
            Self::Network {
                message: format!("{operation}: {error}"),
            }
        }
    }
}
