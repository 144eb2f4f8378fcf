//! Error types for the musiXmatch API client.

use thiserror::Error;

/// Boxed error returned by a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when interacting with the musiXmatch API.
#[derive(Debug, Error)]
pub enum MusixmatchError {
    /// The GET request could not be completed (connection refused, timeout,
    /// TLS failure, non-2xx HTTP status, ...).
    ///
    /// `url` is the attempted URL with the `apikey` value masked.
    #[error("could not open API URL {url}: {source}")]
    Transport {
        /// Attempted URL, apikey masked.
        url: String,
        /// Underlying transport failure.
        #[source]
        source: BoxError,
    },

    /// The requested `format` has no response parser.
    #[error("unsupported response format `{0}`")]
    UnsupportedFormat(String),

    /// The response body could not be parsed as the expected format.
    #[error("invalid {format} response message: {reason}")]
    MessageParse {
        /// `json` or `xml`.
        format: &'static str,
        /// Parser failure or missing envelope.
        reason: String,
    },

    /// The API answered with a non-200 `header.status_code`.
    ///
    /// `message` is the human-readable text from the status table, e.g.
    /// `401` → "Authentication failed, probably because of a bad API key."
    #[error("API error (code {code}): {message}")]
    Api {
        /// musiXmatch status code (not the HTTP status).
        code: i64,
        /// Status table message.
        message: String,
    },

    /// A required path is absent from a parsed message (e.g.
    /// `header.status_code` or `body.track`).
    #[error("missing `{0}` in response message")]
    Lookup(String),

    /// An item mapping has no integer id field.
    #[error("item has no usable `{field}`")]
    MissingId {
        /// Expected id field, e.g. `track_id`.
        field: String,
    },

    /// File I/O error (config read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or write the JSON config file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

/// Convenience alias for `Result<T, MusixmatchError>`.
pub type Result<T> = std::result::Result<T, MusixmatchError>;
