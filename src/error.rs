//! Error types for restaurant-extract.
//!
//! Only input-level failures surface here. Strategy failures, malformed
//! JSON-LD blocks and enrichment failures are recovered where they happen
//! and never reach the caller.

/// Error type for extraction and harvest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured or discovered URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A caller-supplied [`Strategy`](crate::Strategy) gave up on a document.
    ///
    /// The built-in strategies return empty lists rather than fail; this
    /// variant is for strategies callers add to a cascade of their own.
    /// [`cascade::run`](crate::cascade::run) logs it and moves on.
    #[error("Strategy '{strategy}' failed: {reason}")]
    Strategy {
        strategy: &'static str,
        reason: String,
    },

    /// The document fetch collaborator gave up on a URL.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// No listing document could be obtained during a harvest.
    #[error("No listing document could be read")]
    NoDocument,

    /// The embedded state block is absent from the document.
    #[error("Embedded data block '{0}' not found")]
    MissingEmbeddedData(String),

    /// The embedded state block is not valid JSON.
    #[error("Malformed embedded data: {0}")]
    MalformedEmbeddedData(#[from] serde_json::Error),

    /// The HTTP client could not be built.
    #[cfg(feature = "http")]
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
