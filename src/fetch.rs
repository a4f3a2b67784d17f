//! The document fetch collaborator.
//!
//! The extraction core never performs I/O itself. Anything that can turn a
//! URL into a [`RawDocument`] plugs in through [`DocumentFetcher`]: the
//! bundled HTTP client, a cache, or a closure over fixtures in tests.

use dom_query::Document;

use crate::encoding;
use crate::error::Result;

/// A fetched document body plus what the transport knows about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    /// Final URL after redirects.
    pub url: String,
    /// Undecoded body bytes.
    pub body: Vec<u8>,
    /// `Content-Type` header value, if the transport reported one.
    pub content_type: Option<String>,
}

impl RawDocument {
    /// HTML document with a UTF-8 body.
    #[must_use]
    pub fn html(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into().into_bytes(),
            content_type: Some("text/html; charset=utf-8".to_string()),
        }
    }

    /// Body decoded to UTF-8 using the reported or declared charset.
    #[must_use]
    pub fn text(&self) -> String {
        encoding::decode_body(&self.body, self.content_type.as_deref())
    }

    /// Decode and parse the body as HTML.
    #[must_use]
    pub fn parse(&self) -> Document {
        Document::from(self.text().as_str())
    }
}

/// Synchronous `fetch(url) -> RawDocument | Error` contract.
///
/// Implementations own retries, backoff and timeouts. An `Err` means the
/// implementation has given up on the URL.
pub trait DocumentFetcher {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` (or another input error) when no document
    /// could be obtained.
    fn fetch(&self, url: &str) -> Result<RawDocument>;
}

impl<F> DocumentFetcher for F
where
    F: Fn(&str) -> Result<RawDocument>,
{
    fn fetch(&self, url: &str) -> Result<RawDocument> {
        self(url)
    }
}
