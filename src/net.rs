//! Blocking HTTP fetcher with retries and politeness delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use rand::Rng;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fetch::{DocumentFetcher, RawDocument};

/// Desktop Chrome user agent sent by default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// Transport settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Attempts per URL, including the first. Zero is treated as one.
    pub retries: u32,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Wait between attempts, drawn uniformly from this range.
    pub retry_backoff: (Duration, Duration),

    /// Wait before every request but the first, drawn uniformly from this
    /// range.
    pub politeness_delay: (Duration, Duration),

    pub user_agent: String,

    /// Extra request headers. Invalid names or values are skipped.
    pub headers: Vec<(String, String)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout: Duration::from_secs(60),
            retry_backoff: (Duration::from_secs(3), Duration::from_secs(8)),
            politeness_delay: (Duration::from_secs(1), Duration::from_secs(3)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: [
                ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
                ("accept-language", "en-US,en;q=0.9"),
                ("cache-control", "max-age=0"),
                ("sec-ch-ua-mobile", "?0"),
                ("sec-ch-ua-platform", "\"Windows\""),
                ("sec-fetch-dest", "document"),
                ("sec-fetch-mode", "navigate"),
                ("sec-fetch-site", "none"),
                ("sec-fetch-user", "?1"),
                ("upgrade-insecure-requests", "1"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        }
    }
}

/// Uniform random duration in `[lo, hi]`. A reversed range is swapped.
#[must_use]
pub fn jitter((lo, hi): (Duration, Duration)) -> Duration {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let lo_ms = u64::try_from(lo.as_millis()).unwrap_or(u64::MAX);
    let hi_ms = u64::try_from(hi.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(rand::thread_rng().gen_range(lo_ms..=hi_ms))
}

/// [`DocumentFetcher`] over a blocking `reqwest` client.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
    started: AtomicBool,
}

impl HttpFetcher {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Client` if the TLS backend or client cannot be set up.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(header_map(&config.headers))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            config,
            started: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn attempt(&self, url: &str) -> std::result::Result<RawDocument, reqwest::Error> {
        let response = self.client.get(url).send()?.error_for_status()?;
        read_response(response)
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawDocument> {
        if self.started.swap(true, Ordering::Relaxed) {
            thread::sleep(jitter(self.config.politeness_delay));
        }

        let attempts = self.config.retries.max(1);
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            debug!(url, attempt, "fetching");
            match self.attempt(url) {
                Ok(doc) => {
                    info!(url, bytes = doc.body.len(), "fetched");
                    return Ok(doc);
                }
                Err(err) => {
                    warn!(url, attempt, max_attempts = attempts, error = %err, "fetch attempt failed");
                    last_error = err.to_string();
                    if attempt < attempts {
                        thread::sleep(jitter(self.config.retry_backoff));
                    }
                }
            }
        }

        Err(Error::Fetch {
            url: url.to_string(),
            reason: last_error,
        })
    }
}

fn read_response(response: Response) -> std::result::Result<RawDocument, reqwest::Error> {
    let url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes()?.to_vec();

    Ok(RawDocument {
        url,
        body,
        content_type,
    })
}

fn header_map(headers: &[(String, String)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => warn!(header = %name, "skipping invalid header"),
        }
    }
    map
}
