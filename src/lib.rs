//! # restaurant-extract
//!
//! Extract restaurant listings (name, profile URL, phone, cuisine) from
//! reservation-site HTML.
//!
//! Listing pages are run through an ordered cascade of extraction
//! strategies; the first one that finds anything wins. Results can be
//! enriched from detail pages, merged by name and written out as CSV.
//!
//! ## Quick Start
//!
//! ```rust
//! use restaurant_extract::extract_restaurants;
//!
//! let html = r#"<html><body>
//!   <div class="restaurant-card">
//!     <h3><a href="/r/canoe-toronto">Canoe</a></h3>
//!     <span class="cuisine">Canadian</span>
//!     <p>416.364.0054</p>
//!   </div>
//! </body></html>"#;
//!
//! let restaurants = extract_restaurants(html)?;
//! assert_eq!(restaurants[0].name, "Canoe");
//! assert_eq!(restaurants[0].url, "https://www.opentable.ca/r/canoe-toronto");
//! assert_eq!(restaurants[0].phone, "(416) 364-0054");
//! # Ok::<(), restaurant_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Strategy cascade**: card markup, JSON-LD, profile links, generic links
//! - **Embedded state**: exact listing data from a saved page's window state
//! - **Enrichment**: phone and cuisine backfilled from detail pages
//! - **Harvest**: paginated crawl over seed listings through any
//!   [`DocumentFetcher`]; the `http` feature ships a blocking client

mod error;
mod extract;
mod options;
mod patterns;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Whitespace cleanup, phone normalization and cuisine inference.
pub mod text;

/// The restaurant record.
pub mod record;

/// Name-keyed deduplication and backfill.
pub mod merge;

/// Extraction strategies and their default order.
pub mod strategy;

/// First-non-empty-wins strategy runner.
pub mod cascade;

/// Listing data embedded in the window-state script.
pub mod embedded;

/// The document fetch collaborator.
pub mod fetch;

/// Detail-page enrichment.
pub mod enrich;

/// Paginated harvest over seed listings.
pub mod harvest;

/// CSV output.
pub mod export;

/// Coverage report.
pub mod summary;

/// URL resolution and pagination.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Blocking HTTP fetcher.
#[cfg(feature = "http")]
pub mod net;

// Public API - re-exports
pub use embedded::{parse_embedded_document, parse_embedded_listing};
pub use error::{Error, Result};
pub use fetch::{DocumentFetcher, RawDocument};
pub use harvest::{harvest, HarvestStats};
pub use merge::{merge, RecordSet};
pub use options::{Options, DEFAULT_BASE_URL};
pub use record::RestaurantRecord;
pub use strategy::{Strategy, DEFAULT_STRATEGIES};
pub use summary::Summary;

#[cfg(feature = "http")]
pub use net::{FetchConfig, HttpFetcher};

/// Extracts restaurants from a listing page using default options.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::extract_restaurants;
///
/// let html = r#"<script type="application/ld+json">
///   {"@type":"Restaurant","name":"Noodle Bar","telephone":"4165551234","servesCuisine":"Japanese"}
/// </script>"#;
/// let restaurants = extract_restaurants(html)?;
/// assert_eq!(restaurants[0].phone, "(416) 555-1234");
/// # Ok::<(), restaurant_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_restaurants(html: &str) -> Result<Vec<RestaurantRecord>> {
    extract_restaurants_with_options(html, &Options::default())
}

/// Extracts restaurants from a listing page with custom options.
///
/// Returns an empty list when no strategy finds anything. Fails only when
/// `options.base_url` is not a valid absolute URL.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::{extract_restaurants_with_options, Options};
///
/// let html = r#"<li><a href="/r/pai">Pai Northern Thai</a> Thai</li>"#;
/// let options = Options {
///     base_url: "https://www.opentable.com".into(),
///     ..Options::default()
/// };
/// let restaurants = extract_restaurants_with_options(html, &options)?;
/// assert_eq!(restaurants[0].url, "https://www.opentable.com/r/pai");
/// # Ok::<(), restaurant_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_restaurants_with_options(html: &str, options: &Options) -> Result<Vec<RestaurantRecord>> {
    extract::extract_html(html, options)
}

/// Extracts restaurants from a parsed listing document.
#[allow(clippy::missing_errors_doc)]
pub fn extract_restaurants_from_document(
    doc: &dom::Document,
    options: &Options,
) -> Result<Vec<RestaurantRecord>> {
    extract::extract_document(doc, options)
}

/// Extracts restaurants from raw bytes, decoding them first.
///
/// The charset comes from `content_type` when given, else from the
/// document's `<meta>` declarations, else UTF-8.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::{extract_restaurants_bytes, Options};
///
/// let html = b"<div class=\"restaurant-card\"><h3>Caf\xE9 Boulud</h3></div>";
/// let restaurants = extract_restaurants_bytes(html, Some("text/html; charset=windows-1252"), &Options::default())?;
/// assert_eq!(restaurants[0].name, "Café Boulud");
/// # Ok::<(), restaurant_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_restaurants_bytes(
    html: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> Result<Vec<RestaurantRecord>> {
    let html = encoding::decode_body(html, content_type);
    extract_restaurants_with_options(&html, options)
}
