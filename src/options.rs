//! Configuration options for extraction and harvesting.
//!
//! The `Options` struct controls which site the extractor resolves links
//! against, how many candidates a strategy may return, and how the harvest
//! pipeline paginates and enriches.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{DETAIL_CUISINES, LISTING_CUISINES};

/// Site the extractor targets by default.
pub const DEFAULT_BASE_URL: &str = "https://www.opentable.ca";

/// Configuration options for restaurant extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::Options;
///
/// let options = Options {
///     max_restaurants: 10,
///     enrich_details: false,
///     ..Options::default()
/// };
/// assert_eq!(options.max_link_candidates, 50);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Base URL relative links and seed paths are resolved against.
    ///
    /// Default: `https://www.opentable.ca`
    pub base_url: String,

    /// Listing paths the harvest walks, in order.
    ///
    /// Entries may be absolute URLs; relative ones are joined onto `base_url`.
    pub seed_paths: Vec<String>,

    /// Stop harvesting once this many distinct restaurants were collected.
    ///
    /// Default: `50`
    pub max_restaurants: usize,

    /// Consecutive empty or failed pages after which a seed is abandoned.
    ///
    /// Default: `3`
    pub max_empty_pages: usize,

    /// Upper bound on records produced by the link-based strategies.
    ///
    /// Default: `50`
    pub max_link_candidates: usize,

    /// Minimum character count for a name taken from anchor text.
    ///
    /// Default: `3`
    pub min_name_chars: usize,

    /// Strip symbols outside `[\w\s\-()&.,]` when cleaning extracted text.
    ///
    /// Default: `true`
    pub strict_cleaning: bool,

    /// Rewrite phones into `(AAA) BBB-CCCC` after extraction.
    ///
    /// Default: `true`
    pub normalize_phones: bool,

    /// Fetch detail pages to fill missing phone or cuisine fields.
    ///
    /// Default: `true`
    pub enrich_details: bool,

    /// Cuisine names searched near restaurant links on listing pages.
    pub listing_cuisines: Vec<String>,

    /// Cuisine keywords searched on detail pages, in priority order.
    pub detail_cuisines: Vec<String>,

    /// `id` of the script element holding the embedded page state.
    ///
    /// Default: `primary-window-vars`
    pub embedded_state_id: String,
}

impl Options {
    /// Parse `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` when the base URL is not an absolute URL.
    pub fn base(&self) -> Result<Url> {
        Url::parse(self.base_url.trim()).map_err(|source| Error::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    /// Absolute listing URLs built from `seed_paths`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if the base URL or a seed cannot be parsed.
    pub fn seed_urls(&self) -> Result<Vec<String>> {
        let base = self.base()?;
        self.seed_paths
            .iter()
            .map(|path| {
                base.join(path.trim())
                    .map(String::from)
                    .map_err(|source| Error::InvalidUrl {
                        url: path.clone(),
                        source,
                    })
            })
            .collect()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            seed_paths: vec![
                "/toronto-ontario-restaurants".to_string(),
                "/toronto-restaurants".to_string(),
                "/c/toronto".to_string(),
                "/search?location=toronto".to_string(),
            ],
            max_restaurants: 50,
            max_empty_pages: 3,
            max_link_candidates: 50,
            min_name_chars: 3,
            strict_cleaning: true,
            normalize_phones: true,
            enrich_details: true,
            listing_cuisines: LISTING_CUISINES.iter().map(ToString::to_string).collect(),
            detail_cuisines: DETAIL_CUISINES.iter().map(ToString::to_string).collect(),
            embedded_state_id: "primary-window-vars".to_string(),
        }
    }
}
