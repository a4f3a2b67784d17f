//! Profile-link strategy.
//!
//! Listing pages that render without card markup still link every
//! restaurant's profile (`/r/<slug>`). The anchor text is the name and the
//! surrounding element usually mentions the cuisine.

use dom_query::Document;

use super::clean_field;
use crate::dom;
use crate::error::Result;
use crate::patterns::RESTAURANT_PATH;
use crate::record::RestaurantRecord;
use crate::text::CuisineMatcher;
use crate::url_utils::create_absolute_url;
use crate::Options;

/// Extract records from profile links, capped at
/// `options.max_link_candidates` links per document.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `options.base_url` cannot be parsed.
pub fn extract(doc: &Document, options: &Options) -> Result<Vec<RestaurantRecord>> {
    let base = options.base()?;
    let cuisines = CuisineMatcher::new(&options.listing_cuisines);

    let links = dom::elements(&doc.select("a[href]"))
        .into_iter()
        .filter(|a| dom::get_attribute(a, "href").is_some_and(|href| RESTAURANT_PATH.is_match(&href)))
        .take(options.max_link_candidates);

    let mut records = Vec::new();
    for link in links {
        let name = clean_field(&dom::text_content(&link), options);
        if name.chars().count() < options.min_name_chars {
            continue;
        }

        let href = dom::get_attribute(&link, "href").unwrap_or_default();
        let parent = dom::parent(&link);
        let cuisine = if parent.exists() {
            cuisines.leftmost(&dom::text_content(&parent))
        } else {
            String::new()
        };

        records.push(RestaurantRecord {
            name,
            url: create_absolute_url(&href, &base),
            phone: String::new(),
            cuisine,
        });
    }

    Ok(records)
}
