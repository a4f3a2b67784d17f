//! Card markup strategy.
//!
//! Finds "restaurant card" containers and reads name, link, cuisine and
//! phone out of each one.

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use super::clean_field;
use crate::dom;
use crate::error::Result;
use crate::patterns::{CARD_CUISINE_SELECTORS, CARD_NAME_SELECTORS, CARD_SELECTORS};
use crate::record::RestaurantRecord;
use crate::text::extract_phone;
use crate::url_utils::create_absolute_url;
use crate::Options;

/// Extract one record per card found by the first matching card selector.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `options.base_url` cannot be parsed.
pub fn extract(doc: &Document, options: &Options) -> Result<Vec<RestaurantRecord>> {
    let base = options.base()?;
    let root = doc.select("html");

    let Some((selector, cards)) = dom::select_first_matching(&root, CARD_SELECTORS) else {
        return Ok(Vec::new());
    };
    debug!(selector, count = cards.len(), "matched restaurant cards");

    Ok(cards
        .iter()
        .map(|card| parse_card(card, &base, options))
        .filter(|record| !record.name.is_empty())
        .collect())
}

/// Read a single card. The name may come back empty.
#[must_use]
pub fn parse_card(card: &Selection, base: &Url, options: &Options) -> RestaurantRecord {
    let mut record = RestaurantRecord::default();

    if let Some(name_el) = dom::first_of(card, CARD_NAME_SELECTORS) {
        record.name = clean_field(&dom::text_content(&name_el), options);

        if let Some(href) = card_link(card, &name_el).and_then(|a| dom::get_attribute(&a, "href")) {
            record.url = create_absolute_url(&href, base);
        }
    }

    if let Some(cuisine_el) = dom::first_of(card, CARD_CUISINE_SELECTORS) {
        record.cuisine = clean_field(&dom::text_content(&cuisine_el), options);
    }

    record.phone = extract_phone(&dom::text_content(card));
    record
}

/// The name element when it is a link, else a link inside it, else the
/// card's first link.
fn card_link<'a>(card: &Selection<'a>, name_el: &Selection<'a>) -> Option<Selection<'a>> {
    if dom::is_tag(name_el, "a") {
        return Some(name_el.clone());
    }
    dom::first(name_el, "a").or_else(|| dom::first(card, "a"))
}
