//! Listing extraction: the default cascade plus phone normalization.

use dom_query::Document;
use tracing::debug;

use crate::cascade;
use crate::error::Result;
use crate::options::Options;
use crate::record::RestaurantRecord;
use crate::strategy::DEFAULT_STRATEGIES;
use crate::text::normalize_phone;

/// Run the default strategies over a parsed listing document.
///
/// The base URL is validated up front so a misconfiguration surfaces as an
/// error instead of four silently failing strategies.
pub(crate) fn extract_document(doc: &Document, options: &Options) -> Result<Vec<RestaurantRecord>> {
    options.base()?;

    let mut records = cascade::run(doc, &DEFAULT_STRATEGIES, options);
    if options.normalize_phones {
        for record in &mut records {
            record.phone = normalize_phone(&record.phone);
        }
    }

    debug!(count = records.len(), "listing extracted");
    Ok(records)
}

/// Parse `html` and extract its listing.
pub(crate) fn extract_html(html: &str, options: &Options) -> Result<Vec<RestaurantRecord>> {
    extract_document(&Document::from(html), options)
}
