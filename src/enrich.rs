//! Detail-page enrichment.
//!
//! Best effort only: a record that cannot be enriched is returned as it was.

use dom_query::Document;
use tracing::{debug, warn};

use crate::dom;
use crate::fetch::DocumentFetcher;
use crate::patterns::DETAIL_PHONE_SELECTORS;
use crate::record::RestaurantRecord;
use crate::text::{extract_phone, normalize_phone, CuisineMatcher};
use crate::Options;

/// Fill a record's missing phone and cuisine from its detail page.
///
/// Does nothing unless the record has a URL and lacks a phone or cuisine.
/// Fields already set are never overwritten.
#[must_use]
pub fn enrich<F>(record: RestaurantRecord, fetcher: &F, options: &Options) -> RestaurantRecord
where
    F: DocumentFetcher + ?Sized,
{
    if !record.needs_details() {
        return record;
    }

    let page = match fetcher.fetch(&record.url) {
        Ok(raw) => raw.parse(),
        Err(err) => {
            warn!(name = %record.name, url = %record.url, %err, "detail fetch failed");
            return record;
        }
    };

    let found = details_from_page(&page, options);
    debug!(name = %record.name, phone = %found.phone, cuisine = %found.cuisine, "detail page read");

    let mut record = record;
    record.fill_missing_from(&found);
    record
}

/// Phone and cuisine found on a detail page, as a nameless record.
#[must_use]
pub fn details_from_page(page: &Document, options: &Options) -> RestaurantRecord {
    let page_text = dom::document_text(page);

    let mut phone = phone_from_elements(page);
    if phone.is_empty() {
        phone = extract_phone(&page_text);
    }
    if options.normalize_phones {
        phone = normalize_phone(&phone);
    }

    RestaurantRecord {
        phone,
        cuisine: CuisineMatcher::new(&options.detail_cuisines).infer(&page_text),
        ..RestaurantRecord::default()
    }
}

fn phone_from_elements(page: &Document) -> String {
    let root = page.select("html");

    DETAIL_PHONE_SELECTORS
        .iter()
        .filter_map(|selector| dom::first(&root, selector))
        .map(|el| {
            let href = dom::get_attribute(&el, "href").unwrap_or_default();
            extract_phone(&format!("{href} {}", dom::text_content(&el)))
        })
        .find(|phone| !phone.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::{Error, Result};
    use crate::fetch::RawDocument;

    fn with_url(name: &str) -> RestaurantRecord {
        RestaurantRecord {
            url: format!("https://www.opentable.ca/r/{}", name.to_lowercase()),
            ..RestaurantRecord::named(name)
        }
    }

    #[test]
    fn test_tel_link_and_cuisine() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Ok(RawDocument::html(
                url,
                r#"<html><body>
                    <h1>Alo</h1><p>Contemporary French tasting menu.</p>
                    <a href="tel:+14165551234">Call</a>
                </body></html>"#,
            ))
        };

        let record = enrich(with_url("Alo"), &fetcher, &Options::default());
        assert_eq!(record.phone, "(416) 555-1234");
        assert_eq!(record.cuisine, "French");
    }

    #[test]
    fn test_full_page_fallback() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Ok(RawDocument::html(url, "<p>Reservations: 647.555.0199</p>"))
        };

        let record = enrich(with_url("Canoe"), &fetcher, &Options::default());
        assert_eq!(record.phone, "(647) 555-0199");
        assert_eq!(record.cuisine, "");
    }

    #[test]
    fn test_existing_fields_kept() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Ok(RawDocument::html(url, r#"<a href="tel:4165550000">x</a> Italian"#))
        };
        let record = RestaurantRecord {
            phone: "(905) 555-1111".into(),
            ..with_url("Terroni")
        };

        let record = enrich(record, &fetcher, &Options::default());
        assert_eq!(record.phone, "(905) 555-1111");
        assert_eq!(record.cuisine, "Italian");
    }

    #[test]
    fn test_skips_when_not_needed() {
        let calls = Cell::new(0);
        let fetcher = |url: &str| -> Result<RawDocument> {
            calls.set(calls.get() + 1);
            Ok(RawDocument::html(url, ""))
        };

        let no_url = RestaurantRecord::named("Nameless");
        let complete = RestaurantRecord {
            phone: "(416) 555-1234".into(),
            cuisine: "Thai".into(),
            ..with_url("Pai")
        };

        assert_eq!(enrich(no_url.clone(), &fetcher, &Options::default()), no_url);
        assert_eq!(enrich(complete.clone(), &fetcher, &Options::default()), complete);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_fetch_failure_returns_record_unchanged() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Err(Error::Fetch {
                url: url.to_string(),
                reason: "timed out".into(),
            })
        };

        let record = with_url("Byblos");
        assert_eq!(enrich(record.clone(), &fetcher, &Options::default()), record);
    }
}
