//! Paginated harvest over the configured seed listings.

use tracing::{debug, info, warn};

use crate::enrich::enrich;
use crate::error::{Error, Result};
use crate::extract::extract_document;
use crate::fetch::DocumentFetcher;
use crate::merge::{Insert, RecordSet};
use crate::options::Options;
use crate::url_utils::page_url;

/// Counters for one harvest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// Listing pages fetched and parsed.
    pub pages_read: usize,
    /// Listing pages the fetcher gave up on.
    pub pages_failed: usize,
    /// Listing pages read where no strategy found anything.
    pub pages_empty: usize,
    /// Candidates produced by the cascade across all pages.
    pub candidates: usize,
    /// Candidates sent through detail enrichment.
    pub enriched: usize,
    /// New identities added to the set.
    pub added: usize,
    /// Duplicates that backfilled an existing record.
    pub merged: usize,
}

/// Walk every seed listing page by page, adding what is found to `records`.
///
/// Stops once `options.max_restaurants` new identities were added. A seed
/// is abandoned after `options.max_empty_pages` consecutive pages that were
/// empty or could not be fetched. Records gathered before an error stay in
/// `records`.
///
/// # Errors
///
/// - `Error::InvalidUrl` if the base URL or a seed path cannot be parsed
/// - `Error::NoDocument` if not a single listing page could be fetched
pub fn harvest<F>(fetcher: &F, options: &Options, records: &mut RecordSet) -> Result<HarvestStats>
where
    F: DocumentFetcher + ?Sized,
{
    let seeds = options.seed_urls()?;
    let mut stats = HarvestStats::default();

    for seed in &seeds {
        if stats.added >= options.max_restaurants {
            break;
        }
        info!(seed = %seed, "harvesting listing");

        let mut page = 1;
        let mut empty_streak = 0;

        while stats.added < options.max_restaurants && empty_streak < options.max_empty_pages {
            let url = page_url(seed, page);
            page += 1;

            let doc = match fetcher.fetch(&url) {
                Ok(raw) => raw.parse(),
                Err(err) => {
                    warn!(url = %url, %err, "listing page failed");
                    stats.pages_failed += 1;
                    empty_streak += 1;
                    continue;
                }
            };
            stats.pages_read += 1;

            let candidates = extract_document(&doc, options)?;
            if candidates.is_empty() {
                info!(url = %url, "no restaurants on page");
                stats.pages_empty += 1;
                empty_streak += 1;
                continue;
            }
            empty_streak = 0;
            stats.candidates += candidates.len();
            info!(url = %url, count = candidates.len(), "restaurants on page");

            for candidate in candidates {
                if stats.added >= options.max_restaurants {
                    break;
                }

                let known_complete = records
                    .get(&candidate.name)
                    .is_some_and(|existing| existing.is_complete());
                let candidate = if options.enrich_details && !known_complete && candidate.needs_details() {
                    stats.enriched += 1;
                    enrich(candidate, fetcher, options)
                } else {
                    candidate
                };

                match records.insert(candidate) {
                    Insert::Added => stats.added += 1,
                    Insert::Merged => stats.merged += 1,
                    Insert::Duplicate => {}
                }
            }
        }
    }

    if stats.pages_read == 0 {
        return Err(Error::NoDocument);
    }

    debug!(?stats, "harvest finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::fetch::RawDocument;

    fn listing(names: &[&str]) -> String {
        let mut html = String::from("<html><body>");
        for name in names {
            let slug = name.to_lowercase().replace(' ', "-");
            html.push_str(&format!(
                r#"<div class="restaurant-card"><h3><a href="/r/{slug}">{name}</a></h3><span class="cuisine">Thai</span><span>416-555-0100</span></div>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn one_seed() -> Options {
        Options {
            seed_paths: vec!["/toronto-restaurants".into()],
            ..Options::default()
        }
    }

    #[test]
    fn test_stops_after_consecutive_empty_pages() {
        let seen = RefCell::new(Vec::new());
        let fetcher = |url: &str| -> Result<RawDocument> {
            seen.borrow_mut().push(url.to_string());
            let body = if url.ends_with("restaurants") {
                listing(&["Pai", "Alo"])
            } else {
                "<html><body><p>nothing</p></body></html>".to_string()
            };
            Ok(RawDocument::html(url, body))
        };

        let mut records = RecordSet::new();
        let stats = harvest(&fetcher, &one_seed(), &mut records).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(stats.pages_read, 4);
        assert_eq!(stats.pages_empty, 3);
        assert_eq!(
            seen.borrow().last().map(String::as_str),
            Some("https://www.opentable.ca/toronto-restaurants?page=4")
        );
    }

    #[test]
    fn test_limit_counts_new_identities_only() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Ok(RawDocument::html(url, listing(&["Pai", "Pai", "Alo", "Canoe"])))
        };
        let options = Options {
            max_restaurants: 2,
            ..one_seed()
        };

        let mut records = RecordSet::new();
        let stats = harvest(&fetcher, &options, &mut records).unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Pai", "Alo"]);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.pages_read, 1);
    }

    #[test]
    fn test_no_document_at_all() {
        let fetcher = |url: &str| -> Result<RawDocument> {
            Err(Error::Fetch {
                url: url.to_string(),
                reason: "403".into(),
            })
        };

        let mut records = RecordSet::new();
        let result = harvest(&fetcher, &Options::default(), &mut records);

        assert!(matches!(result, Err(Error::NoDocument)));
        assert!(records.is_empty());
    }
}
