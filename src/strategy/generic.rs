//! Last-resort strategy: any link that looks like it names a restaurant.

use std::collections::HashSet;

use dom_query::Document;

use super::clean_field;
use crate::dom;
use crate::error::Result;
use crate::patterns::{NAVIGATION_TEXT, RESTAURANT_PATH, RESTAURANT_WORDS};
use crate::record::RestaurantRecord;
use crate::url_utils::create_absolute_url;
use crate::Options;

/// Keep anchors that point at a profile path or whose text contains a
/// restaurant word, skipping navigation links. Names are deduplicated
/// exactly and the result is truncated to `options.max_link_candidates`.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `options.base_url` cannot be parsed.
pub fn extract(doc: &Document, options: &Options) -> Result<Vec<RestaurantRecord>> {
    let base = options.base()?;
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for link in dom::elements(&doc.select("a[href]")) {
        let href = dom::get_attribute(&link, "href").unwrap_or_default();
        let name = clean_field(&dom::text_content(&link), options);

        if name.chars().count() < options.min_name_chars || NAVIGATION_TEXT.is_match(&name) {
            continue;
        }
        if !RESTAURANT_PATH.is_match(&href) && !mentions_restaurant(&name) {
            continue;
        }
        if !seen.insert(name.clone()) {
            continue;
        }

        records.push(RestaurantRecord {
            url: create_absolute_url(&href, &base),
            ..RestaurantRecord::named(name)
        });
        if records.len() >= options.max_link_candidates {
            break;
        }
    }

    records.truncate(options.max_link_candidates);
    Ok(records)
}

fn mentions_restaurant(text: &str) -> bool {
    let lower = text.to_lowercase();
    RESTAURANT_WORDS.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<RestaurantRecord> {
        extract(&dom::parse(html), &Options::default()).unwrap()
    }

    #[test]
    fn test_sign_in_excluded_even_on_profile_path() {
        let records = run(r#"<a href="/r/signin-page">Sign In</a><a href="/r/canoe">Canoe</a>"#);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Canoe");
    }

    #[test]
    fn test_restaurant_words_qualify_any_link() {
        let records = run(r#"
            <a href="/promo/1">The Grilled Cheese Bistro</a>
            <a href="/promo/2">Summer Deals</a>
            <a href="https://elsewhere.com/x">Lakeside Restaurant</a>
        "#);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["The Grilled Cheese Bistro", "Lakeside Restaurant"]);
        assert_eq!(records[0].url, "https://www.opentable.ca/promo/1");
        assert_eq!(records[1].url, "https://elsewhere.com/x");
    }

    #[test]
    fn test_navigation_blocklist() {
        let records = run(r#"
            <a href="/about">About Our Kitchen</a>
            <a href="/help">Help</a>
            <a href="/r/more">View more restaurants</a>
            <a href="/r/bar-isabel">Bar Isabel</a>
        "#);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bar Isabel");
    }

    #[test]
    fn test_exact_name_dedup_and_cap() {
        let mut html = String::from(r#"<a href="/r/a">Dup Cafe</a><a href="/r/b">Dup Cafe</a>"#);
        for i in 0..70 {
            html.push_str(&format!(r#"<a href="/r/p{i}">Spot {i}</a>"#));
        }
        let records = run(&html);

        assert_eq!(records.len(), 50);
        assert_eq!(records[0].url, "https://www.opentable.ca/r/a");
        assert_eq!(records[1].name, "Spot 0");
    }
}
