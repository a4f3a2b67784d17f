//! Listing data embedded in a page's window-state script.
//!
//! Search result pages ship their initial application state as JSON inside
//! `<script id="primary-window-vars" type="application/json">`. Reading it
//! is exact where the DOM strategies are heuristic, so saved pages go
//! through here.

use dom_query::Document;
use serde_json::Value;
use tracing::{debug, info};

use crate::dom;
use crate::error::{Error, Result};
use crate::record::RestaurantRecord;
use crate::text::{normalize_phone, unescape_html};
use crate::url_utils::create_absolute_url;
use crate::Options;

/// JSON pointer to the restaurant list inside the window state.
pub const RESTAURANTS_POINTER: &str =
    "/windowVariables/__INITIAL_STATE__/lolzViewAll/searchResults/restaurants";

/// Parse `html` and read its embedded listing. See [`parse_embedded_document`].
///
/// # Errors
///
/// Same as [`parse_embedded_document`].
pub fn parse_embedded_listing(html: &str, options: &Options) -> Result<Vec<RestaurantRecord>> {
    parse_embedded_document(&dom::parse(html), options)
}

/// Read every restaurant from the document's embedded window state.
///
/// A state block without a restaurant list yields an empty list. Entries
/// without a string `name` are dropped; any other field of an unexpected
/// shape is left empty.
///
/// # Errors
///
/// - `Error::MissingEmbeddedData` if the state script is absent
/// - `Error::MalformedEmbeddedData` if it does not hold valid JSON
/// - `Error::InvalidUrl` if `options.base_url` cannot be parsed
pub fn parse_embedded_document(doc: &Document, options: &Options) -> Result<Vec<RestaurantRecord>> {
    let base = options.base()?;
    let selector = format!("script#{}", options.embedded_state_id);

    let script = dom::first(&doc.select("html"), &selector)
        .ok_or_else(|| Error::MissingEmbeddedData(options.embedded_state_id.clone()))?;

    let json_text = unescape_html(&dom::text_content(&script));
    let state: Value = serde_json::from_str(json_text.trim())?;

    let Some(Value::Array(entries)) = state.pointer(RESTAURANTS_POINTER) else {
        debug!("embedded state has no restaurant list");
        return Ok(Vec::new());
    };

    let records: Vec<_> = entries
        .iter()
        .filter_map(|entry| to_record(entry, &base))
        .collect();

    info!(count = records.len(), "read embedded listing");
    Ok(records)
}

/// Map one entry, or `None` when it has no usable name.
fn to_record(entry: &Value, base: &url::Url) -> Option<RestaurantRecord> {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() {
        debug!("skipping unnamed embedded entry");
        return None;
    }

    let link = text_at(entry, "/urls/profileLink/link");
    let phone = ["/contactInformation/formattedPhoneNumber", "/contactInformation/phoneNumber"]
        .into_iter()
        .map(|pointer| text_at(entry, pointer))
        .find(|phone| !phone.is_empty())
        .unwrap_or_default();

    Some(RestaurantRecord {
        name: name.to_string(),
        url: create_absolute_url(&link, base),
        phone: normalize_phone(&phone),
        cuisine: text_at(entry, "/primaryCuisine/name"),
    })
}

/// Trimmed string (or number) at `pointer`; empty for anything else.
fn text_at(entry: &Value, pointer: &str) -> String {
    match entry.pointer(pointer) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: &str) -> String {
        format!(
            r#"<html><head><script id="primary-window-vars" type="application/json">{json}</script></head><body></body></html>"#
        )
    }

    #[test]
    fn test_reads_restaurants() {
        let html = page(
            r#"{"windowVariables":{"__INITIAL_STATE__":{"lolzViewAll":{"searchResults":{"restaurants":[
                {"name":" Alo ","urls":{"profileLink":{"link":"/r/alo-toronto"}},
                 "contactInformation":{"formattedPhoneNumber":"","phoneNumber":"4162601234"},
                 "primaryCuisine":{"name":"French"}},
                {"name":"Canoe","urls":{"profileLink":{"link":"https://www.opentable.com/r/canoe"}},
                 "contactInformation":{"formattedPhoneNumber":"(416) 364-0054"}},
                {"name":"","primaryCuisine":{"name":"Thai"}}
            ]}}}}}"#,
        );

        let records = parse_embedded_listing(&html, &Options::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RestaurantRecord {
                name: "Alo".into(),
                url: "https://www.opentable.ca/r/alo-toronto".into(),
                phone: "(416) 260-1234".into(),
                cuisine: "French".into(),
            }
        );
        assert_eq!(records[1].url, "https://www.opentable.com/r/canoe");
        assert_eq!(records[1].phone, "(416) 364-0054");
        assert_eq!(records[1].cuisine, "");
    }

    #[test]
    fn test_entities_decoded_before_parsing() {
        let html = page(
            "{&quot;windowVariables&quot;:{&quot;__INITIAL_STATE__&quot;:{&quot;lolzViewAll&quot;:\
             {&quot;searchResults&quot;:{&quot;restaurants&quot;:[{&quot;name&quot;:&quot;Barberian&#39;s&quot;}]}}}}}",
        );

        let records = parse_embedded_listing(&html, &Options::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Barberian's");
    }

    #[test]
    fn test_missing_path_is_empty() {
        let html = page(r#"{"windowVariables":{}}"#);
        assert!(parse_embedded_listing(&html, &Options::default()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_and_malformed_block() {
        let missing = parse_embedded_listing("<p>nothing</p>", &Options::default());
        assert!(matches!(missing, Err(Error::MissingEmbeddedData(_))));

        let malformed = parse_embedded_listing(&page("{ nope"), &Options::default());
        assert!(matches!(malformed, Err(Error::MalformedEmbeddedData(_))));
    }

    #[test]
    fn test_odd_entry_shapes_skipped() {
        let html = page(
            r#"{"windowVariables":{"__INITIAL_STATE__":{"lolzViewAll":{"searchResults":{"restaurants":[
                42, {"name":"Pai","urls":null}
            ]}}}}}"#,
        );

        let records = parse_embedded_listing(&html, &Options::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pai");
        assert_eq!(records[0].url, "");
    }

    #[test]
    fn test_null_or_numeric_fields_keep_the_entry() {
        let html = page(
            r#"{"windowVariables":{"__INITIAL_STATE__":{"lolzViewAll":{"searchResults":{"restaurants":[
                {"name":"Alo","primaryCuisine":{"name":null}},
                {"name":"Canoe","contactInformation":{"phoneNumber":4163640054}},
                {"name":"Pai","urls":{"profileLink":{"link":null}}},
                {"name":7}
            ]}}}}}"#,
        );

        let records = parse_embedded_listing(&html, &Options::default()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alo", "Canoe", "Pai"]);
        assert_eq!(records[0].cuisine, "");
        assert_eq!(records[1].phone, "(416) 364-0054");
        assert_eq!(records[2].url, "");
    }
}
