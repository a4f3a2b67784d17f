//! JSON-LD strategy.
//!
//! Reads Schema.org `Restaurant` entries out of
//! `<script type="application/ld+json">` blocks.

use dom_query::Document;
use serde_json::{Map, Value};
use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::patterns::JSON_LD_SELECTOR;
use crate::record::RestaurantRecord;
use crate::Options;

/// Extract every `Restaurant` entry from the document's JSON-LD blocks.
///
/// Fields are mapped as written (trimmed); no cleaning or phone
/// normalization happens here. Blocks that fail to parse are skipped.
///
/// # Errors
///
/// Never fails; the signature matches the other strategies.
pub fn extract(doc: &Document, _options: &Options) -> Result<Vec<RestaurantRecord>> {
    let mut records = Vec::new();

    for script in dom::elements(&doc.select(JSON_LD_SELECTOR)) {
        let json_text = dom::text_content(&script);
        let json_text = json_text.trim();
        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(json_text) {
            Ok(v) => v,
            Err(err) => {
                debug!(%err, "skipping malformed JSON-LD block");
                continue;
            }
        };

        let mut entries = Vec::new();
        flatten_entries(&data, &mut entries);

        records.extend(
            entries
                .into_iter()
                .filter(|entry| is_restaurant(entry))
                .map(to_record)
                .filter(|record| !record.name.is_empty()),
        );
    }

    Ok(records)
}

/// Collect objects from a top-level value, unwrapping arrays and `@graph`.
fn flatten_entries<'a>(value: &'a Value, out: &mut Vec<&'a Map<String, Value>>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_entries(item, out);
            }
        }
        Value::Object(map) => {
            out.push(map);
            if let Some(graph) = map.get("@graph") {
                flatten_entries(graph, out);
            }
        }
        _ => {}
    }
}

fn is_restaurant(entry: &Map<String, Value>) -> bool {
    match entry.get("@type") {
        Some(Value::String(t)) => t == "Restaurant",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Restaurant")),
        _ => false,
    }
}

fn to_record(entry: &Map<String, Value>) -> RestaurantRecord {
    RestaurantRecord {
        name: string_value(entry, "name"),
        url: string_value(entry, "url"),
        phone: string_value(entry, "telephone"),
        cuisine: string_value(entry, "servesCuisine"),
    }
}

/// A string property, or the first string of an array property.
fn string_value(entry: &Map<String, Value>, key: &str) -> String {
    let value = match entry.get(key) {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Array(items)) => items.iter().find_map(Value::as_str),
        _ => None,
    };
    value.map(str::trim).unwrap_or_default().to_string()
}
