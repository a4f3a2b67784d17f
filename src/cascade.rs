//! First-non-empty-wins cascade over the extraction strategies.

use std::panic::{catch_unwind, AssertUnwindSafe};

use dom_query::Document;
use tracing::{debug, info, warn};

use crate::record::RestaurantRecord;
use crate::strategy::Strategy;
use crate::Options;

/// Run `strategies` in order and return the first non-empty result.
///
/// A strategy that returns an error or panics counts as empty; later
/// strategies are only consulted when every earlier one came up empty.
/// A document nothing matches yields an empty list.
#[must_use]
pub fn run(doc: &Document, strategies: &[Strategy], options: &Options) -> Vec<RestaurantRecord> {
    for strategy in strategies {
        debug!(strategy = strategy.name, "trying strategy");

        match catch_unwind(AssertUnwindSafe(|| (strategy.extract)(doc, options))) {
            Ok(Ok(records)) if !records.is_empty() => {
                info!(strategy = strategy.name, count = records.len(), "strategy found restaurants");
                return records;
            }
            Ok(Ok(_)) => {}
            Ok(Err(err)) => warn!(strategy = strategy.name, %err, "strategy failed"),
            Err(_) => warn!(strategy = strategy.name, "strategy panicked"),
        }
    }

    Vec::new()
}
