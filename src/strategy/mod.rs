//! Record extraction strategies.
//!
//! Each strategy is a plain function that looks for restaurants in a parsed
//! document in its own way. The cascade tries them in [`DEFAULT_STRATEGIES`]
//! order and keeps the first non-empty result.

use dom_query::Document;

use crate::error::Result;
use crate::record::RestaurantRecord;
use crate::text;
use crate::Options;

pub mod anchors;
pub mod cards;
pub mod generic;
pub mod json_ld;

/// Signature shared by every strategy.
///
/// An `Err` (or a panic) means "this strategy found nothing"; the cascade
/// moves on to the next one.
pub type ExtractFn = fn(&Document, &Options) -> Result<Vec<RestaurantRecord>>;

/// A named extraction strategy.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// Name used in logs.
    pub name: &'static str,
    /// The extraction function.
    pub extract: ExtractFn,
}

impl Strategy {
    #[must_use]
    pub const fn new(name: &'static str, extract: ExtractFn) -> Self {
        Self { name, extract }
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Strategy").field(&self.name).finish()
    }
}

/// Strategies in priority order: card markup, JSON-LD, profile links, any
/// promising link.
pub const DEFAULT_STRATEGIES: [Strategy; 4] = [
    Strategy::new("restaurant_cards", cards::extract),
    Strategy::new("structured_data", json_ld::extract),
    Strategy::new("links_and_scripts", anchors::extract),
    Strategy::new("generic_links", generic::extract),
];

/// Clean extracted text according to `options.strict_cleaning`.
pub(crate) fn clean_field(raw: &str, options: &Options) -> String {
    if options.strict_cleaning {
        text::clean_strict(raw)
    } else {
        text::clean(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let names: Vec<_> = DEFAULT_STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["restaurant_cards", "structured_data", "links_and_scripts", "generic_links"]
        );
    }

    #[test]
    fn test_clean_field_honours_strictness() {
        let strict = Options::default();
        let lenient = Options {
            strict_cleaning: false,
            ..Options::default()
        };

        assert_eq!(clean_field(" Joe's  Diner ", &strict), "Joes Diner");
        assert_eq!(clean_field(" Joe's  Diner ", &lenient), "Joe's Diner");
    }
}
