//! The restaurant record produced by every strategy and entry point.

use serde::{Deserialize, Serialize};

use crate::patterns::WHITESPACE_NORMALIZE;

/// One restaurant as extracted from a listing, detail page or embedded state.
///
/// Empty strings stand for "unknown". Fields are only ever filled, never
/// overwritten, once a record leaves the strategy that created it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Display name. Never empty on records that leave a strategy.
    pub name: String,

    /// Absolute profile URL.
    pub url: String,

    /// Phone, canonical `(AAA) BBB-CCCC` once normalized.
    pub phone: String,

    /// Free-form cuisine label.
    pub cuisine: String,
}

impl RestaurantRecord {
    /// Record carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Deduplication key: lowercase, whitespace-collapsed name.
    #[must_use]
    pub fn identity(&self) -> String {
        identity_key(&self.name)
    }

    /// True when phone and cuisine are both known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.phone.is_empty() && !self.cuisine.is_empty()
    }

    /// True when a detail page could still add something.
    #[must_use]
    pub fn needs_details(&self) -> bool {
        !self.url.is_empty() && !self.is_complete()
    }

    /// Copy every field that is empty here but set on `other`.
    ///
    /// Returns whether anything changed. The name is never touched.
    pub fn fill_missing_from(&mut self, other: &Self) -> bool {
        let mut changed = false;
        for (mine, theirs) in [
            (&mut self.url, &other.url),
            (&mut self.phone, &other.phone),
            (&mut self.cuisine, &other.cuisine),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }
        changed
    }
}

/// Normalize a name into the key records are merged on.
#[must_use]
pub fn identity_key(name: &str) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(name.trim(), " ")
        .to_lowercase()
}
