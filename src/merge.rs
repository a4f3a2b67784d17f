//! Deduplication of records by normalized name.
//!
//! The first record seen for an identity is kept in place; later duplicates
//! only backfill its empty fields. Output order is discovery order.

use std::collections::HashMap;

use crate::record::RestaurantRecord;

/// Outcome of inserting one record into a [`RecordSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The identity was new; the record was appended.
    Added,
    /// The identity existed; empty fields were backfilled.
    Merged,
    /// The identity existed and nothing new was learned.
    Duplicate,
}

/// Append-only, identity-keyed collection of restaurant records.
///
/// Owned by the caller and threaded through the pipeline, so partial results
/// survive a failed run.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<RestaurantRecord>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, merging it into an existing one with the same identity.
    pub fn insert(&mut self, record: RestaurantRecord) -> Insert {
        let key = record.identity();
        match self.index.get(&key) {
            Some(&pos) => {
                if self.records[pos].fill_missing_from(&record) {
                    Insert::Merged
                } else {
                    Insert::Duplicate
                }
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                Insert::Added
            }
        }
    }

    /// The kept record for `name`'s identity, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RestaurantRecord> {
        self.index
            .get(&crate::record::identity_key(name))
            .map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RestaurantRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<RestaurantRecord> {
        self.records
    }
}

impl Extend<RestaurantRecord> for RecordSet {
    fn extend<I: IntoIterator<Item = RestaurantRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<RestaurantRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = RestaurantRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a RestaurantRecord;
    type IntoIter = std::slice::Iter<'a, RestaurantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Collapse records sharing a normalized name.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::{merge, RestaurantRecord};
///
/// let merged = merge(vec![
///     RestaurantRecord::named("Canoe"),
///     RestaurantRecord { cuisine: "Canadian".into(), ..RestaurantRecord::named("canoe") },
/// ]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].name, "Canoe");
/// assert_eq!(merged[0].cuisine, "Canadian");
/// ```
#[must_use]
pub fn merge<I>(records: I) -> Vec<RestaurantRecord>
where
    I: IntoIterator<Item = RestaurantRecord>,
{
    records.into_iter().collect::<RecordSet>().into_records()
}
