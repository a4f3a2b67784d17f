//! Coverage report over a finished record list.

use std::collections::HashMap;
use std::fmt;

use crate::record::RestaurantRecord;

const TOP_CUISINES: usize = 10;
const SAMPLES: usize = 5;

/// Label used for records without a cuisine.
pub const UNKNOWN_CUISINE: &str = "Unknown";

/// Field coverage, cuisine breakdown and a few sample rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub with_phone: usize,
    pub with_cuisine: usize,
    pub with_url: usize,
    /// Most common cuisines, most frequent first. Ties keep first-seen order.
    pub cuisines: Vec<(String, usize)>,
    pub samples: Vec<RestaurantRecord>,
}

impl Summary {
    #[must_use]
    pub fn from_records(records: &[RestaurantRecord]) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in records {
            let cuisine = if r.cuisine.is_empty() { UNKNOWN_CUISINE } else { r.cuisine.as_str() };
            let n = counts.entry(cuisine).or_insert(0);
            if *n == 0 {
                order.push(cuisine.to_string());
            }
            *n += 1;
        }

        let mut cuisines: Vec<(String, usize)> = order
            .into_iter()
            .map(|c| {
                let n = counts.get(c.as_str()).copied().unwrap_or_default();
                (c, n)
            })
            .collect();
        cuisines.sort_by(|a, b| b.1.cmp(&a.1));
        cuisines.truncate(TOP_CUISINES);

        Self {
            total: records.len(),
            with_phone: records.iter().filter(|r| !r.phone.is_empty()).count(),
            with_cuisine: records.iter().filter(|r| !r.cuisine.is_empty()).count(),
            with_url: records.iter().filter(|r| !r.url.is_empty()).count(),
            cuisines,
            samples: records.iter().take(SAMPLES).cloned().collect(),
        }
    }

    /// `part` as a percentage of the total; zero for an empty list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, part: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No restaurants found.");
        }

        writeln!(f, "=== SUMMARY ===")?;
        writeln!(f, "Total restaurants: {}", self.total)?;
        for (label, n) in [
            ("With phone numbers", self.with_phone),
            ("With cuisine info", self.with_cuisine),
            ("With URLs", self.with_url),
        ] {
            writeln!(f, "{label}: {n} ({:.1}%)", self.percent(n))?;
        }

        writeln!(f, "\n=== CUISINE BREAKDOWN ===")?;
        for (cuisine, n) in &self.cuisines {
            writeln!(f, "{cuisine}: {n}")?;
        }

        writeln!(f, "\n=== SAMPLE DATA ===")?;
        for (i, r) in self.samples.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, r.name)?;
            writeln!(f, "   URL: {}", na(&r.url))?;
            writeln!(f, "   Phone: {}", na(&r.phone))?;
            writeln!(f, "   Cuisine: {}", na(&r.cuisine))?;
        }
        Ok(())
    }
}

fn na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
