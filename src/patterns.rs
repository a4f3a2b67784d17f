//! Compiled regex patterns, CSS selectors and vocabularies.
//!
//! All patterns are compiled once at first use with `LazyLock`.
//! Selector lists are ordered: callers take the first one that matches.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Phone Patterns
// =============================================================================

/// North-American phone patterns, most specific first.
///
/// The first pattern tolerates a leading `+1`/`1` country code; the later
/// ones only exist for numbers the looser prefixes would mis-segment.
pub static PHONE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
            .expect("PHONE_PATTERNS[0] regex"),
        Regex::new(r"\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
            .expect("PHONE_PATTERNS[1] regex"),
        Regex::new(r"([0-9]{3})[-.]([0-9]{3})[-.]([0-9]{4})").expect("PHONE_PATTERNS[2] regex"),
        Regex::new(r"(\d{3})\s(\d{3})\s(\d{4})").expect("PHONE_PATTERNS[3] regex"),
    ]
});

/// A phone already in `(AAA) BBB-CCCC` form.
pub static CANONICAL_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("CANONICAL_PHONE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Characters the strict cleaner removes.
pub static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\-()&.,]").expect("DISALLOWED_CHARS regex")
});

// =============================================================================
// Link Patterns
// =============================================================================

/// Path of a restaurant profile page, e.g. `/r/canoe-toronto`.
pub static RESTAURANT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/r/[\w-]+").expect("RESTAURANT_PATH regex")
});

/// Anchor text of navigation and utility links.
pub static NAVIGATION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(sign.?in|sign.?up|login|register|about|contact|privacy|terms|help|support|blog|careers|press|home|search|filter|sort|view|more)",
    )
    .expect("NAVIGATION_TEXT regex")
});

/// Words in anchor text that suggest the link names a restaurant.
pub const RESTAURANT_WORDS: &[&str] = &[
    "restaurant", "cafe", "bistro", "grill", "kitchen", "house", "bar",
];

// =============================================================================
// Cuisine Vocabularies
// =============================================================================

/// Cuisine names searched around restaurant links on listing pages.
pub const LISTING_CUISINES: &[&str] = &[
    "Italian", "Chinese", "Japanese", "Mexican", "Indian", "French", "Thai", "Greek",
    "American", "Canadian", "Korean", "Vietnamese", "Mediterranean", "Steakhouse",
    "Seafood", "Pizza", "Sushi", "Burger", "BBQ",
];

/// Cuisine keywords searched on detail pages, in priority order.
pub const DETAIL_CUISINES: &[&str] = &[
    "Italian", "Chinese", "Japanese", "Mexican", "Indian", "French", "Thai", "Greek",
    "American", "Canadian", "Korean", "Vietnamese", "Mediterranean", "Steakhouse",
    "Seafood", "Pizza", "Sushi", "Burger", "BBQ", "Contemporary", "Modern", "Traditional",
];

// =============================================================================
// CSS Selectors
// =============================================================================

/// Restaurant card containers. The first selector with any match wins.
pub const CARD_SELECTORS: &[&str] = &[
    r#"[data-test*="restaurant-card"]"#,
    r#"[data-test*="restaurant-listing"]"#,
    ".restaurant-card",
    ".restaurant-listing",
    r#"[class*="restaurant-card"]"#,
    r#"[class*="listing"]"#,
];

/// Name element inside a card, title markers first.
pub const CARD_NAME_SELECTORS: &[&str] = &[
    r#"[data-test*="restaurant-card-title"]"#,
    r#"[data-test*="title"]"#,
    "h2",
    "h3",
    "h4",
    ".title",
    ".name",
    r#"[class*="title"]"#,
    r#"[class*="name"]"#,
];

/// Cuisine element inside a card.
pub const CARD_CUISINE_SELECTORS: &[&str] = &[
    r#"[data-test*="cuisine"]"#,
    r#"[data-test*="category"]"#,
    ".cuisine",
    ".category",
    r#"[class*="cuisine"]"#,
    r#"[class*="category"]"#,
];

/// Phone-bearing elements on a detail page.
pub const DETAIL_PHONE_SELECTORS: &[&str] = &[
    r#"a[href^="tel:"]"#,
    r#"[data-test*="phone"]"#,
    ".phone",
    ".contact",
    r#"[class*="phone"]"#,
    r#"[class*="contact"]"#,
];

/// Embedded JSON-LD blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
