//! URL resolution for links found in listing pages and embedded state.

use url::Url;

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Convert a relative or absolute link to absolute form against `base`.
///
/// Absolute links and non-navigational schemes (`tel:`, `mailto:`,
/// `javascript:`, `data:`) are returned unchanged. An empty link stays empty,
/// and a link `base` cannot join is returned as-is.
#[must_use]
pub fn create_absolute_url(link: &str, base: &Url) -> String {
    let link = link.trim();

    if link.is_empty() {
        return String::new();
    }

    if ["data:", "javascript:", "mailto:", "tel:"]
        .iter()
        .any(|scheme| link.starts_with(scheme))
    {
        return link.to_string();
    }

    if is_absolute_url(link) {
        return link.to_string();
    }

    base.join(link).map_or_else(|_| link.to_string(), String::from)
}

/// Append a `page` query parameter, keeping any existing query.
///
/// Page 1 is the URL itself.
#[must_use]
pub fn page_url(listing: &str, page: usize) -> String {
    if page <= 1 {
        return listing.to_string();
    }
    let separator = if listing.contains('?') { '&' } else { '?' };
    format!("{listing}{separator}page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.opentable.ca").unwrap()
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://www.opentable.ca/r/alo"));
        assert!(is_absolute_url("  http://example.com  "));
        assert!(!is_absolute_url("/r/alo"));
        assert!(!is_absolute_url("ftp://example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_create_absolute_url_relative() {
        assert_eq!(create_absolute_url("/r/alo-toronto", &base()), "https://www.opentable.ca/r/alo-toronto");
        assert_eq!(
            create_absolute_url("r/alo?corrid=1", &base()),
            "https://www.opentable.ca/r/alo?corrid=1"
        );
    }

    #[test]
    fn test_create_absolute_url_passthrough() {
        assert_eq!(create_absolute_url("https://other.com/r/x", &base()), "https://other.com/r/x");
        assert_eq!(create_absolute_url("tel:+14165551234", &base()), "tel:+14165551234");
        assert_eq!(create_absolute_url("  ", &base()), "");
    }

    #[test]
    fn test_page_url() {
        let listing = "https://www.opentable.ca/toronto-restaurants";
        assert_eq!(page_url(listing, 1), listing);
        assert_eq!(page_url(listing, 2), format!("{listing}?page=2"));
        assert_eq!(
            page_url("https://www.opentable.ca/search?location=toronto", 3),
            "https://www.opentable.ca/search?location=toronto&page=3"
        );
    }
}
