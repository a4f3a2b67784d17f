//! DOM helpers over `dom_query`.
//!
//! Thin wrappers for the handful of operations the strategies share:
//! ordered selector fallbacks, element iteration and text access.

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase) of the first node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether the first node is a `tag` element.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// All text content of the selection and its descendants.
///
/// Returned as `StrTendril`; call `.to_string()` only when owned storage is
/// needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text of the whole document, scripts included.
#[must_use]
pub fn document_text(doc: &Document) -> String {
    doc.select("html").text().to_string()
}

/// Parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Split a selection into one `Selection` per node, in document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// First element under `root` matching `selector`.
#[must_use]
pub fn first<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = root.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// Try `selectors` in order and return every match of the first one that
/// matches anything, with the selector that won.
///
/// Matches from different selectors are never combined.
#[must_use]
pub fn select_first_matching<'a>(
    root: &Selection<'a>,
    selectors: &[&'static str],
) -> Option<(&'static str, Vec<Selection<'a>>)> {
    selectors.iter().find_map(|selector| {
        let found = elements(&root.select(selector));
        if found.is_empty() {
            None
        } else {
            Some((*selector, found))
        }
    })
}

/// First element matched by the first selector in `selectors` that matches.
#[must_use]
pub fn first_of<'a>(root: &Selection<'a>, selectors: &[&str]) -> Option<Selection<'a>> {
    selectors.iter().find_map(|selector| first(root, selector))
}
