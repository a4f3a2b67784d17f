//! Text normalization: whitespace cleanup, phone canonicalization, cuisine
//! inference and HTML entity decoding.

use regex::Regex;

use crate::patterns::{CANONICAL_PHONE, DISALLOWED_CHARS, PHONE_PATTERNS, WHITESPACE_NORMALIZE};

/// Collapse whitespace runs to single spaces and trim the ends.
#[must_use]
pub fn clean(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

/// Like [`clean`], but first drops characters outside
/// `[\w\s\-()&.,]`.
///
/// Symbols are removed before whitespace is collapsed, so `"A | B"` becomes
/// `"A B"` rather than `"A  B"`.
#[must_use]
pub fn clean_strict(text: &str) -> String {
    clean(&DISALLOWED_CHARS.replace_all(text, ""))
}

/// Find the first North-American phone number in `text`.
///
/// Patterns are tried most specific first. A match with three groups is
/// rendered as `(AAA) BBB-CCCC`; anything else is returned verbatim.
/// Returns an empty string when no pattern matches.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::text::extract_phone;
///
/// assert_eq!(extract_phone("Call us: 416.555.1234"), "(416) 555-1234");
/// assert_eq!(extract_phone("no number here"), "");
/// ```
#[must_use]
pub fn extract_phone(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    for pattern in PHONE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };

        if let (4, Some(area), Some(exchange), Some(line)) =
            (caps.len(), caps.get(1), caps.get(2), caps.get(3))
        {
            return format!("({}) {}-{}", area.as_str(), exchange.as_str(), line.as_str());
        }

        return caps.get(0).map_or_else(String::new, |m| m.as_str().to_string());
    }

    String::new()
}

/// Rewrite a phone into `(AAA) BBB-CCCC` when it is safe to do so.
///
/// Ten digits are formatted directly; eleven digits with a leading `1` lose
/// the country code. Anything else is returned unchanged.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::text::normalize_phone;
///
/// assert_eq!(normalize_phone("1-416-555-1234"), "(416) 555-1234");
/// assert_eq!(normalize_phone("not a phone"), "not a phone");
/// ```
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if CANONICAL_PHONE.is_match(trimmed) {
        return trimmed.to_string();
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let national = match digits.len() {
        10 => &digits[..],
        11 if digits.starts_with('1') => &digits[1..],
        _ => return raw.to_string(),
    };

    format!("({}) {}-{}", &national[..3], &national[3..6], &national[6..])
}

/// Compiled whole-word, case-insensitive matcher over a cuisine vocabulary.
///
/// Keep one around when the same vocabulary is searched repeatedly.
#[derive(Debug, Clone)]
pub struct CuisineMatcher {
    entries: Vec<(String, Regex)>,
}

impl CuisineMatcher {
    /// Compile `vocabulary`, preserving its order. Blank entries are ignored.
    #[must_use]
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Self {
        let entries = vocabulary
            .iter()
            .map(|keyword| keyword.as_ref().trim())
            .filter(|keyword| !keyword.is_empty())
            .filter_map(|keyword| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                Regex::new(&pattern).ok().map(|re| (keyword.to_string(), re))
            })
            .collect();

        Self { entries }
    }

    /// First vocabulary keyword present in `text`, or an empty string.
    #[must_use]
    pub fn infer(&self, text: &str) -> String {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(keyword, _)| keyword.clone())
            .unwrap_or_default()
    }

    /// Vocabulary keyword whose match starts earliest in `text`.
    ///
    /// Used where position, not vocabulary order, decides (text next to a
    /// listing link names the cuisine first and the rest later).
    #[must_use]
    pub fn leftmost(&self, text: &str) -> String {
        self.entries
            .iter()
            .filter_map(|(keyword, re)| re.find(text).map(|m| (m.start(), keyword)))
            .min_by_key(|(start, _)| *start)
            .map(|(_, keyword)| keyword.clone())
            .unwrap_or_default()
    }
}

/// First keyword of `vocabulary` found in `text` as a whole word, ignoring
/// case. Empty when nothing matches.
///
/// # Example
///
/// ```rust
/// use restaurant_extract::text::infer_cuisine;
///
/// assert_eq!(infer_cuisine("Best Italian bistro in town", &["Chinese", "Italian"]), "Italian");
/// assert_eq!(infer_cuisine("Best bistro in town", &["Chinese", "Italian"]), "");
/// ```
#[must_use]
pub fn infer_cuisine<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> String {
    CuisineMatcher::new(vocabulary).infer(text)
}

/// Decode HTML character references in a single pass.
///
/// Handles the XML entities, Latin-1 letters, common typographic
/// punctuation, and decimal and hex references.
/// Unknown or malformed references are kept verbatim.
#[must_use]
pub fn unescape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Named references beyond the XML five, limited to Latin-1 letters and the
/// punctuation listing pages actually use.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("deg", '°'),
    ("middot", '·'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("hellip", '…'),
    ("Agrave", 'À'),
    ("Aacute", 'Á'),
    ("Acirc", 'Â'),
    ("Atilde", 'Ã'),
    ("Auml", 'Ä'),
    ("Aring", 'Å'),
    ("AElig", 'Æ'),
    ("Ccedil", 'Ç'),
    ("Egrave", 'È'),
    ("Eacute", 'É'),
    ("Ecirc", 'Ê'),
    ("Euml", 'Ë'),
    ("Igrave", 'Ì'),
    ("Iacute", 'Í'),
    ("Icirc", 'Î'),
    ("Iuml", 'Ï'),
    ("Ntilde", 'Ñ'),
    ("Ograve", 'Ò'),
    ("Oacute", 'Ó'),
    ("Ocirc", 'Ô'),
    ("Otilde", 'Õ'),
    ("Ouml", 'Ö'),
    ("Oslash", 'Ø'),
    ("Ugrave", 'Ù'),
    ("Uacute", 'Ú'),
    ("Ucirc", 'Û'),
    ("Uuml", 'Ü'),
    ("Yacute", 'Ý'),
    ("szlig", 'ß'),
    ("agrave", 'à'),
    ("aacute", 'á'),
    ("acirc", 'â'),
    ("atilde", 'ã'),
    ("auml", 'ä'),
    ("aring", 'å'),
    ("aelig", 'æ'),
    ("ccedil", 'ç'),
    ("egrave", 'è'),
    ("eacute", 'é'),
    ("ecirc", 'ê'),
    ("euml", 'ë'),
    ("igrave", 'ì'),
    ("iacute", 'í'),
    ("icirc", 'î'),
    ("iuml", 'ï'),
    ("ntilde", 'ñ'),
    ("ograve", 'ò'),
    ("oacute", 'ó'),
    ("ocirc", 'ô'),
    ("otilde", 'õ'),
    ("ouml", 'ö'),
    ("oslash", 'ø'),
    ("ugrave", 'ù'),
    ("uacute", 'ú'),
    ("ucirc", 'û'),
    ("uuml", 'ü'),
    ("yacute", 'ý'),
    ("yuml", 'ÿ'),
];

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => match name.strip_prefix('#') {
            Some(number) => {
                let code = match number.strip_prefix(['x', 'X']) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                    None => number.parse().ok()?,
                };
                char::from_u32(code)
            }
            None => NAMED_ENTITIES
                .iter()
                .find(|(entity, _)| *entity == name)
                .map(|&(_, c)| c),
        },
    }
}
