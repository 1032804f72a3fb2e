//! Identifier inflection used to derive generated method names.
//!
//! The helpers are intentionally naive. `pluralize` always appends `s` and
//! `singularize` strips exactly one trailing `s`; generated method names are
//! defined by this exact composition, so none of it follows English rules.

use regex::Regex;
use std::sync::LazyLock;

const NAMESPACE_SEPARATOR: &str = "::";

// acronym run followed by a capitalised word: `HTMLParser` → `HTML_Parser`
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym boundary regex"));

// lowercase letter or ASCII digit followed by a capital: `peerReviewed` → `peer_Reviewed`
// (`\d` would also match non-ASCII digits here)
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary regex"));

/// Keep only the final `::` segment of a namespaced identifier.
///
/// Trailing empty segments are ignored (`"A::"` → `"A"`); an identifier made
/// only of separators yields the empty string.
#[must_use]
pub fn demodulize(label: &str) -> &str {
    label
        .rsplit(NAMESPACE_SEPARATOR)
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
}

/// Convert a camel-cased identifier to snake case.
///
/// `::` becomes `/`, acronym runs are split before their final capital
/// (`HTMLParser` → `html_parser`), a lowercase letter or digit followed by a
/// capital gets an underscore, `-` becomes `_`, and the result is lowercased.
#[must_use]
pub fn underscore(word: &str) -> String {
    let word = word.replace(NAMESPACE_SEPARATOR, "/");
    let word = ACRONYM_BOUNDARY.replace_all(&word, "${1}_${2}");
    let word = CAMEL_BOUNDARY.replace_all(&word, "${1}_${2}");

    word.replace('-', "_").to_lowercase()
}

/// Append `s`. No irregular forms.
#[must_use]
pub fn pluralize(word: &str) -> String {
    format!("{word}s")
}

/// Drop exactly one trailing `s`, if present.
#[must_use]
pub fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// `underscore` followed by `pluralize` (`CaseStudy` → `case_studys`).
#[must_use]
pub fn tableize(word: &str) -> String {
    pluralize(&underscore(word))
}

/// Derive the base name shared by a label's predicate and mutator.
///
/// demodulize → underscore → pluralize → singularize.
#[must_use]
pub fn method_base_name(label: &str) -> String {
    singularize(&tableize(demodulize(label))).to_string()
}

///
/// TESTS
///
