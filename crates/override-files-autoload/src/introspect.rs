//! Namespace and class name extraction from PHP source text.
//!
//! This is a single-pass textual scan in the spirit of Composer's
//! `PhpFileParser`, not a parser. It handles the common one-class-per-file
//! layout; when a file declares several classes only the first one counts.

use regex::Regex;
use std::sync::LazyLock;

/// `namespace Foo\Bar;` at the start of a line.
static NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*namespace\s+(?P<name>[A-Za-z_\x7f-\xff][A-Za-z0-9_\x7f-\xff\\]*)\s*;")
        .expect("namespace pattern is valid")
});

/// A class declaration line with its modifiers.
static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xm)
        ^[\ \t]*
        (?P<modifiers>(?:(?:abstract|final|readonly)\s+)*)
        class\s+
        (?P<name>[A-Za-z_\x7f-\xff][A-Za-z0-9_\x7f-\xff]*)",
    )
    .expect("class pattern is valid")
});

/// Extract the namespace declared by `source`.
#[must_use]
pub fn extract_namespace(source: &str) -> Option<String> {
    NAMESPACE
        .captures(source)
        .map(|caps| caps["name"].trim_end_matches('\\').to_string())
        .filter(|name| !name.is_empty())
}

/// Extract the name of the first non-abstract class declared by `source`.
///
/// `final` and `readonly` modifiers are accepted. Abstract classes are
/// skipped over.
#[must_use]
pub fn extract_class_name(source: &str) -> Option<String> {
    CLASS
        .captures_iter(source)
        .find(|caps| {
            !caps["modifiers"]
                .split_whitespace()
                .any(|modifier| modifier == "abstract")
        })
        .map(|caps| caps["name"].to_string())
}
