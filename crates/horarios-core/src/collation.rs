//! Locale-style label ordering.
//!
//! Labels are compared in three levels, the way a Portuguese collator
//! orders them: base letters first (accents and case ignored), then
//! accents, then case with lowercase before uppercase. Byte order is the
//! last tie-breaker so that the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Precomputed sort key for a label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(label: &str) -> Self {
        let decomposed: String = label.nfd().collect();

        let primary = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();

        let secondary = decomposed.chars().flat_map(char::to_lowercase).collect();

        let tertiary = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();

        Self {
            primary,
            secondary,
            tertiary,
            raw: label.to_string(),
        }
    }
}

/// Compare two labels with collation rules.
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
