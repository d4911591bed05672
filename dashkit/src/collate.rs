//! Locale-aware string ordering for table cells.
//!
//! Uses the Unicode root collation, the same ordering a browser's
//! `localeCompare` falls back to: accents are secondary to base letters
//! ("Émile" sorts next to "Eve"), lowercase precedes uppercase on an
//! otherwise equal string, and digits compare one character at a time
//! ("10" sorts before "2").

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use log::warn;

/// Root-locale collator, built once per sort.
pub struct LocaleCollator {
    inner: Option<Collator>,
}

impl LocaleCollator {
    /// Collator for the root locale.
    ///
    /// If the collation data cannot be loaded, comparisons fall back to
    /// code-point order.
    pub fn root() -> Self {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Self {
                inner: Some(collator),
            },
            Err(e) => {
                warn!("root collation unavailable, using code-point order: {}", e);
                Self { inner: None }
            }
        }
    }

    /// Compare two strings the way a user-facing sort expects.
    ///
    /// Strings the collation treats as equal are ordered by code point, so
    /// distinct strings never compare equal.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::root()
    }
}

/// One-off comparison with a fresh root collator.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    LocaleCollator::root().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_cmp("amy", "Bob"), Ordering::Less);
        assert_eq!(locale_cmp("Amy", "bob"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("amy", "Amy"), Ordering::Less);
        assert_eq!(locale_cmp("Amy", "amy"), Ordering::Greater);
    }

    #[test]
    fn test_digits_before_letters_and_not_numeric() {
        assert_eq!(locale_cmp("9", "a"), Ordering::Less);
        assert_eq!(locale_cmp("10", "2"), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_punctuation_before_digits() {
        assert_eq!(locale_cmp("-1", "1"), Ordering::Less);
        assert_eq!(locale_cmp("_x", "0"), Ordering::Less);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let collator = LocaleCollator::root();
        assert_eq!(collator.compare("Émile", "Eve"), Ordering::Less);
        assert_eq!(collator.compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(collator.compare("Elan", "Élan"), Ordering::Less);
    }
}
