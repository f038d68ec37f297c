//! Description ordering
//!
//! Unicode collation (root locale) so case and accents order the way
//! people read them, with Chinese characters replaced by their pinyin
//! spelling first so mixed-script lists read alphabetically.

use std::borrow::Cow;
use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::warn;
use pinyin::ToPinyin;

/// Compares descriptions. Built once per sort.
pub(crate) struct DescriptionCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl DescriptionCollator {
    pub(crate) fn new() -> Self {
        let collator = match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Collation data unavailable, ordering by code point: {}", e);
                None
            }
        };
        Self { collator }
    }

    /// Order `a` and `b` by their pinyin-mapped text, then by the original
    /// text. Only identical strings compare equal.
    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        let (mapped_a, mapped_b) = (romanize(a), romanize(b));
        match &self.collator {
            Some(collator) => collator
                .compare(&mapped_a, &mapped_b)
                .then_with(|| collator.compare(a, b))
                .then_with(|| a.cmp(b)),
            None => mapped_a.cmp(&mapped_b).then_with(|| a.cmp(b)),
        }
    }
}

/// Replace Han characters with their toneless pinyin; other text is kept.
fn romanize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.to_pinyin().is_some()) {
        return Cow::Borrowed(text);
    }
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => mapped.push_str(p.plain()),
            None => mapped.push(c),
        }
    }
    Cow::Owned(mapped)
}

/// Order two descriptions the way the description view does.
#[cfg(test)]
pub(crate) fn compare_descriptions(a: &str, b: &str) -> Ordering {
    DescriptionCollator::new().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut texts: Vec<&str>) -> Vec<&str> {
        let collator = DescriptionCollator::new();
        texts.sort_by(|a, b| collator.compare(a, b));
        texts
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare_descriptions("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_descriptions("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare_descriptions("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_descriptions("Socks", "Socks"), Ordering::Equal);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(compare_descriptions("Éclair", "Zipper"), Ordering::Less);
        assert_eq!(compare_descriptions("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_descriptions("Éclair", "Fan"), Ordering::Less);
    }

    #[test]
    fn test_mixed_case_and_accents() {
        assert_eq!(
            sorted(vec!["Zipper", "Éclair", "apple", "Apple"]),
            vec!["apple", "Apple", "Éclair", "Zipper"]
        );
    }

    #[test]
    fn test_pinyin_order() {
        // 护照 (huzhao) sorts between "Charger" and "Socks"
        assert_eq!(romanize("护照"), "huzhao");
        assert_eq!(compare_descriptions("Charger", "护照"), Ordering::Less);
        assert_eq!(compare_descriptions("护照", "Socks"), Ordering::Less);
    }

    #[test]
    fn test_romanize_borrows_plain_text() {
        assert!(matches!(romanize("Socks"), Cow::Borrowed("Socks")));
        assert_eq!(romanize("2 袜子"), "2 wazi");
    }
}
