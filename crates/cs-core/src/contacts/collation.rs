//! Sort keys for human-readable titles.

use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Accent- and case-insensitive key: compatibility decomposition, combining
/// marks dropped, lowercased.
pub fn collation_key(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two optional titles by collation key. Missing titles sort last;
/// equal keys fall back to the raw text so the order is total.
pub fn compare_titles(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => collation_key(a)
            .cmp(&collation_key(b))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
