//! Listing order: folders first, then a locale-aware name comparison.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::Item;

/// Compare two names the way a human reads them.
///
/// Levels, each breaking ties of the previous one:
/// 1. base letters, ignoring case and accents (`é` sorts with `e`)
/// 2. accents, ignoring case
/// 3. lower-case before upper-case
/// 4. raw code points, so the order is total
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(name: &str) -> Vec<bool> {
    name.nfd().map(char::is_uppercase).collect()
}

/// Order two items: folders before files, then by name.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    b.is_folder
        .cmp(&a.is_folder)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Sort a listing in place (stable).
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(compare_items);
}
