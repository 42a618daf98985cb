//! Shared strategies and oracles for the integration suites.

#![allow(dead_code)]

use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strings over a small mixed-width alphabet, so generated inputs
/// actually contain runs and duplicates. Plain `any::<String>()`
/// almost never repeats a code point.
pub fn clumpy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'c', '0', ' ', 'é', 'ē', '日', 'త']),
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// ASCII word-like strings.
pub fn ascii_words() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ]{0,24}").unwrap()
}

/// Predicates drawn from a named set, so failures print something
/// meaningful and multi-byte boundaries get exercised.
pub fn predicates() -> impl Strategy<Value = (&'static str, fn(char) -> bool)> {
    prop::sample::select(vec![
        ("is_ascii_lowercase", is_ascii_lowercase as fn(char) -> bool),
        ("is_alphanumeric", is_alphanumeric),
        ("is_ascii", is_ascii),
        ("always", always),
        ("never", never),
    ])
}

fn is_ascii_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_alphanumeric(c: char) -> bool {
    c.is_alphanumeric()
}

fn is_ascii(c: char) -> bool {
    c.is_ascii()
}

fn always(_: char) -> bool {
    true
}

fn never(_: char) -> bool {
    false
}

// ============================================================================
// ORACLES
// ============================================================================

/// The code points of `s`, materialized.
pub fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Naive first-occurrence dedup, the obvious-by-inspection version.
pub fn naive_nub(s: &str) -> String {
    let mut seen = HashSet::new();
    s.chars().filter(|&c| seen.insert(c)).collect()
}
