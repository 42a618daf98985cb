//! Structural accessors over the ends of a sequence.
//!
//! `head` and `tail` decode exactly one code point at the front of the
//! string; `last` and `init` decode exactly one at the back. None of
//! them scan the interior, so all four are O(1) regardless of input
//! length, and `tail`/`init` return borrowed subslices of the input.
//!
//! All four require a non-empty sequence and panic on `""` - empty
//! input here is a programmer error, not a recoverable condition.

/// Returns the first code point of `s`, which must be non-empty.
///
/// Haskell: `head :: [a] -> a`
///
/// # Panics
///
/// Panics if `s` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::head("golang"), 'g');
/// assert_eq!(charseq::head("నమస్తె"), 'న');
/// ```
pub fn head(s: &str) -> char {
    match s.chars().next() {
        Some(first) => first,
        None => panic!("head: empty string"),
    }
}

/// Returns everything after the first code point of `s`, which must be
/// non-empty. The result borrows from `s`.
///
/// Haskell: `tail :: [a] -> [a]`
///
/// # Panics
///
/// Panics if `s` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::tail("golang"), "olang");
/// assert_eq!(charseq::tail("h"), "");
/// ```
pub fn tail(s: &str) -> &str {
    let mut chars = s.chars();
    if chars.next().is_none() {
        panic!("tail: empty string");
    }
    chars.as_str()
}

/// Returns the final code point of `s`, which must be non-empty.
///
/// Decodes from the back of the string; the front is never scanned.
///
/// Haskell: `last :: [a] -> a`
///
/// # Panics
///
/// Panics if `s` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::last("google"), 'e');
/// assert_eq!(charseq::last("café"), 'é');
/// ```
pub fn last(s: &str) -> char {
    match s.chars().next_back() {
        Some(end) => end,
        None => panic!("last: empty string"),
    }
}

/// Returns everything before the final code point of `s`, which must
/// be non-empty. The result borrows from `s`.
///
/// Haskell: `init :: [a] -> [a]`
///
/// # Panics
///
/// Panics if `s` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::init("google"), "googl");
/// assert_eq!(charseq::init("café"), "caf");
/// ```
pub fn init(s: &str) -> &str {
    let mut chars = s.chars();
    if chars.next_back().is_none() {
        panic!("init: empty string");
    }
    chars.as_str()
}
