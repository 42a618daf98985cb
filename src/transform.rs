//! Operations that reorder or discard interior code points.
//!
//! These are the only allocating operations in the crate: their
//! results are not contiguous regions of the input, so a borrowed
//! slice cannot express them. Each builds exactly one output `String`
//! with the input's byte length reserved up front - the output can
//! never exceed the input, so the buffer never regrows.

use std::collections::HashSet;

use crate::contracts;

/// Returns the code points of `s` in reverse order.
///
/// Haskell: `reverse :: [a] -> [a]`
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::reverse("golang"), "gnalog");
/// assert_eq!(charseq::reverse("étude"), "eduté");
/// assert_eq!(charseq::reverse(""), "");
/// ```
pub fn reverse(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    out.extend(s.chars().rev());
    out
}

/// Returns the code points of `s` that satisfy `pred`, in order.
///
/// Haskell: `filter :: (a -> Bool) -> [a] -> [a]`
///
/// # Examples
///
/// ```
/// let no_punctuation = charseq::filter("he said \"hello there!\"", |c| {
///     !"!.,?:;-'\"".contains(c)
/// });
/// assert_eq!(no_punctuation, "he said hello there");
/// ```
pub fn filter<P>(s: &str, mut pred: P) -> String
where
    P: FnMut(char) -> bool,
{
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if pred(c) {
            out.push(c);
        }
    }
    out
}

/// Removes duplicate code points, keeping only the first occurrence of
/// each in its original position.
///
/// Haskell calls this `nub :: Eq a => [a] -> [a]`.
///
/// The seen-set is two-tier: a flat table for ASCII and a lazily
/// allocated hash set for everything else, so pure-ASCII input does no
/// bookkeeping allocation at all.
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::distinct("aaabbbcccdddeeefff"), "abcdef");
/// assert_eq!(charseq::distinct("GOOGLE"), "GOLE");
/// ```
pub fn distinct(s: &str) -> String {
    let mut ascii_seen = [false; 128];
    let mut wide_seen: Option<HashSet<char>> = None;

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let first_occurrence = match ascii_seen.get_mut(c as usize) {
            Some(slot) => !std::mem::replace(slot, true),
            None => wide_seen.get_or_insert_with(HashSet::new).insert(c),
        };
        if first_occurrence {
            out.push(c);
        }
    }

    contracts::check_first_occurrence_order(s, &out);
    out
}
