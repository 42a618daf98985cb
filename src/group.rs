//! Splitting a sequence into maximal runs.
//!
//! `group_by` follows the Haskell semantics: each run's first code
//! point is the **leader**, and every later candidate is compared
//! against the leader, not against its immediate predecessor. With an
//! equivalence relation the two readings agree; with an arbitrary
//! relation they do not, and the leader reading is the one `groupBy`
//! is defined by (`span (same x) xs`).
//!
//! Runs are borrowed subslices of the input. Byte offsets are tracked
//! during the scan so each run is one slice, never a rebuilt string.

use crate::contracts;

/// Splits `s` into maximal runs of equal code points.
///
/// The runs concatenated in order equal `s`, and every run is
/// non-empty.
///
/// Haskell: `group :: Eq a => [a] -> [[a]]`
///
/// # Examples
///
/// ```
/// assert_eq!(charseq::group("aaabbbccd"), vec!["aaa", "bbb", "cc", "d"]);
/// assert_eq!(charseq::group("voodoo"), vec!["v", "oo", "d", "oo"]);
/// assert!(charseq::group("").is_empty());
/// ```
pub fn group(s: &str) -> Vec<&str> {
    group_by(s, |a, b| a == b)
}

/// Splits `s` into maximal runs of code points related to the run's
/// leader by `same`.
///
/// Haskell: `groupBy :: (a -> a -> Bool) -> [a] -> [[a]]`
///
/// # Examples
///
/// ```
/// let date = charseq::group_by("02/08/2010", |a, b| {
///     a.is_ascii_digit() == b.is_ascii_digit()
/// });
/// assert_eq!(date, vec!["02", "/", "08", "/", "2010"]);
/// ```
pub fn group_by<P>(s: &str, mut same: P) -> Vec<&str>
where
    P: FnMut(char, char) -> bool,
{
    let mut runs = Vec::new();
    let mut run_start = 0;
    let mut leader = None;

    for (offset, c) in s.char_indices() {
        match leader {
            None => leader = Some(c),
            Some(lead) => {
                if !same(lead, c) {
                    runs.push(&s[run_start..offset]);
                    run_start = offset;
                    leader = Some(c);
                }
            }
        }
    }
    if leader.is_some() {
        runs.push(&s[run_start..]);
    }

    contracts::check_runs_cover_input(s, &runs);
    runs
}
