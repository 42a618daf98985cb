//! Runtime contracts for the crate's structural invariants.
//!
//! These are `debug_assert!`-based checks called from the code that
//! produces the result being checked:
//!
//! 1. **Zero-cost in release builds** - every check compiles out.
//! 2. **Early failure during development** - a violated invariant
//!    panics at the producing call site, not in some later consumer.
//!
//! | Contract                        | Called from | Invariant                          |
//! |---------------------------------|-------------|------------------------------------|
//! | `check_split_reconstructs`      | `span`      | halves are adjacent and cover `s`  |
//! | `check_runs_cover_input`        | `group_by`  | runs non-empty, concat to `s`      |
//! | `check_first_occurrence_order`  | `distinct`  | output = first-occurrence sequence |

use std::collections::HashSet;

/// The two halves of a split must be adjacent regions covering the
/// whole input.
pub(crate) fn check_split_reconstructs(input: &str, prefix: &str, suffix: &str) {
    debug_assert_eq!(
        prefix.len() + suffix.len(),
        input.len(),
        "split halves do not cover the input"
    );
    debug_assert!(
        input.starts_with(prefix) && input.ends_with(suffix),
        "split halves are not the input's own prefix and suffix"
    );
}

/// Group output must be a partition of the input into non-empty runs.
pub(crate) fn check_runs_cover_input(input: &str, runs: &[&str]) {
    debug_assert!(
        runs.iter().all(|run| !run.is_empty()),
        "group produced an empty run"
    );
    debug_assert_eq!(
        runs.concat(),
        input,
        "group runs do not concatenate to the input"
    );
}

/// Distinct output must be exactly the input's first occurrences, in
/// input order.
pub(crate) fn check_first_occurrence_order(input: &str, output: &str) {
    debug_assert!(
        first_occurrences(output).eq(output.chars()),
        "distinct output contains duplicate code points"
    );
    debug_assert!(
        first_occurrences(input).eq(output.chars()),
        "distinct output is not the input's first-occurrence sequence"
    );
}

/// Naive oracle: first occurrence of each code point, in order.
fn first_occurrences(s: &str) -> impl Iterator<Item = char> + '_ {
    let mut seen = HashSet::new();
    s.chars().filter(move |&c| seen.insert(c))
}
