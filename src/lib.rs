//! Haskell `Data.List`-style operations over Unicode text.
//!
//! A `&str` is treated as an ordered sequence of Unicode code points
//! (`char`). Every operation is a pure, stateless, single-pass
//! transformation over that sequence: no recursion, no shared state,
//! no I/O. The only algorithmic care required is stepping over
//! variable-width UTF-8 correctly and rebuilding substrings in
//! amortized-linear time.
//!
//! # Architecture
//!
//! | Module      | Operations                                          |
//! |-------------|-----------------------------------------------------|
//! | `basic`     | `head`, `tail`, `last`, `init`                      |
//! | `sublist`   | `take`, `drop`, `take_while`, `drop_while`, `span`  |
//! | `transform` | `reverse`, `filter`, `distinct`                     |
//! | `group`     | `group`, `group_by`                                 |
//! | `query`     | `is_empty`, `all`                                   |
//! | `contracts` | debug-mode invariant checks for the hot paths       |
//!
//! # Slicing vs copying
//!
//! Wherever a result is a contiguous region of the input, the function
//! returns a borrowed `&str` subslice tied to the input lifetime -
//! `tail`, `init`, `take`, `drop`, `take_while`, `drop_while`, `span`,
//! and the runs produced by `group`/`group_by` never allocate. Only
//! `reverse`, `filter`, and `distinct` build a new `String`, and each
//! reserves the input's byte length up front.
//!
//! # Empty input
//!
//! Operations that require a non-empty sequence (`head`, `tail`,
//! `last`, `init`) panic on `""`: an empty sequence there is a
//! programmer error, not a recoverable condition. Everything else
//! returns an empty result or `false`/vacuous `true` instead of
//! failing.
//!
//! # Usage
//!
//! ```
//! use charseq::{group_by, span, take};
//!
//! assert_eq!(take("golang", 2), "go");
//! assert_eq!(span("hello world", |c| c != ' '), ("hello", " world"));
//!
//! let date = group_by("02/08/2010", |a, b| {
//!     a.is_ascii_digit() == b.is_ascii_digit()
//! });
//! assert_eq!(date, vec!["02", "/", "08", "/", "2010"]);
//! ```

// Module declarations
mod basic;
mod contracts;
mod group;
mod query;
mod sublist;
mod transform;

// Re-exports for public API
pub use basic::{head, init, last, tail};
pub use group::{group, group_by};
pub use query::{all, is_empty};
pub use sublist::{drop, drop_while, span, take, take_while};
pub use transform::{distinct, filter, reverse};
