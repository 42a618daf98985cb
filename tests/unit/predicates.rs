//! is_empty / all: whole-sequence predicates.

use charseq::{all, is_empty};

#[test]
fn is_empty_of_empty() {
    assert!(is_empty(""));
}

#[test]
fn is_empty_of_non_empty() {
    assert!(!is_empty("daniel"));
}

#[test]
fn all_lowercase_of_lowercase() {
    assert!(all("aaa", |c| c.is_ascii_lowercase()));
}

#[test]
fn all_of_empty_is_vacuously_true() {
    assert!(all("", |c| c.is_ascii_lowercase()));
}

#[test]
fn all_lowercase_fails_on_one_uppercase() {
    assert!(!all("aaaA", |c| c.is_ascii_lowercase()));
    assert!(!all("Google", |c| c.is_ascii_lowercase()));
}
