//! Run detection and dedup under adversarial UTF-8.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|s: String| {
    // group partitions the input into non-empty uniform runs.
    let runs = charseq::group(&s);
    assert_eq!(runs.concat(), s);
    for run in &runs {
        assert!(!run.is_empty());
        let lead = charseq::head(run);
        assert!(charseq::all(run, |c| c == lead));
    }

    // group_by with a class predicate still partitions.
    let by_class = charseq::group_by(&s, |a, b| a.is_ascii() == b.is_ascii());
    assert_eq!(by_class.concat(), s);

    // distinct output is duplicate-free and covers the input's code
    // point set.
    let deduped = charseq::distinct(&s);
    let mut seen = HashSet::new();
    assert!(deduped.chars().all(|c| seen.insert(c)));
    assert_eq!(seen, s.chars().collect::<HashSet<char>>());
});
