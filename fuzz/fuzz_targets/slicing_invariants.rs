//! Slicing under adversarial UTF-8.
//!
//! Every slicing operation hands back subslices of its input, which
//! means a miscomputed byte offset inside a multi-byte code point
//! panics at the slice site. The fuzzer's job is to find a string and
//! a count for which any offset lands mid-code-point; none should
//! exist.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, u16)| {
    let (s, n) = input;
    let n = n as usize;

    // take/drop must reconstruct the input at every split count.
    let rebuilt = format!("{}{}", charseq::take(&s, n), charseq::drop(&s, n));
    assert_eq!(rebuilt, s);

    // span must agree with its two projections, for a predicate that
    // distinguishes code point widths.
    let wide = |c: char| c.len_utf8() > 1;
    let (prefix, rest) = charseq::span(&s, wide);
    assert_eq!(prefix, charseq::take_while(&s, wide));
    assert_eq!(rest, charseq::drop_while(&s, wide));

    // reverse must survive a round trip.
    assert_eq!(charseq::reverse(&charseq::reverse(&s)), s);

    // The non-empty accessors must decompose losslessly.
    if !charseq::is_empty(&s) {
        assert_eq!(format!("{}{}", charseq::head(&s), charseq::tail(&s)), s);
        assert_eq!(format!("{}{}", charseq::init(&s), charseq::last(&s)), s);
    }
});
