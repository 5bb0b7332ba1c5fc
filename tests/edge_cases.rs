use std::ops::Range;

use span_split::{
    collect_ranges, BiasedSplit, GeneralSplit, RangeSplit, Separator, SimpleSplit, SplitError,
    SplitRangesExt, Variant,
};
use test_case::test_case;

mod common;
use common::reference_ranges;

/// Ranges from every variant that accepts `separator`, asserted identical.
fn agreed_ranges(input: &str, separator: &str) -> Vec<Range<usize>> {
    let input = input.as_bytes();
    let separator = match separator.as_bytes() {
        [single] => Separator::element(*single),
        many => Separator::sequence(many).unwrap(),
    };

    let mut agreed: Option<Vec<Range<usize>>> = None;
    for variant in Variant::ALL.into_iter().filter(|v| v.supports(&separator)) {
        let ranges = collect_ranges(variant, input, separator).unwrap();
        if let Some(previous) = &agreed {
            assert_eq!(&ranges, previous, "{variant} disagrees");
        }
        agreed = Some(ranges);
    }
    agreed.unwrap()
}

#[test_case("", "," => vec![0..0] ; "empty input element")]
#[test_case("", "::" => vec![0..0] ; "empty input sequence")]
#[test_case("abc", "z" => vec![0..3] ; "no occurrence")]
#[test_case("a,,b", "," => vec![0..1, 2..2, 3..4] ; "adjacent separators")]
#[test_case("a,b,", "," => vec![0..1, 2..3, 4..4] ; "trailing separator")]
#[test_case(",a", "," => vec![0..0, 1..2] ; "leading separator")]
#[test_case(",", "," => vec![0..0, 1..1] ; "lone separator")]
#[test_case("a::b::c", "::" => vec![0..1, 3..4, 6..7] ; "subsequence separator")]
#[test_case("::::", "::" => vec![0..0, 2..2, 4..4] ; "adjacent subsequences")]
#[test_case("a:b", "::" => vec![0..3] ; "partial subsequence")]
#[test_case("x", "xyz" => vec![0..1] ; "separator longer than input")]
fn emitted_ranges(input: &str, separator: &str) -> Vec<Range<usize>> {
    let ranges = agreed_ranges(input, separator);
    assert_eq!(ranges, reference_ranges(input.as_bytes(), separator.as_bytes()));
    ranges
}

#[test_case(Variant::Simple)]
#[test_case(Variant::General)]
#[test_case(Variant::Biased)]
fn corpus_inputs_split_into_expected_fields(variant: Variant) {
    let short = collect_ranges(
        variant,
        span_split::corpus::SHORT_FIELDS.as_bytes(),
        Separator::element(span_split::corpus::SEPARATOR),
    )
    .unwrap();
    assert_eq!(short.len(), 26);
    assert_eq!(short.first(), Some(&(0..3)));
    assert_eq!(short.last(), Some(&(95..95)));

    let long = collect_ranges(
        variant,
        span_split::corpus::LONG_FIELDS.as_bytes(),
        Separator::element(span_split::corpus::SEPARATOR),
    )
    .unwrap();
    assert_eq!(long.len(), 8);
    assert!(long.iter().all(|range| range.len() == 12));
}

#[test]
fn empty_sequence_separator_is_rejected() {
    let nothing: &[u8] = b"";
    assert_eq!(Separator::sequence(nothing), Err(SplitError::EmptySeparator));
}

#[test]
fn simple_variant_rejects_subsequence() {
    let separator = Separator::sequence(b"--").unwrap();
    let err = collect_ranges(Variant::Simple, b"a--b", separator).unwrap_err();
    assert_eq!(
        err,
        SplitError::UnsupportedSeparator {
            variant: Variant::Simple
        }
    );
}

#[test]
#[should_panic(expected = "before the first successful advance()")]
fn simple_current_before_advance() {
    let split = SimpleSplit::new(b"a,b", b',');
    let _ = split.current();
}

#[test]
#[should_panic(expected = "after advance() returned false")]
fn general_current_after_exhaustion() {
    let mut split = GeneralSplit::new(b"a,b", Separator::element(b','));
    while split.advance() {}
    let _ = split.current();
}

#[test]
#[should_panic(expected = "after advance() returned false")]
fn biased_current_after_exhaustion() {
    let mut split = BiasedSplit::new(b"", Separator::sequence(b"::").unwrap());
    assert!(split.advance());
    assert!(!split.advance());
    let _ = split.current();
}

#[test]
fn exhausted_stays_exhausted() {
    let mut split = b"a,b".split_ranges(b',');
    assert_eq!(split.by_ref().count(), 2);
    for _ in 0..4 {
        assert!(!split.advance());
    }
}

#[test]
fn segments_borrow_from_source() {
    let text = String::from("key=value;flag;;end");
    let segments: Vec<&[u8]> = text.as_bytes().split_ranges(b';').segments().collect();
    assert_eq!(
        segments,
        vec![&b"key=value"[..], &b"flag"[..], &b""[..], &b"end"[..]]
    );
}

#[test]
fn independent_splitters_share_one_sequence() {
    let data: Vec<u8> = b"a,b,c".repeat(100);
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| BiasedSplit::new(&data, Separator::element(b',')).count()))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });
    assert_eq!(counts, vec![201; 4]);
}

fn colon_fields(input: &[u8]) -> Vec<&[u8]> {
    let separator = [b':', b':'];
    input
        .split_ranges_on(Separator::sequence(&separator).unwrap())
        .segments()
        .collect()
}

fn dash_fields(input: &[u8]) -> Vec<&[u8]> {
    let separator = *b"--";
    GeneralSplit::new(input, Separator::sequence(&separator).unwrap())
        .segments()
        .collect()
}

fn last_field(input: &[u8]) -> Option<&[u8]> {
    let separator = vec![b'|'];
    let mut split = BiasedSplit::new(input, Separator::sequence(&separator).unwrap());
    let mut last = None;
    while split.advance() {
        last = Some(split.current_segment());
    }
    last
}

#[test]
fn segments_outlive_a_local_separator() {
    let text = b"host::port::path".to_vec();
    assert_eq!(
        colon_fields(&text),
        vec![&b"host"[..], &b"port"[..], &b"path"[..]]
    );
    assert_eq!(dash_fields(b"a--b--"), vec![&b"a"[..], &b"b"[..], &b""[..]]);
    assert_eq!(last_field(b"x|y|zz"), Some(&b"zz"[..]));
}
