use std::ops::Range;

/// Straightforward scan used as the oracle for the splitters.
///
/// Matches `separator` leftmost-first and resumes after each match, so
/// occurrences never overlap.
pub fn reference_ranges<T: PartialEq>(sequence: &[T], separator: &[T]) -> Vec<Range<usize>> {
    assert!(!separator.is_empty(), "oracle needs a non-empty separator");

    let mut ranges = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index + separator.len() <= sequence.len() {
        if &sequence[index..index + separator.len()] == separator {
            ranges.push(start..index);
            index += separator.len();
            start = index;
        } else {
            index += 1;
        }
    }
    ranges.push(start..sequence.len());
    ranges
}

/// Rebuild the input from its segments and the separator between them.
#[allow(dead_code)]
pub fn rejoin<T: Clone>(sequence: &[T], ranges: &[Range<usize>], separator: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(sequence.len());
    for (i, range) in ranges.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(separator);
        }
        out.extend_from_slice(&sequence[range.clone()]);
    }
    out
}
