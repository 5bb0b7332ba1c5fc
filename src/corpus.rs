//! Built-in inputs for comparing the splitters

/// Separator used by the built-in test cases.
pub const SEPARATOR: u8 = b',';

/// Many short fields with a trailing separator.
pub const SHORT_FIELDS: &str =
    "art,arst,ar,str,st,rst,ar,st,arst,ars,t,arst,arst,art,arst,ar,str,st,rst,ar,st,arst,ars,t,arst,";

/// Few long fields, no trailing separator.
pub const LONG_FIELDS: &str = "arstarstarst,arstarstarst,arstarstarst,arstarstarst,arstarstarst,arstarstarst,arstarstarst,arstarstarst";

/// Test cases by index.
pub const TEST_CASES: [&str; 2] = [SHORT_FIELDS, LONG_FIELDS];

/// Input for test case `index`, if it exists.
pub fn test_case(index: usize) -> Option<&'static str> {
    TEST_CASES.get(index).copied()
}
