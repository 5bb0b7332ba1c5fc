//! # Zero-allocation range splitting
//!
//! Splits a borrowed slice into segments delimited by a separator, yielding
//! half-open index ranges into the original slice instead of copies.
//!
//! ## Algorithms
//!
//! 1. **Simple split**: single-element separator, offset starts one before the slice
//! 2. **General split**: element or subsequence separator, separator length folded
//!    into the stored segment length
//! 3. **Biased split**: same output as the general split, offset pre-biased by the
//!    separator length so reading the current range needs no subtraction
//!
//! Every input is well defined: an empty slice yields `[0..0]`, a slice without
//! the separator yields one range covering it, and leading, trailing or adjacent
//! separators yield empty ranges.
//!
//! ## Usage Example
//!
//! ```
//! use span_split::{BiasedSplit, RangeSplit, Separator};
//!
//! let text = b"a::b::c";
//! let separator = Separator::sequence(b"::").unwrap();
//! let ranges: Vec<_> = BiasedSplit::new(text, separator).collect();
//! assert_eq!(ranges, vec![0..1, 3..4, 6..7]);
//!
//! let mut split = BiasedSplit::new(b"x,y", Separator::element(b','));
//! while split.advance() {
//!     assert_eq!(split.current_segment().len(), 1);
//! }
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod matcher;  // Separator matching strategies
pub mod cursor;   // Shared iteration state
pub mod split;    // The three range-splitting iterators
pub mod space;    // Allocation accounting
pub mod corpus;   // Built-in comparison inputs
pub mod compare;  // Variant comparison driver

pub use compare::{run_comparison, CompareConfig, ComparisonReport, Measurement};
pub use cursor::Cursor;
pub use matcher::{Separator, SliceSearch};
pub use split::{
    collect_ranges, BiasedSplit, GeneralSplit, RangeSplit, Segments, SimpleSplit,
    SplitRangesExt, Variant,
};

use thiserror::Error;

/// Errors reported while configuring a split or a comparison run.
///
/// Iteration itself never fails; misuse of the cursor protocol panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// A subsequence separator with no elements would never advance
    #[error("separator sequence must contain at least one element")]
    EmptySeparator,

    /// The selected variant cannot split on the supplied separator kind
    #[error("variant `{variant}` only supports single-element separators")]
    UnsupportedSeparator {
        /// Variant that rejected the separator
        variant: Variant,
    },

    /// Unrecognised variant name
    #[error("unknown split variant `{0}` (expected simple, general or biased)")]
    UnknownVariant(String),

    /// Comparison driver settings are invalid
    #[error("invalid comparison configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SplitError::EmptySeparator.to_string(),
            "separator sequence must contain at least one element"
        );
        let err = SplitError::UnsupportedSeparator {
            variant: Variant::Simple,
        };
        assert_eq!(
            err.to_string(),
            "variant `simple` only supports single-element separators"
        );
    }

    #[test]
    fn test_crate_root_reexports_work_together() {
        let ranges: Vec<_> = b"a,b".split_ranges(b',').collect();
        assert_eq!(ranges, vec![0..1, 2..3]);
    }
}
