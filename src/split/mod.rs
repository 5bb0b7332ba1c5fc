//! Range-splitting iterators
//!
//! Three algorithms with identical output on the inputs they share:
//!
//! - [`SimpleSplit`]: single-element separators only
//! - [`GeneralSplit`]: element or subsequence separators
//! - [`BiasedSplit`]: the general algorithm with the separator skip moved
//!   ahead of the scan
//!
//! All of them follow the same pull protocol through [`RangeSplit`]: call
//! `advance`, and while it returns true read `current`. They also implement
//! [`Iterator`] over `Range<usize>`.

mod biased;
mod general;
mod simple;

pub use biased::BiasedSplit;
pub use general::GeneralSplit;
pub use simple::SimpleSplit;

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::matcher::{Separator, SliceSearch};
use crate::SplitError;

/// Pull-style cursor contract shared by every splitter.
pub trait RangeSplit<'a, T: 'a> {
    /// Move to the next segment. Returns false once no segments remain, and
    /// keeps returning false afterwards.
    fn advance(&mut self) -> bool;

    /// Half-open range of the current segment within [`source`](Self::source).
    ///
    /// # Panics
    ///
    /// If called before the first `advance` that returned true, or after
    /// `advance` returned false.
    fn current(&self) -> Range<usize>;

    /// The borrowed sequence being split.
    fn source(&self) -> &'a [T];

    /// Iteration state.
    fn cursor(&self) -> &Cursor;

    /// The current segment's elements, borrowed from the source.
    #[track_caller]
    fn current_segment(&self) -> &'a [T] {
        &self.source()[self.current()]
    }

    /// Adapt into an iterator over segment slices.
    fn segments(self) -> Segments<'a, T, Self>
    where
        Self: Sized,
    {
        Segments {
            split: self,
            _source: PhantomData,
        }
    }
}

macro_rules! impl_range_iterator {
    ($($split:ident<$($lt:lifetime),+>),* $(,)?) => {
        $(
            impl<$($lt,)+ T: SliceSearch> Iterator for $split<$($lt,)+ T> {
                type Item = Range<usize>;

                #[inline]
                fn next(&mut self) -> Option<Range<usize>> {
                    if RangeSplit::advance(self) {
                        Some(RangeSplit::current(self))
                    } else {
                        None
                    }
                }
            }

            impl<$($lt,)+ T: SliceSearch> FusedIterator for $split<$($lt,)+ T> {}
        )*
    };
}

impl_range_iterator!(SimpleSplit<'a>, GeneralSplit<'a, 's>, BiasedSplit<'a, 's>);

/// Iterator over the segments of a [`RangeSplit`] as borrowed slices.
#[derive(Debug, Clone)]
pub struct Segments<'a, T, S> {
    split: S,
    _source: PhantomData<&'a [T]>,
}

impl<'a, T: 'a, S: RangeSplit<'a, T>> Segments<'a, T, S> {
    /// Recover the underlying splitter.
    pub fn into_inner(self) -> S {
        self.split
    }
}

impl<'a, T: 'a, S: RangeSplit<'a, T>> Iterator for Segments<'a, T, S> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.split.advance() {
            Some(self.split.current_segment())
        } else {
            None
        }
    }
}

impl<'a, T: 'a, S: RangeSplit<'a, T>> FusedIterator for Segments<'a, T, S> {}

/// Range splitting directly on slices.
pub trait SplitRangesExt<T> {
    /// Split on a single element with [`SimpleSplit`].
    fn split_ranges(&self, separator: T) -> SimpleSplit<'_, T>;

    /// Split on any separator with [`BiasedSplit`].
    fn split_ranges_on<'s>(&self, separator: Separator<'s, T>) -> BiasedSplit<'_, 's, T>;
}

impl<T: SliceSearch> SplitRangesExt<T> for [T] {
    fn split_ranges(&self, separator: T) -> SimpleSplit<'_, T> {
        SimpleSplit::new(self, separator)
    }

    fn split_ranges_on<'s>(&self, separator: Separator<'s, T>) -> BiasedSplit<'_, 's, T> {
        BiasedSplit::new(self, separator)
    }
}

/// Selects one of the splitting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Variant {
    /// [`SimpleSplit`]
    Simple,
    /// [`GeneralSplit`]
    General,
    /// [`BiasedSplit`]
    Biased,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Simple, Variant::General, Variant::Biased];

    /// Lowercase name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::General => "general",
            Variant::Biased => "biased",
        }
    }

    /// Whether this variant accepts `separator`.
    pub fn supports<T>(self, separator: &Separator<'_, T>) -> bool {
        self != Variant::Simple || separator.is_element()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SplitError::UnknownVariant(s.to_string()))
    }
}

/// Run `variant` over `sequence` and collect every emitted range.
pub fn collect_ranges<T: SliceSearch>(
    variant: Variant,
    sequence: &[T],
    separator: Separator<'_, T>,
) -> Result<Vec<Range<usize>>, SplitError> {
    let ranges = match variant {
        Variant::Simple => {
            let element = separator
                .into_element()
                .ok_or(SplitError::UnsupportedSeparator { variant })?;
            SimpleSplit::new(sequence, element).collect()
        }
        Variant::General => GeneralSplit::new(sequence, separator).collect(),
        Variant::Biased => BiasedSplit::new(sequence, separator).collect(),
    };
    Ok(ranges)
}
