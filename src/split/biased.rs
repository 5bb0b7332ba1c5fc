//! Element-or-subsequence splitter with a pre-biased offset
//!
//! Produces the same ranges as [`GeneralSplit`](super::GeneralSplit). The
//! offset starts at minus the separator length and the separator is skipped
//! before each scan, so the stored length is the segment content alone and
//! [`current`](RangeSplit::current) is a plain `offset..offset + length`.

use std::ops::Range;

use super::RangeSplit;
use crate::cursor::Cursor;
use crate::matcher::{Separator, SliceSearch};

/// Splits on a [`Separator`] of any kind, with no subtraction when reading ranges.
#[derive(Debug, Clone)]
pub struct BiasedSplit<'a, 's, T> {
    sequence: &'a [T],
    separator: Separator<'s, T>,
    separator_len: usize,
    cursor: Cursor,
}

impl<'a, 's, T: SliceSearch> BiasedSplit<'a, 's, T> {
    /// Create a splitter over `sequence`.
    pub fn new(sequence: &'a [T], separator: Separator<'s, T>) -> Self {
        let separator_len = separator.len();
        Self {
            sequence,
            separator,
            separator_len,
            cursor: Cursor::starting_at(0usize.wrapping_sub(separator_len)),
        }
    }

    /// The separator in use.
    pub fn separator(&self) -> &Separator<'s, T> {
        &self.separator
    }
}

impl<'a, 's, T: SliceSearch> RangeSplit<'a, T> for BiasedSplit<'a, 's, T> {
    #[inline]
    fn advance(&mut self) -> bool {
        let next = self
            .cursor
            .offset()
            .wrapping_add(self.cursor.segment_length())
            .wrapping_add(self.separator_len);
        let Some(start) = self.cursor.enter(next, self.sequence.len()) else {
            return false;
        };

        let tail = &self.sequence[start..];
        self.cursor
            .record(self.separator.find_in(tail).unwrap_or(tail.len()));
        true
    }

    #[inline]
    #[track_caller]
    fn current(&self) -> Range<usize> {
        self.cursor.expect_active();
        let start = self.cursor.offset();
        start..start + self.cursor.segment_length()
    }

    fn source(&self) -> &'a [T] {
        self.sequence
    }

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}
