//! Element-or-subsequence splitter
//!
//! The stored segment length includes the trailing separator, so moving to
//! the next scan start is a single addition. Reading the current range
//! subtracts the separator back out.

use std::ops::Range;

use super::RangeSplit;
use crate::cursor::Cursor;
use crate::matcher::{Separator, SliceSearch};

/// Splits on a [`Separator`] of any kind.
#[derive(Debug, Clone)]
pub struct GeneralSplit<'a, 's, T> {
    sequence: &'a [T],
    separator: Separator<'s, T>,
    separator_len: usize,
    cursor: Cursor,
}

impl<'a, 's, T: SliceSearch> GeneralSplit<'a, 's, T> {
    /// Create a splitter over `sequence`.
    pub fn new(sequence: &'a [T], separator: Separator<'s, T>) -> Self {
        Self {
            sequence,
            separator_len: separator.len(),
            separator,
            cursor: Cursor::starting_at(0),
        }
    }

    /// The separator in use.
    pub fn separator(&self) -> &Separator<'s, T> {
        &self.separator
    }
}

impl<'a, 's, T: SliceSearch> RangeSplit<'a, T> for GeneralSplit<'a, 's, T> {
    #[inline]
    fn advance(&mut self) -> bool {
        let next = self.cursor.offset() + self.cursor.segment_length();
        let Some(start) = self.cursor.enter(next, self.sequence.len()) else {
            return false;
        };

        let tail = &self.sequence[start..];
        let content = self.separator.find_in(tail).unwrap_or(tail.len());
        self.cursor.record(content + self.separator_len);
        true
    }

    #[inline]
    #[track_caller]
    fn current(&self) -> Range<usize> {
        self.cursor.expect_active();
        let start = self.cursor.offset();
        start..start + self.cursor.segment_length() - self.separator_len
    }

    fn source(&self) -> &'a [T] {
        self.sequence
    }

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}
