//! Single-element splitter
//!
//! The cursor starts one position before the slice. Each step skips the
//! previous segment plus its one-element separator, then scans the tail.

use std::ops::Range;

use super::RangeSplit;
use crate::cursor::Cursor;
use crate::matcher::SliceSearch;

/// Splits on a single separator element.
#[derive(Debug, Clone)]
pub struct SimpleSplit<'a, T> {
    sequence: &'a [T],
    separator: T,
    cursor: Cursor,
}

impl<'a, T: SliceSearch> SimpleSplit<'a, T> {
    /// Create a splitter over `sequence` separated by `separator`.
    pub fn new(sequence: &'a [T], separator: T) -> Self {
        Self {
            sequence,
            separator,
            cursor: Cursor::starting_at(0usize.wrapping_sub(1)),
        }
    }

    /// The separator element.
    pub fn separator(&self) -> &T {
        &self.separator
    }
}

impl<'a, T: SliceSearch> RangeSplit<'a, T> for SimpleSplit<'a, T> {
    #[inline]
    fn advance(&mut self) -> bool {
        let next = self
            .cursor
            .offset()
            .wrapping_add(self.cursor.segment_length())
            .wrapping_add(1);
        let Some(start) = self.cursor.enter(next, self.sequence.len()) else {
            return false;
        };

        let tail = &self.sequence[start..];
        let length = T::find_element(tail, &self.separator).unwrap_or(tail.len());
        self.cursor.record(length);
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
