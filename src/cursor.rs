//! Iteration state shared by every splitter
//!
//! `offset` marks the start of the most recently produced segment and
//! `segment_length` is whatever the owning variant stores to reach the next
//! scan start. Variants that start "before" the slice (at −1, or at minus the
//! separator length) store that as a wrapped `usize`; all offset updates use
//! wrapping arithmetic so the first step lands back on 0.

/// Lifecycle of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Constructed, not yet advanced.
    Pending,
    /// A segment is available.
    Active,
    /// Terminal; no further segments.
    Exhausted,
}

/// Offset and segment-length state driving one splitter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
    segment_length: usize,
    phase: Phase,
}

impl Cursor {
    /// Fresh cursor at `offset` with an empty segment; `offset` may be wrapped.
    #[inline]
    pub(crate) fn starting_at(offset: usize) -> Self {
        Self {
            offset,
            segment_length: 0,
            phase: Phase::Pending,
        }
    }

    /// Move to `next_start` if it lies within a sequence of `len` elements.
    ///
    /// Returns the new offset, or `None` once the cursor is exhausted. After
    /// the first `None` every later call also returns `None`.
    #[inline]
    pub(crate) fn enter(&mut self, next_start: usize, len: usize) -> Option<usize> {
        if self.phase == Phase::Exhausted || next_start > len {
            self.phase = Phase::Exhausted;
            return None;
        }
        self.offset = next_start;
        self.phase = Phase::Active;
        Some(next_start)
    }

    /// Record the stored length for the segment just entered.
    #[inline]
    pub(crate) fn record(&mut self, segment_length: usize) {
        self.segment_length = segment_length;
    }

    /// Panic unless a segment is currently available.
    #[inline]
    #[track_caller]
    pub(crate) fn expect_active(&self) {
        assert!(
            self.phase == Phase::Active,
            "current() called {}",
            match self.phase {
                Phase::Pending => "before the first successful advance()",
                _ => "after advance() returned false",
            }
        );
    }

    /// Start of the current segment (possibly wrapped before the first advance).
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Stored segment length, as interpreted by the owning variant.
    #[inline]
    pub fn segment_length(&self) -> usize {
        self.segment_length
    }

    /// Whether a segment is currently available.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Whether the cursor has reached its terminal state.
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_start_lands_on_zero() {
        let mut cursor = Cursor::starting_at(0usize.wrapping_sub(1));
        let next = cursor.offset().wrapping_add(cursor.segment_length()).wrapping_add(1);
        assert_eq!(cursor.enter(next, 3), Some(0));
        assert!(cursor.is_active());
    }

    #[test]
    fn exhaustion_is_terminal() {
        let mut cursor = Cursor::starting_at(0);
        assert_eq!(cursor.enter(5, 4), None);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.enter(0, 4), None);
        assert!(!cursor.is_active());
    }

    #[test]
    fn start_equal_to_length_is_valid() {
        let mut cursor = Cursor::starting_at(0);
        assert_eq!(cursor.enter(4, 4), Some(4));
    }

    #[test]
    #[should_panic(expected = "before the first successful advance()")]
    fn pending_cursor_has_no_segment() {
        Cursor::starting_at(0).expect_active();
    }

    #[test]
    #[should_panic(expected = "after advance() returned false")]
    fn exhausted_cursor_has_no_segment() {
        let mut cursor = Cursor::starting_at(0);
        cursor.enter(1, 0);
        cursor.expect_active();
    }
}
