//! Separator matching
//!
//! A [`Separator`] is either one element or a non-empty run of elements. It
//! answers a single query: where does the next occurrence start inside a tail
//! slice. Absence is an ordinary outcome, not an error.

mod search;

pub use search::SliceSearch;

use crate::SplitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind<'s, T> {
    Element(T),
    Sequence(&'s [T]),
}

/// Separator value for the general and biased splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator<'s, T> {
    kind: Kind<'s, T>,
}

impl<'s, T> Separator<'s, T> {
    /// Split on every element equal to `value`.
    pub fn element(value: T) -> Self {
        Self {
            kind: Kind::Element(value),
        }
    }

    /// Split on every leftmost, non-overlapping occurrence of `elements`.
    ///
    /// An empty run is rejected: it would match at every offset without
    /// consuming anything.
    pub fn sequence(elements: &'s [T]) -> Result<Self, SplitError> {
        if elements.is_empty() {
            tracing::debug!("rejecting empty sequence separator");
            return Err(SplitError::EmptySeparator);
        }
        Ok(Self {
            kind: Kind::Sequence(elements),
        })
    }

    /// Number of elements consumed by one occurrence.
    #[inline]
    pub fn len(&self) -> usize {
        match self.kind {
            Kind::Element(_) => 1,
            Kind::Sequence(elements) => elements.len(),
        }
    }

    /// Always false: [`sequence`](Self::sequence) rejects empty runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether this is a single-element separator.
    pub fn is_element(&self) -> bool {
        matches!(self.kind, Kind::Element(_))
    }

    /// Consume the separator, returning the element for single-element separators.
    pub fn into_element(self) -> Option<T> {
        match self.kind {
            Kind::Element(value) => Some(value),
            Kind::Sequence(_) => None,
        }
    }
}

impl<'s, T: SliceSearch> Separator<'s, T> {
    /// Offset within `tail` of the first occurrence, or `None`.
    #[inline]
    pub fn find_in(&self, tail: &[T]) -> Option<usize> {
        match self.kind {
            Kind::Element(ref value) => T::find_element(tail, value),
            Kind::Sequence(elements) => T::find_sequence(tail, elements),
        }
    }
}
