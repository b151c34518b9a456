use std::cmp::Ordering;
use std::fmt;

use super::Cursor;
use crate::order::StrictWeakOrder;

/// Offsets of both cursors of a [`CursorPair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergePosition {
    /// Elements consumed from the first sequence.
    pub first: usize,
    /// Elements consumed from the second sequence.
    pub second: usize,
}

/// Two cursors merged in lockstep.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::cursor::CursorPair;
/// use setwise::order::Natural;
///
/// let mut pair = CursorPair::new([1, 3].into_iter(), [2].into_iter());
/// assert_eq!(pair.compare_heads(&mut Natural), Some(Ordering::Less));
/// pair.advance_both();
/// assert_eq!(pair.compare_heads(&mut Natural), None);
/// assert!(pair.is_second_end());
/// ```
pub struct CursorPair<A: Iterator, B: Iterator> {
    first: Cursor<A>,
    second: Cursor<B>,
}

impl<A: Iterator, B: Iterator> CursorPair<A, B> {
    /// Creates a pair positioned at the start of both sequences.
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self {
            first: Cursor::new(first),
            second: Cursor::new(second),
        }
    }

    /// Returns the cursor into the first sequence.
    #[inline]
    pub const fn first(&self) -> &Cursor<A> {
        &self.first
    }

    /// Returns the cursor into the second sequence.
    #[inline]
    pub const fn second(&self) -> &Cursor<B> {
        &self.second
    }

    /// Returns `true` once the first sequence is exhausted.
    #[inline]
    pub const fn is_first_end(&self) -> bool {
        self.first.is_end()
    }

    /// Returns `true` once the second sequence is exhausted.
    #[inline]
    pub const fn is_second_end(&self) -> bool {
        self.second.is_end()
    }

    /// Returns `true` once both sequences are exhausted.
    #[inline]
    pub const fn is_both_end(&self) -> bool {
        self.first.is_end() && self.second.is_end()
    }

    /// Returns `true` once either sequence is exhausted.
    #[inline]
    pub const fn is_either_end(&self) -> bool {
        self.first.is_end() || self.second.is_end()
    }

    /// Compares the two current elements, or returns `None` if either
    /// cursor is at its end.
    #[inline]
    pub fn compare_heads<O>(&self, order: &mut O) -> Option<Ordering>
    where
        O: StrictWeakOrder<A::Item, B::Item>,
    {
        let left = self.first.head()?;
        let right = self.second.head()?;
        Some(order.compare(left, right))
    }

    /// Advances the first cursor, returning the element it was on.
    #[inline]
    pub fn advance_first(&mut self) -> Option<A::Item> {
        debug_assert!(!self.first.is_end(), "advanced an exhausted first cursor");
        self.first.advance()
    }

    /// Advances the second cursor, returning the element it was on.
    #[inline]
    pub fn advance_second(&mut self) -> Option<B::Item> {
        debug_assert!(!self.second.is_end(), "advanced an exhausted second cursor");
        self.second.advance()
    }

    /// Advances both cursors past a matched pair, returning the first
    /// sequence's element.
    #[inline]
    pub fn advance_both(&mut self) -> Option<A::Item> {
        let matched = self.advance_first();
        self.advance_second();
        matched
    }

    /// Returns the offsets of both cursors.
    #[inline]
    pub const fn position(&self) -> MergePosition {
        MergePosition {
            first: self.first.offset(),
            second: self.second.offset(),
        }
    }
}

impl<A, B> Clone for CursorPair<A, B>
where
    A: Iterator + Clone,
    A::Item: Clone,
    B: Iterator + Clone,
    B::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<A, B> fmt::Debug for CursorPair<A, B>
where
    A: Iterator,
    A::Item: fmt::Debug,
    B: Iterator,
    B::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CursorPair")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
