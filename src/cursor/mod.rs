//! Cursor pairs: the shared merge state of every set operation.
//!
//! A [`Cursor`] is a movable position in one input sequence. It holds the
//! element at the current position (pulled eagerly when the cursor is
//! created or advanced), the rest of the sequence, and the number of elements
//! consumed so far. Once the sequence is exhausted the cursor never pulls
//! from it again, so inputs do not need to be fused.
//!
//! A [`CursorPair`] is the `(position1, end1, position2, end2)` state that all
//! four engines share. Engines differ only in how they advance it.
//!
//! # Positions
//!
//! [`MergePosition`] records how many elements each cursor has consumed. Two
//! positions obtained from the same inputs are at the same place iff their
//! offsets match; engines use it to implement `PartialEq`.

mod pair;

pub use pair::{CursorPair, MergePosition};

use std::fmt;

/// A position in a single input sequence.
///
/// # Examples
///
/// ```rust
/// use setwise::cursor::Cursor;
///
/// let mut cursor = Cursor::new([1, 2].into_iter());
/// assert_eq!(cursor.head(), Some(&1));
/// assert_eq!(cursor.advance(), Some(1));
/// assert_eq!(cursor.advance(), Some(2));
/// assert!(cursor.is_end());
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.offset(), 2);
/// ```
pub struct Cursor<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
    offset: usize,
}

impl<I: Iterator> Cursor<I> {
    /// Creates a cursor at the start of `iter`, pulling its first element.
    #[inline]
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self {
            iter,
            head,
            offset: 0,
        }
    }

    /// Returns the element at the current position, or `None` at the end.
    #[inline]
    pub const fn head(&self) -> Option<&I::Item> {
        self.head.as_ref()
    }

    /// Returns `true` once the sequence is exhausted.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements consumed so far.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Moves forward one position, returning the element that was current.
    ///
    /// At the end this returns `None` and leaves the underlying iterator
    /// untouched.
    #[inline]
    pub fn advance(&mut self) -> Option<I::Item> {
        let current = self.head.take()?;
        self.offset += 1;
        self.head = self.iter.next();
        Some(current)
    }

    /// Returns bounds on the number of elements left, the current one included.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        if self.head.is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|upper| upper.checked_add(1)),
        )
    }
}

impl<I> Clone for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            head: self.head.clone(),
            offset: self.offset,
        }
    }
}

impl<I> fmt::Debug for Cursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("head", &self.head)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_new_on_empty_is_end() {
        let cursor = Cursor::new(std::iter::empty::<i32>());
        assert!(cursor.is_end());
        assert_eq!(cursor.head(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_size_hint_counts_head() {
        let cursor = Cursor::new(vec![1, 2, 3].into_iter());
        assert_eq!(cursor.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn test_exhausted_cursor_never_pulls_again() {
        let pulls = Cell::new(0);
        let source = std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            None::<i32>
        });
        let mut cursor = Cursor::new(source);
        assert_eq!(pulls.get(), 1);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(pulls.get(), 1);
        assert_eq!(cursor.offset(), 0);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original = Cursor::new([10, 20, 30].iter());
        original.advance();
        let mut copy = original.clone();
        assert_eq!(copy.advance(), Some(&20));
        assert_eq!(copy.advance(), Some(&30));
        assert_eq!(original.head(), Some(&&20));
        assert_eq!(original.offset(), 1);
    }
}
