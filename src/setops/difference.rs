//! Difference engine: elements of the first sequence with no match in the second.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{CursorPair, MergePosition};
use crate::error::PositionError;
use crate::order::StrictWeakOrder;

use super::view::MergeJoin;

/// Lazy difference `A − B` of two sorted sequences.
///
/// Yields the elements of `A` that have no equivalent in `B`, in `A`'s
/// order. Each element of `B` cancels at most one element of `A`, so
/// `[1, 1]` minus `[1]` is `[1]`. The sequence ends exactly when `A` is
/// exhausted.
///
/// Created by [`difference`](super::difference) and friends, or by
/// [`SortedIterExt::set_difference`](super::SortedIterExt::set_difference).
///
/// # Examples
///
/// ```rust
/// use setwise::order::Natural;
/// use setwise::setops::Difference;
///
/// let mut engine = Difference::new([1, 2, 4, 6].into_iter(), [2, 3, 4, 5].into_iter(), Natural);
/// assert_eq!(engine.current(), Some(&1));
/// engine.advance();
/// assert_eq!(engine.current(), Some(&6));
/// engine.advance();
/// assert!(engine.is_end());
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Difference<A: Iterator, B: Iterator, O> {
    cursors: CursorPair<A, B>,
    order: O,
}

impl<A, B, O> Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    const NAME: &'static str = "Difference";

    /// Creates the engine and moves it to its first output element.
    pub fn new(first: A, second: B, order: O) -> Self {
        let mut engine = Self {
            cursors: CursorPair::new(first, second),
            order,
        };
        engine.satisfy();
        engine
    }

    /// Skips matched and smaller elements until the first cursor sits on an
    /// element with no equivalent in the second sequence, or at its end.
    fn satisfy(&mut self) {
        loop {
            match self.cursors.compare_heads(&mut self.order) {
                // Either the first sequence is done, or the second one is and
                // the rest of the first passes through unchanged.
                None | Some(Ordering::Less) => break,
                Some(Ordering::Equal) => {
                    self.cursors.advance_both();
                }
                Some(Ordering::Greater) => {
                    self.cursors.advance_second();
                }
            }
        }
        if self.cursors.is_first_end() {
            trace_event!(operation = "difference", position = ?self.cursors.position(), "reached end");
        }
    }

    /// Returns the current element, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<&A::Item> {
        self.cursors.first().head()
    }

    /// Returns the current element.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::PastTheEnd`] at the end.
    #[inline]
    pub fn try_current(&self) -> Result<&A::Item, PositionError> {
        self.current()
            .ok_or(PositionError::past_the_end(Self::NAME, "current"))
    }

    /// Returns `true` once the first sequence is exhausted.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursors.is_first_end()
    }

    /// Moves to the next output element.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::PastTheEnd`] if the engine is already at its end.
    pub fn try_advance(&mut self) -> Result<(), PositionError> {
        if self.is_end() {
            return Err(PositionError::past_the_end(Self::NAME, "advance"));
        }
        self.cursors.advance_first();
        self.satisfy();
        Ok(())
    }

    /// Moves to the next output element.
    ///
    /// # Panics
    ///
    /// Panics if the engine is already at its end.
    pub fn advance(&mut self) {
        if let Err(error) = self.try_advance() {
            panic!("{error}");
        }
    }

    /// Returns how far each input has been consumed.
    #[inline]
    pub fn position(&self) -> MergePosition {
        self.cursors.position()
    }
}

impl<A, B, O> Iterator for Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.is_end() {
            return None;
        }
        let element = self.cursors.advance_first();
        self.satisfy();
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursors.first().size_hint().1)
    }
}

impl<A, B, O> FusedIterator for Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
}

impl<A, B, O> MergeJoin for Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    type First = A;
    type Second = B;
    type Order = O;

    #[inline]
    fn start(first: A, second: B, order: O) -> Self {
        Self::new(first, second, order)
    }
}

impl<A, B, O> Clone for Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    CursorPair<A, B>: Clone,
    O: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursors: self.cursors.clone(),
            order: self.order.clone(),
        }
    }
}

/// Positions are equal when the first cursors have consumed the same number
/// of elements.
impl<A: Iterator, B: Iterator, O> PartialEq for Difference<A, B, O> {
    fn eq(&self, other: &Self) -> bool {
        self.cursors.first().offset() == other.cursors.first().offset()
    }
}

impl<A, B, O> fmt::Debug for Difference<A, B, O>
where
    A: Iterator,
    B: Iterator,
    CursorPair<A, B>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Difference")
            .field("cursors", &self.cursors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Natural;
    use rstest::rstest;

    fn run(first: &[i32], second: &[i32]) -> Vec<i32> {
        Difference::new(first.iter().copied(), second.iter().copied(), Natural).collect()
    }

    #[rstest]
    #[case(&[1, 2, 4, 6], &[2, 3, 4, 5], &[1, 6])]
    #[case(&[1, 2, 2, 4, 6], &[2, 3, 4, 4, 5], &[1, 2, 6])]
    #[case(&[1, 2, 3], &[], &[1, 2, 3])]
    #[case(&[], &[1, 2, 3], &[])]
    #[case(&[1, 2, 3], &[1, 2, 3], &[])]
    #[case(&[5, 6], &[1, 2], &[5, 6])]
    #[case(&[1, 1, 1], &[1], &[1, 1])]
    fn test_difference_cases(
        #[case] first: &[i32],
        #[case] second: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(run(first, second), expected);
    }

    #[rstest]
    fn test_positional_interface_walks_output() {
        let mut engine = Difference::new([1, 3, 5].into_iter(), [3].into_iter(), Natural);
        assert_eq!(engine.try_current(), Ok(&1));
        engine.advance();
        assert_eq!(engine.current(), Some(&5));
        assert_eq!(engine.try_advance(), Ok(()));
        assert!(engine.is_end());
        assert_eq!(
            engine.try_current(),
            Err(PositionError::past_the_end("Difference", "current"))
        );
        assert_eq!(
            engine.try_advance(),
            Err(PositionError::past_the_end("Difference", "advance"))
        );
    }

    #[rstest]
    #[should_panic(expected = "Difference::advance: position is past the end")]
    fn test_advance_past_end_panics() {
        let mut engine = Difference::new(std::iter::empty::<i32>(), [1].into_iter(), Natural);
        engine.advance();
    }

    #[rstest]
    fn test_fused_after_end() {
        let mut engine = Difference::new([1].into_iter(), std::iter::empty::<i32>(), Natural);
        assert_eq!(engine.next(), Some(1));
        assert_eq!(engine.next(), None);
        assert_eq!(engine.next(), None);
    }

    #[rstest]
    fn test_positions_compare_by_first_cursor() {
        let first = [1, 2, 3];
        let second = [2];
        let engine = Difference::new(first.iter(), second.iter(), Natural);
        let mut copy = engine.clone();
        assert!(engine == copy);
        copy.advance();
        assert!(engine != copy);
    }

    #[rstest]
    fn test_size_hint_is_bounded_by_first() {
        let engine = Difference::new([1, 2, 3].into_iter(), [9].into_iter(), Natural);
        assert_eq!(engine.size_hint(), (0, Some(3)));
    }
}
