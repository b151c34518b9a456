//! Intersection engine: elements of the first sequence matched in the second.

use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{CursorPair, MergePosition};
use crate::error::PositionError;
use crate::order::StrictWeakOrder;

use super::view::MergeJoin;

/// Lazy intersection `A ∩ B` of two sorted sequences.
///
/// Yields `A`'s element once for every matched pair of equivalent elements,
/// so `[1, 1, 1]` intersected with `[1, 1]` is `[1, 1]`. The sequence ends
/// when either input is exhausted.
///
/// # Examples
///
/// ```rust
/// use setwise::order::Natural;
/// use setwise::setops::Intersection;
///
/// let engine = Intersection::new([1, 2, 4, 6].into_iter(), [2, 3, 4, 5].into_iter(), Natural);
/// assert_eq!(engine.collect::<Vec<_>>(), vec![2, 4]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intersection<A: Iterator, B: Iterator, O> {
    cursors: CursorPair<A, B>,
    order: O,
}

impl<A, B, O> Intersection<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    const NAME: &'static str = "Intersection";

    /// Creates the engine and moves it to its first matched pair.
    pub fn new(first: A, second: B, order: O) -> Self {
        let mut engine = Self {
            cursors: CursorPair::new(first, second),
            order,
        };
        engine.satisfy();
        engine
    }

    fn satisfy(&mut self) {
        while let Some(ordering) = self.cursors.compare_heads(&mut self.order) {
            match ordering {
                Ordering::Less => {
                    self.cursors.advance_first();
                }
                Ordering::Greater => {
                    self.cursors.advance_second();
                }
                Ordering::Equal => return,
            }
        }
        trace_event!(operation = "intersection", position = ?self.cursors.position(), "reached end");
    }

    /// Returns the first sequence's element of the current matched pair, or
    /// `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<&A::Item> {
        if self.is_end() {
            return None;
        }
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

    /// Returns `true` once either sequence is exhausted.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursors.is_either_end()
    }

    /// Consumes the current matched pair and moves to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::PastTheEnd`] if the engine is already at its end.
    pub fn try_advance(&mut self) -> Result<(), PositionError> {
        if self.is_end() {
            return Err(PositionError::past_the_end(Self::NAME, "advance"));
        }
        self.cursors.advance_both();
        self.satisfy();
        Ok(())
    }

    /// Consumes the current matched pair and moves to the next one.
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

impl<A, B, O> Iterator for Intersection<A, B, O>
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
        let matched = self.cursors.advance_both();
        self.satisfy();
        matched
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match (
            self.cursors.first().size_hint().1,
            self.cursors.second().size_hint().1,
        ) {
            (Some(first), Some(second)) => Some(cmp::min(first, second)),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        };
        (0, upper)
    }
}

impl<A, B, O> FusedIterator for Intersection<A, B, O>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
}

impl<A, B, O> MergeJoin for Intersection<A, B, O>
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

impl<A, B, O> Clone for Intersection<A, B, O>
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
impl<A: Iterator, B: Iterator, O> PartialEq for Intersection<A, B, O> {
    fn eq(&self, other: &Self) -> bool {
        self.cursors.first().offset() == other.cursors.first().offset()
    }
}

impl<A, B, O> fmt::Debug for Intersection<A, B, O>
where
    A: Iterator,
    B: Iterator,
    CursorPair<A, B>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Intersection")
            .field("cursors", &self.cursors)
            .finish_non_exhaustive()
    }
}
