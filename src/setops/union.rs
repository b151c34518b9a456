//! Union engine: a stable merge that collapses matched pairs.

use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::control::Either;
use crate::cursor::{CursorPair, MergePosition};
use crate::error::PositionError;
use crate::order::StrictWeakOrder;
use crate::unify::{IntoFirst, Unify};

use super::view::MergeJoin;

/// Which input the current element of a [`Union`] is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionSource {
    /// The first sequence (also used on a tie).
    First,
    /// The second sequence.
    Second,
}

/// Lazy union `A ∪ B` of two sorted sequences.
///
/// Yields every element of `A` and `B` in merged order. When an element of
/// `A` is equivalent to one of `B`, the pair is emitted once, as `A`'s
/// element; the `B` side is skipped. Runs of equivalent elements *within* one
/// input are not collapsed. The sequence ends only when both inputs are
/// exhausted.
///
/// The output type is chosen by the [`Unify`] strategy `U`; the default
/// [`IntoFirst`] converts `B`'s elements into `A`'s element type.
///
/// # Examples
///
/// ```rust
/// use setwise::order::Natural;
/// use setwise::setops::{Union, UnionSource};
/// use setwise::unify::IntoFirst;
///
/// let mut engine: Union<_, _, _, IntoFirst> =
///     Union::new([1, 3].into_iter(), [2, 3].into_iter(), Natural);
/// assert_eq!(engine.source(), UnionSource::First);
/// engine.advance();
/// assert_eq!(engine.source(), UnionSource::Second);
/// assert_eq!(engine.collect::<Vec<i32>>(), vec![2, 3]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Union<A: Iterator, B: Iterator, O, U = IntoFirst> {
    cursors: CursorPair<A, B>,
    order: O,
    source: UnionSource,
    unify: PhantomData<fn() -> U>,
}

impl<A, B, O, U> Union<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    const NAME: &'static str = "Union";

    /// Creates the engine and selects the source of its first element.
    pub fn new(first: A, second: B, order: O) -> Self {
        let mut engine = Self {
            cursors: CursorPair::new(first, second),
            order,
            source: UnionSource::First,
            unify: PhantomData,
        };
        engine.satisfy();
        engine
    }

    /// Picks the source of the current element, dropping the second
    /// sequence's side of a tie.
    fn satisfy(&mut self) {
        self.source = match self.cursors.compare_heads(&mut self.order) {
            None if self.cursors.is_first_end() => UnionSource::Second,
            None | Some(Ordering::Less) => UnionSource::First,
            Some(Ordering::Greater) => UnionSource::Second,
            Some(Ordering::Equal) => {
                self.cursors.advance_second();
                UnionSource::First
            }
        };
        if self.cursors.is_both_end() {
            trace_event!(operation = "union", position = ?self.cursors.position(), "reached end");
        }
    }

    /// Returns which input the current element is read from.
    ///
    /// At the end this is [`UnionSource::Second`].
    #[inline]
    pub const fn source(&self) -> UnionSource {
        self.source
    }

    /// Returns the current element, tagged with its source, or `None` at the
    /// end.
    #[inline]
    pub fn current(&self) -> Option<Either<&A::Item, &B::Item>> {
        match self.source {
            UnionSource::First => self.cursors.first().head().map(Either::Left),
            UnionSource::Second => self.cursors.second().head().map(Either::Right),
        }
    }

    /// Returns the current element.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::PastTheEnd`] at the end.
    #[inline]
    pub fn try_current(&self) -> Result<Either<&A::Item, &B::Item>, PositionError> {
        self.current()
            .ok_or(PositionError::past_the_end(Self::NAME, "current"))
    }

    /// Returns `true` once both sequences are exhausted.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursors.is_both_end()
    }

    /// Moves past the current element.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::PastTheEnd`] if the engine is already at its end.
    pub fn try_advance(&mut self) -> Result<(), PositionError> {
        if self.is_end() {
            return Err(PositionError::past_the_end(Self::NAME, "advance"));
        }
        match self.source {
            UnionSource::First => {
                self.cursors.advance_first();
            }
            UnionSource::Second => {
                self.cursors.advance_second();
            }
        }
        self.satisfy();
        Ok(())
    }

    /// Moves past the current element.
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

impl<A, B, O, U> Iterator for Union<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
    U: Unify<A::Item, B::Item>,
{
    type Item = U::Output;

    fn next(&mut self) -> Option<U::Output> {
        if self.is_end() {
            return None;
        }
        let element = match self.source {
            UnionSource::First => U::first(self.cursors.advance_first()?),
            UnionSource::Second => U::second(self.cursors.advance_second()?),
        };
        self.satisfy();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.cursors.first().size_hint();
        let (second_lower, second_upper) = self.cursors.second().size_hint();
        // Each element of the first sequence cancels at most one of the second.
        let lower = cmp::max(first_lower, second_lower);
        let upper = first_upper.and_then(|first| first.checked_add(second_upper?));
        (lower, upper)
    }
}

impl<A, B, O, U> FusedIterator for Union<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
    U: Unify<A::Item, B::Item>,
{
}

impl<A, B, O, U> MergeJoin for Union<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
    U: Unify<A::Item, B::Item>,
{
    type First = A;
    type Second = B;
    type Order = O;

    #[inline]
    fn start(first: A, second: B, order: O) -> Self {
        Self::new(first, second, order)
    }
}

impl<A, B, O, U> Clone for Union<A, B, O, U>
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
            source: self.source,
            unify: PhantomData,
        }
    }
}

/// Positions are equal when both cursors have consumed the same number of
/// elements.
impl<A: Iterator, B: Iterator, O, U> PartialEq for Union<A, B, O, U> {
    fn eq(&self, other: &Self) -> bool {
        self.cursors.position() == other.cursors.position()
    }
}

impl<A, B, O, U> fmt::Debug for Union<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    CursorPair<A, B>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Union")
            .field("cursors", &self.cursors)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
