//! Symmetric difference engine: unmatched elements of either sequence.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::control::Either;
use crate::cursor::{CursorPair, MergePosition};
use crate::error::PositionError;
use crate::order::StrictWeakOrder;
use crate::unify::{IntoFirst, Unify};

use super::view::MergeJoin;

/// Which input the current element of a [`SymmetricDifference`] is read
/// from.
///
/// The `Only*` states are entered once the opposite input is exhausted; from
/// then on no more comparisons are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymmetricSource {
    /// The first sequence, while the second still has elements.
    First,
    /// The second sequence, while the first still has elements.
    Second,
    /// The first sequence; the second is exhausted.
    OnlyFirst,
    /// The second sequence; the first is exhausted.
    OnlySecond,
}

impl SymmetricSource {
    /// Returns `true` if the current element is read from the first sequence.
    #[inline]
    pub const fn reads_first(self) -> bool {
        matches!(self, Self::First | Self::OnlyFirst)
    }

    /// Returns `true` once the opposite input is known to be exhausted.
    #[inline]
    pub const fn is_fast_path(self) -> bool {
        matches!(self, Self::OnlyFirst | Self::OnlySecond)
    }
}

/// Lazy symmetric difference `A △ B` of two sorted sequences.
///
/// Yields, in merged order, the elements of either input that are not
/// matched by an equivalent element of the other. Matched pairs are dropped
/// together. The sequence ends when both inputs are exhausted.
///
/// # Examples
///
/// ```rust
/// use setwise::order::Natural;
/// use setwise::setops::{SymmetricDifference, SymmetricSource};
/// use setwise::unify::IntoFirst;
///
/// let mut engine: SymmetricDifference<_, _, _, IntoFirst> =
///     SymmetricDifference::new([1, 2].into_iter(), [2, 3, 4].into_iter(), Natural);
/// assert_eq!(engine.source(), SymmetricSource::First);
/// engine.advance();
/// assert_eq!(engine.source(), SymmetricSource::OnlySecond);
/// assert_eq!(engine.collect::<Vec<i32>>(), vec![3, 4]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SymmetricDifference<A: Iterator, B: Iterator, O, U = IntoFirst> {
    cursors: CursorPair<A, B>,
    order: O,
    source: SymmetricSource,
    unify: PhantomData<fn() -> U>,
}

impl<A, B, O, U> SymmetricDifference<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
{
    const NAME: &'static str = "SymmetricDifference";

    /// Creates the engine and selects the source of its first element.
    pub fn new(first: A, second: B, order: O) -> Self {
        let mut engine = Self {
            cursors: CursorPair::new(first, second),
            order,
            source: SymmetricSource::First,
            unify: PhantomData,
        };
        engine.satisfy();
        engine
    }

    /// Drops matched pairs until one side holds an unmatched element or an
    /// input runs out.
    fn satisfy(&mut self) {
        self.source = loop {
            match self.cursors.compare_heads(&mut self.order) {
                Some(Ordering::Less) => break SymmetricSource::First,
                Some(Ordering::Greater) => break SymmetricSource::Second,
                Some(Ordering::Equal) => {
                    self.cursors.advance_both();
                }
                None if self.cursors.is_first_end() => break SymmetricSource::OnlySecond,
                None => break SymmetricSource::OnlyFirst,
            }
        };
        if self.source.is_fast_path() {
            trace_event!(
                operation = "symmetric_difference",
                source = ?self.source,
                position = ?self.cursors.position(),
                "entered fast path"
            );
        }
    }

    /// Returns which input the current element is read from.
    #[inline]
    pub const fn source(&self) -> SymmetricSource {
        self.source
    }

    /// Returns the current element, tagged with its source, or `None` at the
    /// end.
    #[inline]
    pub fn current(&self) -> Option<Either<&A::Item, &B::Item>> {
        if self.source.reads_first() {
            self.cursors.first().head().map(Either::Left)
        } else {
            self.cursors.second().head().map(Either::Right)
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
            SymmetricSource::OnlyFirst => {
                self.cursors.advance_first();
            }
            SymmetricSource::OnlySecond => {
                self.cursors.advance_second();
            }
            SymmetricSource::First => {
                self.cursors.advance_first();
                self.satisfy();
            }
            SymmetricSource::Second => {
                self.cursors.advance_second();
                self.satisfy();
            }
        }
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

impl<A, B, O, U> Iterator for SymmetricDifference<A, B, O, U>
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
            SymmetricSource::OnlyFirst => U::first(self.cursors.advance_first()?),
            SymmetricSource::OnlySecond => U::second(self.cursors.advance_second()?),
            SymmetricSource::First => {
                let element = self.cursors.advance_first()?;
                self.satisfy();
                U::first(element)
            }
            SymmetricSource::Second => {
                let element = self.cursors.advance_second()?;
                self.satisfy();
                U::second(element)
            }
        };
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.cursors.first().size_hint();
        let (second_lower, second_upper) = self.cursors.second().size_hint();
        match self.source {
            SymmetricSource::OnlyFirst => (first_lower, first_upper),
            SymmetricSource::OnlySecond => (second_lower, second_upper),
            SymmetricSource::First | SymmetricSource::Second => {
                // Every matched pair removes one element from each side.
                let lower = match (first_upper, second_upper) {
                    (Some(first), Some(second)) => unmatched_at_least(first_lower, second)
                        .max(unmatched_at_least(second_lower, first)),
                    (Some(first), None) => unmatched_at_least(second_lower, first),
                    (None, Some(second)) => unmatched_at_least(first_lower, second),
                    (None, None) => 0,
                };
                let upper = first_upper.and_then(|first| first.checked_add(second_upper?));
                (lower, upper)
            }
        }
    }
}

#[inline]
const fn unmatched_at_least(minuend: usize, subtrahend: usize) -> usize {
    minuend.saturating_sub(subtrahend)
}

impl<A, B, O, U> FusedIterator for SymmetricDifference<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    O: StrictWeakOrder<A::Item, B::Item>,
    U: Unify<A::Item, B::Item>,
{
}

impl<A, B, O, U> MergeJoin for SymmetricDifference<A, B, O, U>
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

impl<A, B, O, U> Clone for SymmetricDifference<A, B, O, U>
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
impl<A: Iterator, B: Iterator, O, U> PartialEq for SymmetricDifference<A, B, O, U> {
    fn eq(&self, other: &Self) -> bool {
        self.cursors.position() == other.cursors.position()
    }
}

impl<A, B, O, U> fmt::Debug for SymmetricDifference<A, B, O, U>
where
    A: Iterator,
    B: Iterator,
    CursorPair<A, B>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SymmetricDifference")
            .field("cursors", &self.cursors)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Natural;
    use crate::unify::Tagged;
    use rstest::rstest;
    use std::cell::Cell;

    fn run(first: &[i32], second: &[i32]) -> Vec<i32> {
        SymmetricDifference::<_, _, _, IntoFirst>::new(
            first.iter().copied(),
            second.iter().copied(),
            Natural,
        )
        .collect()
    }

    #[rstest]
    #[case(&[1, 2, 4, 6], &[2, 3, 4, 5], &[1, 3, 5, 6])]
    #[case(&[1, 2, 2, 4, 6], &[2, 3, 4, 4, 5], &[1, 2, 3, 4, 5, 6])]
    #[case(&[1, 2, 3], &[], &[1, 2, 3])]
    #[case(&[], &[1, 2, 3], &[1, 2, 3])]
    #[case(&[1, 2, 3], &[1, 2, 3], &[])]
    #[case(&[1, 1, 1], &[1], &[1, 1])]
    fn test_symmetric_difference_cases(
        #[case] first: &[i32],
        #[case] second: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(run(first, second), expected);
    }

    #[rstest]
    #[case(&[], &[], SymmetricSource::OnlySecond)]
    #[case(&[1], &[], SymmetricSource::OnlyFirst)]
    #[case(&[], &[1], SymmetricSource::OnlySecond)]
    #[case(&[1], &[2], SymmetricSource::First)]
    #[case(&[2], &[1], SymmetricSource::Second)]
    #[case(&[1, 2], &[1, 3], SymmetricSource::First)]
    #[case(&[1], &[1, 3], SymmetricSource::OnlySecond)]
    fn test_initial_source(
        #[case] first: &[i32],
        #[case] second: &[i32],
        #[case] expected: SymmetricSource,
    ) {
        let engine: SymmetricDifference<_, _, _, IntoFirst> =
            SymmetricDifference::new(first.iter(), second.iter(), Natural);
        assert_eq!(engine.source(), expected);
    }

    #[rstest]
    fn test_fast_path_stops_comparing() {
        let comparisons = Cell::new(0);
        let order = |left: &i32, right: &i32| {
            comparisons.set(comparisons.get() + 1);
            left.cmp(right)
        };
        let engine: SymmetricDifference<_, _, _, IntoFirst> =
            SymmetricDifference::new([0, 5, 6, 7, 8].into_iter(), [0].into_iter(), order);
        assert_eq!(engine.source(), SymmetricSource::OnlyFirst);
        let before = comparisons.get();
        assert_eq!(engine.collect::<Vec<_>>(), vec![5, 6, 7, 8]);
        assert_eq!(comparisons.get(), before);
    }

    #[rstest]
    fn test_tagged_output_keeps_sides() {
        let engine: SymmetricDifference<_, _, _, Tagged> =
            SymmetricDifference::new([1, 2].into_iter(), [2, 3].into_iter(), Natural);
        assert_eq!(
            engine.collect::<Vec<_>>(),
            vec![Either::Left(1), Either::Right(3)]
        );
    }

    #[rstest]
    fn test_current_and_advance_at_end() {
        let mut engine: SymmetricDifference<_, _, _, IntoFirst> =
            SymmetricDifference::new([1].into_iter(), [1].into_iter(), Natural);
        assert!(engine.is_end());
        assert_eq!(engine.current(), None);
        assert_eq!(
            engine.try_advance(),
            Err(PositionError::past_the_end("SymmetricDifference", "advance"))
        );
    }

    #[rstest]
    fn test_size_hint_in_fast_path_is_exact() {
        let engine: SymmetricDifference<_, _, _, IntoFirst> =
            SymmetricDifference::new([1, 2, 3].into_iter(), std::iter::empty::<i32>(), Natural);
        assert_eq!(engine.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn test_size_hint_before_fast_path() {
        let engine: SymmetricDifference<_, _, _, IntoFirst> =
            SymmetricDifference::new([1, 2, 3, 4].into_iter(), [2].into_iter(), Natural);
        assert_eq!(engine.size_hint(), (3, Some(5)));
        assert_eq!(engine.count(), 3);
    }
}
