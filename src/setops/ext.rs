//! Method syntax for the set operations on any iterator.

use crate::order::{Natural, StrictWeakOrder};
use crate::unify::{IntoFirst, Unify};

use super::{Difference, Intersection, SymmetricDifference, Union};

/// Set operations as iterator adaptors.
///
/// Each method consumes `self` and the other sequence and returns the engine
/// directly, so the result is single-pass. Use the free functions in
/// [`setops`](super) for a restartable [`SetView`](super::SetView).
///
/// # Examples
///
/// ```rust
/// use setwise::setops::SortedIterExt;
///
/// let evens = (0..10).step_by(2);
/// let threes = (0..10).step_by(3);
/// let both: Vec<i32> = evens.set_intersection(threes).collect();
/// assert_eq!(both, vec![0, 6]);
/// ```
pub trait SortedIterExt: Iterator + Sized {
    /// Elements of `self` with no equivalent in `other`.
    fn set_difference<B>(self, other: B) -> Difference<Self, B::IntoIter, Natural>
    where
        B: IntoIterator,
        Natural: StrictWeakOrder<Self::Item, B::Item>,
    {
        Difference::new(self, other.into_iter(), Natural)
    }

    /// Like [`set_difference`](Self::set_difference), ordered by `order`.
    fn set_difference_by<B, O>(self, other: B, order: O) -> Difference<Self, B::IntoIter, O>
    where
        B: IntoIterator,
        O: StrictWeakOrder<Self::Item, B::Item>,
    {
        Difference::new(self, other.into_iter(), order)
    }

    /// Elements of `self` matched by an equivalent in `other`.
    fn set_intersection<B>(self, other: B) -> Intersection<Self, B::IntoIter, Natural>
    where
        B: IntoIterator,
        Natural: StrictWeakOrder<Self::Item, B::Item>,
    {
        Intersection::new(self, other.into_iter(), Natural)
    }

    /// Like [`set_intersection`](Self::set_intersection), ordered by `order`.
    fn set_intersection_by<B, O>(self, other: B, order: O) -> Intersection<Self, B::IntoIter, O>
    where
        B: IntoIterator,
        O: StrictWeakOrder<Self::Item, B::Item>,
    {
        Intersection::new(self, other.into_iter(), order)
    }

    /// Every element of `self` or `other`, matched pairs once.
    fn set_union<B>(self, other: B) -> Union<Self, B::IntoIter, Natural, IntoFirst>
    where
        B: IntoIterator,
        Natural: StrictWeakOrder<Self::Item, B::Item>,
        IntoFirst: Unify<Self::Item, B::Item>,
    {
        Union::new(self, other.into_iter(), Natural)
    }

    /// Like [`set_union`](Self::set_union), ordered by `order`.
    fn set_union_by<B, O>(self, other: B, order: O) -> Union<Self, B::IntoIter, O, IntoFirst>
    where
        B: IntoIterator,
        O: StrictWeakOrder<Self::Item, B::Item>,
        IntoFirst: Unify<Self::Item, B::Item>,
    {
        Union::new(self, other.into_iter(), order)
    }

    /// Elements of either sequence with no equivalent in the other.
    fn set_symmetric_difference<B>(
        self,
        other: B,
    ) -> SymmetricDifference<Self, B::IntoIter, Natural, IntoFirst>
    where
        B: IntoIterator,
        Natural: StrictWeakOrder<Self::Item, B::Item>,
        IntoFirst: Unify<Self::Item, B::Item>,
    {
        SymmetricDifference::new(self, other.into_iter(), Natural)
    }

    /// Like [`set_symmetric_difference`](Self::set_symmetric_difference),
    /// ordered by `order`.
    fn set_symmetric_difference_by<B, O>(
        self,
        other: B,
        order: O,
    ) -> SymmetricDifference<Self, B::IntoIter, O, IntoFirst>
    where
        B: IntoIterator,
        O: StrictWeakOrder<Self::Item, B::Item>,
        IntoFirst: Unify<Self::Item, B::Item>,
    {
        SymmetricDifference::new(self, other.into_iter(), order)
    }
}

impl<I: Iterator> SortedIterExt for I {}
