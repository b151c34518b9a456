//! The lazy sequence value returned by the set operation constructors.

use std::fmt;
use std::marker::PhantomData;

/// An engine that can be started from two iterators and a relation.
///
/// Implemented by [`Difference`](super::Difference),
/// [`Intersection`](super::Intersection), [`Union`](super::Union) and
/// [`SymmetricDifference`](super::SymmetricDifference).
pub trait MergeJoin: Iterator + Sized {
    /// Iterator over the first sequence.
    type First: Iterator;
    /// Iterator over the second sequence.
    type Second: Iterator;
    /// The ordering relation.
    type Order;

    /// Creates the engine at the start of both sequences.
    fn start(first: Self::First, second: Self::Second, order: Self::Order) -> Self;
}

/// A set operation over two sorted sequences, not yet started.
///
/// A view holds only its two inputs and the relation; creating one does no
/// work. Each call to [`iter`](Self::iter) (or iterating `&view`) starts an
/// independent engine `E` over fresh copies of the inputs, so a view over
/// re-iterable inputs (slices, `&Vec`, cloneable iterators) can be traversed
/// any number of times. A view over single-pass inputs can only be consumed
/// once, through [`IntoIterator`].
///
/// # Examples
///
/// ```rust
/// use setwise::setops::intersection;
///
/// let first = vec![1, 2, 3, 4];
/// let second = vec![2, 4, 8];
/// let view = intersection(&first, &second);
///
/// let once: Vec<&i32> = view.iter().collect();
/// let again: Vec<&i32> = (&view).into_iter().collect();
/// assert_eq!(once, vec![&2, &4]);
/// assert_eq!(once, again);
/// ```
#[must_use = "views are lazy and do nothing unless iterated"]
pub struct SetView<E, A, B, O> {
    first: A,
    second: B,
    order: O,
    engine: PhantomData<fn() -> E>,
}

impl<E, A, B, O> SetView<E, A, B, O> {
    /// Creates a view over two sequences sorted by `order`.
    #[inline]
    pub const fn new(first: A, second: B, order: O) -> Self {
        Self {
            first,
            second,
            order,
            engine: PhantomData,
        }
    }

    /// Returns the first sequence.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second sequence.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Returns the ordering relation.
    #[inline]
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// Takes the view apart into its inputs and relation.
    #[inline]
    pub fn into_parts(self) -> (A, B, O) {
        (self.first, self.second, self.order)
    }
}

impl<E, A, B, O> SetView<E, A, B, O>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
    O: Clone,
    E: MergeJoin<First = A::IntoIter, Second = B::IntoIter, Order = O>,
{
    /// Starts a new engine, independent of any other in flight.
    #[inline]
    pub fn iter(&self) -> E {
        E::start(
            self.first.clone().into_iter(),
            self.second.clone().into_iter(),
            self.order.clone(),
        )
    }
}

impl<E, A, B, O> IntoIterator for SetView<E, A, B, O>
where
    A: IntoIterator,
    B: IntoIterator,
    E: MergeJoin<First = A::IntoIter, Second = B::IntoIter, Order = O>,
{
    type Item = E::Item;
    type IntoIter = E;

    #[inline]
    fn into_iter(self) -> E {
        E::start(self.first.into_iter(), self.second.into_iter(), self.order)
    }
}

impl<E, A, B, O> IntoIterator for &SetView<E, A, B, O>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
    O: Clone,
    E: MergeJoin<First = A::IntoIter, Second = B::IntoIter, Order = O>,
{
    type Item = E::Item;
    type IntoIter = E;

    #[inline]
    fn into_iter(self) -> E {
        self.iter()
    }
}

impl<E, A: Clone, B: Clone, O: Clone> Clone for SetView<E, A, B, O> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone(), self.order.clone())
    }
}

impl<E, A: Copy, B: Copy, O: Copy> Copy for SetView<E, A, B, O> {}

impl<E, A: fmt::Debug, B: fmt::Debug, O> fmt::Debug for SetView<E, A, B, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SetView")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}
