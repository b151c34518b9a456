//! Lazy set operations over sorted sequences.
//!
//! This module provides the four merge-join engines and the ways to build
//! them:
//!
//! - [`Difference`]: elements of the first sequence not matched in the second
//! - [`Intersection`]: elements of the first sequence matched in the second
//! - [`Union`]: every element of either sequence, matched pairs once
//! - [`SymmetricDifference`]: unmatched elements of either sequence
//!
//! ## Constructors
//!
//! Each operation comes in a family of free functions returning a
//! [`SetView`]:
//!
//! | Function              | Relation                          |
//! |-----------------------|-----------------------------------|
//! | `difference`          | [`Natural`]                       |
//! | `difference_by`       | any [`StrictWeakOrder`]           |
//! | `difference_by_key`   | [`ByKey`] over an extracted key   |
//!
//! Union and symmetric difference also have `_either` forms, which keep both
//! element types by yielding [`Either`], and `_into` forms, which convert both
//! into a common type (see [`crate::unify`]).
//!
//! Engines can also be built directly from iterators with [`SortedIterExt`],
//! or partially applied to their second sequence with the functions in
//! [`adaptor`].
//!
//! # Examples
//!
//! ```rust
//! use setwise::setops::{difference_by_key, symmetric_difference};
//!
//! let first = vec![1, 2, 4, 6];
//! let second = vec![2, 3, 4, 5];
//! let result: Vec<&i32> = symmetric_difference(&first, &second).into_iter().collect();
//! assert_eq!(result, vec![&1, &3, &5, &6]);
//!
//! let staff = [("ann", 3), ("bob", 7), ("eve", 9)];
//! let departed = [("x", 7)];
//! let remaining: Vec<_> = difference_by_key(staff, departed, |entry: &(&str, i32)| entry.1)
//!     .into_iter()
//!     .map(|entry| entry.0)
//!     .collect();
//! assert_eq!(remaining, vec!["ann", "eve"]);
//! ```
//!
//! ## Heterogeneous inputs
//!
//! ```rust
//! use setwise::setops::{intersection_by, union_into};
//!
//! let ids = [1_u64, 4, 9];
//! let names = ["4", "5", "9"];
//! let shared: Vec<u64> = intersection_by(ids, names, |id: &u64, name: &&str| {
//!     id.to_string().as_str().cmp(*name)
//! })
//! .into_iter()
//! .collect();
//! assert_eq!(shared, vec![4, 9]);
//!
//! let merged: Vec<i64> = union_into::<i64, _, _>([1_i32, 3], [2_i32, 3]).into_iter().collect();
//! assert_eq!(merged, vec![1, 2, 3]);
//! ```

pub mod adaptor;
mod difference;
mod ext;
mod intersection;
mod symmetric_difference;
mod union;
mod view;

pub use difference::Difference;
pub use ext::SortedIterExt;
pub use intersection::Intersection;
pub use symmetric_difference::{SymmetricDifference, SymmetricSource};
pub use union::{Union, UnionSource};
pub use view::{MergeJoin, SetView};

use crate::control::Either;
use crate::order::{ByKey, Natural, StrictWeakOrder};
use crate::unify::{IntoCommon, IntoFirst, Tagged, Unify};

/// Lazy difference of two sequences.
pub type DifferenceView<A, B, O = Natural> = SetView<
    Difference<<A as IntoIterator>::IntoIter, <B as IntoIterator>::IntoIter, O>,
    A,
    B,
    O,
>;

/// Lazy intersection of two sequences.
pub type IntersectionView<A, B, O = Natural> = SetView<
    Intersection<<A as IntoIterator>::IntoIter, <B as IntoIterator>::IntoIter, O>,
    A,
    B,
    O,
>;

/// Lazy union of two sequences, unified by `U`.
pub type UnionView<A, B, O = Natural, U = IntoFirst> = SetView<
    Union<<A as IntoIterator>::IntoIter, <B as IntoIterator>::IntoIter, O, U>,
    A,
    B,
    O,
>;

/// Lazy symmetric difference of two sequences, unified by `U`.
pub type SymmetricDifferenceView<A, B, O = Natural, U = IntoFirst> = SetView<
    SymmetricDifference<<A as IntoIterator>::IntoIter, <B as IntoIterator>::IntoIter, O, U>,
    A,
    B,
    O,
>;

/// Generates the natural, `_by` and `_by_key` constructors of one operation.
///
/// The trailing bounds are added to every generated `where` clause.
macro_rules! set_constructors {
    ($operation:ident, $view:ident, $name:literal $(, $($bound:tt)+)?) => {
        paste::paste! {
            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted in natural order.")]
            #[inline]
            pub fn $operation<A, B>(first: A, second: B) -> $view<A, B>
            where
                A: IntoIterator,
                B: IntoIterator,
                Natural: StrictWeakOrder<A::Item, B::Item>,
                $($($bound)+)?
            {
                SetView::new(first, second, Natural)
            }

            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted by `order`.")]
            #[inline]
            pub fn [<$operation _by>]<A, B, O>(first: A, second: B, order: O) -> $view<A, B, O>
            where
                A: IntoIterator,
                B: IntoIterator,
                O: StrictWeakOrder<A::Item, B::Item>,
                $($($bound)+)?
            {
                SetView::new(first, second, order)
            }

            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted by the key `key` extracts.")]
            #[inline]
            pub fn [<$operation _by_key>]<A, B, F, K>(
                first: A,
                second: B,
                key: F,
            ) -> $view<A, B, ByKey<F>>
            where
                A: IntoIterator,
                B: IntoIterator<Item = A::Item>,
                F: FnMut(&A::Item) -> K,
                K: Ord,
                $($($bound)+)?
            {
                SetView::new(first, second, ByKey::new(key))
            }
        }
    };
}

/// Generates the `_either` and `_into` constructors of an operation whose
/// output mixes both element types.
macro_rules! unifying_constructors {
    ($operation:ident, $view:ident, $name:literal) => {
        paste::paste! {
            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted in natural order, ")]
            #[doc = "yielding each element as an [`Either`] tagged with its source."]
            #[inline]
            pub fn [<$operation _either>]<A, B>(first: A, second: B) -> $view<A, B, Natural, Tagged>
            where
                A: IntoIterator,
                B: IntoIterator,
                Natural: StrictWeakOrder<A::Item, B::Item>,
            {
                SetView::new(first, second, Natural)
            }

            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted by `order`, ")]
            #[doc = "yielding each element as an [`Either`] tagged with its source."]
            #[inline]
            pub fn [<$operation _either_by>]<A, B, O>(
                first: A,
                second: B,
                order: O,
            ) -> $view<A, B, O, Tagged>
            where
                A: IntoIterator,
                B: IntoIterator,
                O: StrictWeakOrder<A::Item, B::Item>,
            {
                SetView::new(first, second, order)
            }

            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted in natural order, ")]
            #[doc = "converting the elements of both into `T`."]
            #[inline]
            pub fn [<$operation _into>]<T, A, B>(
                first: A,
                second: B,
            ) -> $view<A, B, Natural, IntoCommon<T>>
            where
                A: IntoIterator,
                B: IntoIterator,
                Natural: StrictWeakOrder<A::Item, B::Item>,
                IntoCommon<T>: Unify<A::Item, B::Item>,
            {
                SetView::new(first, second, Natural)
            }

            #[doc = concat!("Returns the lazy ", $name, " of two sequences sorted by `order`, ")]
            #[doc = "converting the elements of both into `T`."]
            #[inline]
            pub fn [<$operation _into_by>]<T, A, B, O>(
                first: A,
                second: B,
                order: O,
            ) -> $view<A, B, O, IntoCommon<T>>
            where
                A: IntoIterator,
                B: IntoIterator,
                O: StrictWeakOrder<A::Item, B::Item>,
                IntoCommon<T>: Unify<A::Item, B::Item>,
            {
                SetView::new(first, second, order)
            }
        }
    };
}

set_constructors!(difference, DifferenceView, "difference");
set_constructors!(intersection, IntersectionView, "intersection");
set_constructors!(union, UnionView, "union", IntoFirst: Unify<A::Item, B::Item>,);
set_constructors!(
    symmetric_difference,
    SymmetricDifferenceView,
    "symmetric difference",
    IntoFirst: Unify<A::Item, B::Item>,
);

unifying_constructors!(union, UnionView, "union");
unifying_constructors!(symmetric_difference, SymmetricDifferenceView, "symmetric difference");

static_assertions::assert_impl_all!(UnionSource: Copy, Send, Sync, std::hash::Hash);
static_assertions::assert_impl_all!(SymmetricSource: Copy, Send, Sync, std::hash::Hash);
static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
