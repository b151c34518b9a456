//! Set operations partially applied to their second sequence.
//!
//! Each function here fixes the second sequence (and the relation) and
//! returns a closure that, given the first sequence, starts the engine. This
//! fits pipelines where the right-hand side is known before the data flowing
//! through them:
//!
//! ```rust
//! use setwise::setops::adaptor::difference_with;
//!
//! let reserved = [0_u16, 1, 2];
//! let without_reserved = difference_with::<std::ops::Range<u16>, _>(reserved);
//! let free: Vec<u16> = without_reserved(0..6).collect();
//! assert_eq!(free, vec![3, 4, 5]);
//! ```

use crate::order::{Natural, StrictWeakOrder};
use crate::unify::{IntoFirst, Unify};

use super::{Difference, Intersection, SymmetricDifference, Union};

macro_rules! partial_constructors {
    ($operation:ident, $engine:ident, $name:literal, [$($unify:ty)?] $(, $($bound:tt)+)?) => {
        paste::paste! {
            #[doc = concat!("Fixes the second sequence of a ", $name, " in natural order.")]
            pub fn [<$operation _with>]<A, B>(
                second: B,
            ) -> impl FnOnce(A) -> $engine<A::IntoIter, B::IntoIter, Natural $(, $unify)?>
            where
                A: IntoIterator,
                B: IntoIterator,
                Natural: StrictWeakOrder<A::Item, B::Item>,
                $($($bound)+)?
            {
                move |first| $engine::new(first.into_iter(), second.into_iter(), Natural)
            }

            #[doc = concat!("Fixes the second sequence and the relation of a ", $name, ".")]
            pub fn [<$operation _with_by>]<A, B, O>(
                second: B,
                order: O,
            ) -> impl FnOnce(A) -> $engine<A::IntoIter, B::IntoIter, O $(, $unify)?>
            where
                A: IntoIterator,
                B: IntoIterator,
                O: StrictWeakOrder<A::Item, B::Item>,
                $($($bound)+)?
            {
                move |first| $engine::new(first.into_iter(), second.into_iter(), order)
            }
        }
    };
}

partial_constructors!(difference, Difference, "difference", []);
partial_constructors!(intersection, Intersection, "intersection", []);
partial_constructors!(
    union,
    Union,
    "union",
    [IntoFirst],
    IntoFirst: Unify<A::Item, B::Item>,
);
partial_constructors!(
    symmetric_difference,
    SymmetricDifference,
    "symmetric difference",
    [IntoFirst],
    IntoFirst: Unify<A::Item, B::Item>,
);
