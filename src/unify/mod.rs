//! Element unification for union and symmetric difference.
//!
//! Difference and intersection only ever yield elements of the first
//! sequence. Union and symmetric difference yield elements of *both*, so when
//! the two element types differ they need one output type that can hold
//! either. A [`Unify`] strategy fixes that output type once, in the type
//! signature of the engine, instead of deciding per element at run time.
//!
//! | Strategy          | Output        | Requirement                  |
//! |-------------------|---------------|------------------------------|
//! | [`IntoFirst`]     | `L`           | `R: Into<L>`                 |
//! | [`IntoCommon<T>`] | `T`           | `L: Into<T>`, `R: Into<T>`   |
//! | [`Tagged`]        | `Either<L, R>`| none                         |
//!
//! [`IntoFirst`] is the default; when both sequences have the same element
//! type it is the identity.
//!
//! # Examples
//!
//! ```rust
//! use setwise::control::Either;
//! use setwise::unify::{IntoCommon, IntoFirst, Tagged, Unify};
//!
//! assert_eq!(<IntoFirst as Unify<i64, i32>>::second(7), 7_i64);
//! assert_eq!(<IntoCommon<f64> as Unify<i32, f32>>::first(2), 2.0);
//! assert_eq!(<Tagged as Unify<i32, &str>>::second("b"), Either::Right("b"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::Either;

/// Maps elements of two sequences into one output type.
pub trait Unify<L, R> {
    /// The unified element type.
    type Output;

    /// Converts an element of the first sequence.
    fn first(element: L) -> Self::Output;

    /// Converts an element of the second sequence.
    fn second(element: R) -> Self::Output;
}

/// Unifies into the first sequence's element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntoFirst;

impl<L, R> Unify<L, R> for IntoFirst
where
    R: Into<L>,
{
    type Output = L;

    #[inline]
    fn first(element: L) -> L {
        element
    }

    #[inline]
    fn second(element: R) -> L {
        element.into()
    }
}

/// Unifies into a third type `T` that both element types convert into.
pub struct IntoCommon<T>(PhantomData<fn() -> T>);

impl<T> IntoCommon<T> {
    /// Creates the strategy marker.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IntoCommon<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntoCommon<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntoCommon<T> {}

impl<T> fmt::Debug for IntoCommon<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "IntoCommon<{}>", std::any::type_name::<T>())
    }
}

impl<L, R, T> Unify<L, R> for IntoCommon<T>
where
    L: Into<T>,
    R: Into<T>,
{
    type Output = T;

    #[inline]
    fn first(element: L) -> T {
        element.into()
    }

    #[inline]
    fn second(element: R) -> T {
        element.into()
    }
}

/// Keeps both element types, tagging each element with its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tagged;

impl<L, R> Unify<L, R> for Tagged {
    type Output = Either<L, R>;

    #[inline]
    fn first(element: L) -> Either<L, R> {
        Either::Left(element)
    }

    #[inline]
    fn second(element: R) -> Either<L, R> {
        Either::Right(element)
    }
}
