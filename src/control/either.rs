//! Either type - an element drawn from one of two sequences.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. In this crate it is the
//! lossless output of union and symmetric difference when the two inputs have
//! different element types:
//!
//! - `Left` holds an element of the first sequence
//! - `Right` holds an element of the second sequence
//!
//! It is also what the positional `current()` accessor of those engines
//! returns, since the current element may be read from either cursor.
//!
//! # Examples
//!
//! ```rust
//! use setwise::control::Either;
//! use setwise::setops::union_either_by;
//!
//! let numbers = vec![1_i64, 3];
//! let small = vec![2_u8, 3];
//!
//! let merged: Vec<Either<i64, u8>> = union_either_by(
//!     numbers.iter().copied(),
//!     small.iter().copied(),
//!     |left: &i64, right: &u8| left.cmp(&i64::from(*right)),
//! )
//! .into_iter()
//! .collect();
//! assert_eq!(merged, vec![Either::Left(1), Either::Right(2), Either::Left(3)]);
//! ```

use std::fmt;

/// A value that came from one of two sequences.
///
/// By convention `Left` is the first input of a set operation and `Right` is
/// the second.
///
/// # Type Parameters
///
/// * `L` - The element type of the first sequence
/// * `R` - The element type of the second sequence
///
/// # Examples
///
/// ```rust
/// use setwise::control::Either;
///
/// let element: Either<i32, i64> = Either::Right(7);
/// let widened: i64 = element.fold(i64::from, |value| value);
/// assert_eq!(widened, 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// An element of the first sequence.
    Left(L),
    /// An element of the second sequence.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the element came from the first sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the element came from the second sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("b".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option<L>`, discarding a `Right` value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a `Left` value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("a".to_string());
    /// assert_eq!(left.as_ref(), Either::Left(&"a".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to a `Left` value, leaving `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to a `Right` value, leaving `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts either side into a common type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let right: Either<i32, u8> = Either::Right(3);
    /// let value: i64 = right.either_into();
    /// assert_eq!(value, 3);
    /// ```
    #[inline]
    pub fn either_into<T>(self) -> T
    where
        L: Into<T>,
        R: Into<T>,
    {
        self.fold(Into::into, Into::into)
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the contained value when both sides have the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::control::Either;
    ///
    /// let element: Either<&str, &str> = Either::Right("b");
    /// assert_eq!(element.into_inner(), "b");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: Clone, R: Clone> Either<&L, &R> {
    /// Clones the borrowed value into an owned `Either`.
    #[inline]
    #[must_use]
    pub fn cloned(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(value.clone()),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => fmt::Display::fmt(value, formatter),
            Self::Right(value) => fmt::Display::fmt(value, formatter),
        }
    }
}
