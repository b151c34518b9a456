//! Ordering relations for sorted sequences.
//!
//! Every set operation is parameterized by a [`StrictWeakOrder`] that both of
//! its inputs are sorted by. The relation may compare two *different* element
//! types, which is what lets a union combine, say, `&str` keys with `String`
//! keys without converting either side first.
//!
//! A single [`StrictWeakOrder::compare`] call answers both "is the left element
//! less than the right one" and "is the right element less than the left one":
//!
//! | `compare(left, right)` | meaning                              |
//! |------------------------|--------------------------------------|
//! | `Less`                 | `left < right`                       |
//! | `Greater`              | `right < left`                       |
//! | `Equal`                | neither: the elements are equivalent |
//!
//! # Provided Relations
//!
//! - [`Natural`]: the `PartialOrd` order, incomparable pairs are equivalent
//! - any `FnMut(&L, &R) -> Ordering` closure
//! - [`ByLess`]: a strict "less than" predicate
//! - [`ByKey`]: the `Ord` order of an extracted key
//! - [`Reversed`]: another relation, reversed
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use setwise::order::{ByKey, Natural, StrictWeakOrder};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let mut by_length = ByKey::new(|word: &&str| word.len());
//! assert!(by_length.equivalent(&"abc", &"xyz"));
//! ```

mod adapters;

pub use adapters::{ByKey, ByLess, Reversed};

use std::cmp::Ordering;

/// A strict weak order between elements of type `L` and elements of type `R`.
///
/// Implementations must be irreflexive and transitive, and incomparability
/// (`Equal`) must be transitive as well. Both inputs of a set operation must
/// be sorted by the same relation; this is a precondition that is not
/// checked.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::order::StrictWeakOrder;
///
/// struct CaseInsensitive;
///
/// impl StrictWeakOrder<str, str> for CaseInsensitive {
///     fn compare(&mut self, left: &str, right: &str) -> Ordering {
///         left.to_lowercase().cmp(&right.to_lowercase())
///     }
/// }
///
/// assert!(CaseInsensitive.equivalent("Rust", "rUST"));
/// ```
pub trait StrictWeakOrder<L: ?Sized, R: ?Sized = L> {
    /// Compares an element of the first sequence with one of the second.
    fn compare(&mut self, left: &L, right: &R) -> Ordering;

    /// Returns `true` if `left` precedes `right`.
    #[inline]
    fn less(&mut self, left: &L, right: &R) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Returns `true` if `right` precedes `left`.
    #[inline]
    fn greater(&mut self, left: &L, right: &R) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// Returns `true` if neither element precedes the other.
    #[inline]
    fn equivalent(&mut self, left: &L, right: &R) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

impl<L, R, F> StrictWeakOrder<L, R> for F
where
    L: ?Sized,
    R: ?Sized,
    F: FnMut(&L, &R) -> Ordering,
{
    #[inline]
    fn compare(&mut self, left: &L, right: &R) -> Ordering {
        self(left, right)
    }
}

/// The natural order given by `PartialOrd`.
///
/// Pairs that `partial_cmp` cannot order (such as `NaN` against anything) are
/// treated as equivalent.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::order::{Natural, StrictWeakOrder};
///
/// assert_eq!(Natural.compare("apple", "banana"), Ordering::Less);
/// assert_eq!(Natural.compare(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<L, R> StrictWeakOrder<L, R> for Natural
where
    L: PartialOrd<R> + ?Sized,
    R: ?Sized,
{
    #[inline]
    fn compare(&mut self, left: &L, right: &R) -> Ordering {
        left.partial_cmp(right).unwrap_or(Ordering::Equal)
    }
}
