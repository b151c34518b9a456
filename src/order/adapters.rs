//! Relations built from predicates, keys and other relations.

use std::cmp::Ordering;
use std::fmt;

use super::StrictWeakOrder;

/// A relation defined by a strict "less than" predicate over one type.
///
/// This is the classic sorting-predicate form: `less(a, b)` must be a strict
/// weak order. Each comparison calls the predicate at most twice.
///
/// # Examples
///
/// ```rust
/// use setwise::order::{ByLess, StrictWeakOrder};
///
/// let mut by_abs = ByLess::new(|left: &i32, right: &i32| left.abs() < right.abs());
/// assert!(by_abs.equivalent(&-3, &3));
/// assert!(by_abs.less(&1, &-2));
/// ```
#[derive(Clone, Copy)]
pub struct ByLess<F> {
    less: F,
}

impl<F> ByLess<F> {
    /// Wraps a strict "less than" predicate.
    #[inline]
    pub const fn new(less: F) -> Self {
        Self { less }
    }
}

impl<T, F> StrictWeakOrder<T, T> for ByLess<F>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        if (self.less)(left, right) {
            Ordering::Less
        } else if (self.less)(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<F> fmt::Debug for ByLess<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByLess").finish_non_exhaustive()
    }
}

/// A relation comparing the `Ord` keys extracted from each element.
///
/// # Examples
///
/// ```rust
/// use setwise::order::{ByKey, StrictWeakOrder};
///
/// let mut by_name = ByKey::new(|pair: &(u32, &'static str)| pair.1);
/// assert!(by_name.less(&(9, "alice"), &(1, "bob")));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Wraps a key extraction function.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> StrictWeakOrder<T, T> for ByKey<F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    #[inline]
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        let left_key = (self.key)(left);
        let right_key = (self.key)(right);
        left_key.cmp(&right_key)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// Reverses another relation, for sequences sorted in descending order.
///
/// # Examples
///
/// ```rust
/// use setwise::order::{Natural, Reversed, StrictWeakOrder};
///
/// let mut descending = Reversed::new(Natural);
/// assert!(descending.less(&3, &1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O> {
    inner: O,
}

impl<O> Reversed<O> {
    /// Wraps the relation to reverse.
    #[inline]
    pub const fn new(inner: O) -> Self {
        Self { inner }
    }

    /// Returns the wrapped relation.
    #[inline]
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<L, R, O> StrictWeakOrder<L, R> for Reversed<O>
where
    L: ?Sized,
    R: ?Sized,
    O: StrictWeakOrder<L, R>,
{
    #[inline]
    fn compare(&mut self, left: &L, right: &R) -> Ordering {
        self.inner.compare(left, right).reverse()
    }
}
