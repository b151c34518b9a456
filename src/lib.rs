//! # setwise
//!
//! Lazy set algebra over sorted iterators.
//!
//! ## Overview
//!
//! Given two sequences that are already sorted by the same strict weak order,
//! this crate computes their difference, intersection, union and symmetric
//! difference with a merge-join. Nothing is materialized: each result is an
//! iterator that pulls from its inputs only when asked for the next element,
//! and touches every input element at most once.
//!
//! - **Ordering relations**: natural order, closures, strict "less than"
//!   predicates, key extraction and reversal ([`order`])
//! - **Element unification**: how union and symmetric difference merge two
//!   element types into one ([`unify`])
//! - **Cursor pairs**: the shared merge state of every engine ([`cursor`])
//! - **Set operations**: the four engines, their lazy views and adaptors
//!   ([`setops`])
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`control::Either`], source tags and positions
//! - `tracing`: trace events when an engine reaches its end or enters a fast path
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let first = vec![1, 2, 4, 6];
//! let second = vec![2, 3, 4, 5];
//!
//! let difference: Vec<i32> = difference(&first, &second).into_iter().copied().collect();
//! assert_eq!(difference, vec![1, 6]);
//!
//! let union: Vec<&i32> = union(&first, &second).into_iter().collect();
//! assert_eq!(union, vec![&1, &2, &3, &4, &5, &6]);
//! ```
//!
//! ## Preconditions
//!
//! Both inputs must be sorted by the relation passed to the operation. This is
//! not checked: unsorted inputs produce an unspecified (but memory-safe and
//! terminating) sequence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` trace event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($argument)*);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports the constructors, engines and traits needed for everyday use.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::cursor::MergePosition;
    pub use crate::error::*;
    pub use crate::order::*;
    pub use crate::setops::*;
    pub use crate::unify::*;
}

pub mod control;
pub mod cursor;
pub mod error;
pub mod order;
pub mod setops;
pub mod unify;
