//! Control structures shared by the set operations.
//!
//! - [`Either`]: an element that came from one of two sequences, the lossless
//!   output of union and symmetric difference
//!
//! # Examples
//!
//! ```rust
//! use setwise::control::Either;
//!
//! let from_second: Either<i32, &str> = Either::Right("b");
//! assert_eq!(from_second.map_right(str::len), Either::Right(1));
//! ```

mod either;

pub use either::Either;
