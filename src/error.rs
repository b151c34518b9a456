//! Error types for positional access.
//!
//! The engines in [`crate::setops`] expose a positional interface (`current`,
//! `advance`, `is_end`) next to the `Iterator` protocol. Misusing that
//! interface (reading or advancing at the terminal position) is a contract
//! violation, reported through [`PositionError`].

/// Represents a contract violation of the positional interface of an engine.
///
/// `advance` panics with this error's message; `try_advance` and
/// `try_current` return it instead.
///
/// # Examples
///
/// ```rust
/// use setwise::error::PositionError;
///
/// let error = PositionError::past_the_end("Union", "advance");
/// assert_eq!(
///     format!("{}", error),
///     "Union::advance: position is past the end of the sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionError {
    /// The engine has reached its terminal position.
    PastTheEnd {
        /// The name of the engine where the error occurred.
        operation: &'static str,
        /// The name of the method that was called.
        method: &'static str,
    },
}

impl PositionError {
    /// Creates a [`PositionError::PastTheEnd`] for the given engine and method.
    #[inline]
    #[must_use]
    pub const fn past_the_end(operation: &'static str, method: &'static str) -> Self {
        Self::PastTheEnd { operation, method }
    }

    /// Returns the name of the engine where the error occurred.
    #[inline]
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::PastTheEnd { operation, .. } => *operation,
        }
    }
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PastTheEnd { operation, method } => write!(
                formatter,
                "{operation}::{method}: position is past the end of the sequence"
            ),
        }
    }
}

impl std::error::Error for PositionError {}
