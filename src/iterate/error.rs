//! Error types for the checked iteration surface.
//!
//! This module provides the error types reported when a checked
//! (`try_`) operation is handed an absent callable. Empty input sets,
//! zero matches, and zero selections are all normal, successful
//! outcomes and never surface here.

/// Represents an absent callable argument at a checked call site.
///
/// Raised by the `try_` surface when a required function value
/// (procedure, predicate, transform, or accumulator) is not supplied.
/// The operation produces no partial result in that case; the caller
/// must fix the call site rather than retry.
///
/// # Examples
///
/// ```rust
/// use setkit::iterate::MissingCallableError;
///
/// let error = MissingCallableError {
///     operation: "try_select",
///     parameter: "predicate",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "try_select: no predicate supplied. Fix the call site; the operation is not retried."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCallableError {
    /// The name of the operation that was invoked.
    pub operation: &'static str,
    /// The name of the missing callable parameter.
    pub parameter: &'static str,
}

impl std::fmt::Display for MissingCallableError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: no {} supplied. Fix the call site; the operation is not retried.",
            self.operation, self.parameter
        )
    }
}

impl std::error::Error for MissingCallableError {}

/// Represents errors that can occur in the iteration vocabulary.
///
/// This enum provides a unified error type for the checked surface.
/// Currently, it only contains `InvalidArgument`, but it is designed
/// to be extensible for future error kinds.
///
/// # Examples
///
/// ```rust
/// use setkit::iterate::{IterationError, MissingCallableError};
///
/// let error = IterationError::InvalidArgument(MissingCallableError {
///     operation: "try_each",
///     parameter: "procedure",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationError {
    /// A required callable argument was absent.
    InvalidArgument(MissingCallableError),
}

impl std::fmt::Display for IterationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for IterationError {}

static_assertions::assert_impl_all!(IterationError: Send, Sync, Clone);
static_assertions::assert_impl_all!(MissingCallableError: Send, Sync, Clone);
