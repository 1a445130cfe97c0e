//! Checked variants of the iteration vocabulary.

use std::hash::Hash;

use super::error::{IterationError, MissingCallableError};
use super::ops::SetIteration;

/// Returns the callable or the `InvalidArgument` error naming the
/// call site.
fn require_callable<F>(
    operation: &'static str,
    parameter: &'static str,
    callable: Option<F>,
) -> Result<F, IterationError> {
    callable.ok_or(IterationError::InvalidArgument(MissingCallableError {
        operation,
        parameter,
    }))
}

/// Fallible counterparts of [`SetIteration`] for optional callables.
///
/// In the plain vocabulary a callable is a generic parameter and can
/// never be absent; the type system subsumes the argument check. Call
/// sites that thread callables through `Option` (for example when a
/// callable is looked up from a registry or arrives over an FFI
/// boundary) use this surface instead: each `try_` method verifies the
/// callable is present before touching the set, reporting
/// [`IterationError::InvalidArgument`] otherwise.
///
/// When the callable is absent, nothing is scanned and no partial
/// result is produced. When it is present, the result is exactly that
/// of the corresponding [`SetIteration`] method. Nothing is retried
/// internally; `InvalidArgument` means the call site is wrong.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use setkit::prelude::*;
///
/// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
///
/// let evens = numbers.try_select(Some(|n: &i32| n % 2 == 0)).unwrap();
/// assert_eq!(evens.len(), 2);
///
/// let missing = numbers.try_select(None::<fn(&i32) -> bool>);
/// assert!(missing.is_err());
/// ```
pub trait CheckedSetIteration: SetIteration {
    /// Checked [`each`](SetIteration::each).
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `procedure` is
    /// `None`.
    fn try_each<F>(&self, procedure: Option<F>) -> Result<(), IterationError>
    where
        F: FnMut(&Self::Elem),
    {
        let procedure = require_callable("try_each", "procedure", procedure)?;
        self.each(procedure);
        Ok(())
    }

    /// Checked [`match_with`](SetIteration::match_with).
    ///
    /// A present predicate with no satisfying element is the normal
    /// `Ok(None)` outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `predicate` is
    /// `None`.
    fn try_match_with<P>(&self, predicate: Option<P>) -> Result<Option<&Self::Elem>, IterationError>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let predicate = require_callable("try_match_with", "predicate", predicate)?;
        Ok(self.match_with(predicate))
    }

    /// Checked [`select`](SetIteration::select).
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `predicate` is
    /// `None`.
    fn try_select<P>(&self, predicate: Option<P>) -> Result<Self, IterationError>
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        let predicate = require_callable("try_select", "predicate", predicate)?;
        Ok(self.select(predicate))
    }

    /// Checked [`reject`](SetIteration::reject).
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `predicate` is
    /// `None`.
    fn try_reject<P>(&self, predicate: Option<P>) -> Result<Self, IterationError>
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        let predicate = require_callable("try_reject", "predicate", predicate)?;
        Ok(self.reject(predicate))
    }

    /// Checked [`map`](SetIteration::map).
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `transform` is
    /// `None`.
    fn try_map<U, F>(&self, transform: Option<F>) -> Result<Self::Rebound<U>, IterationError>
    where
        Self: Sized,
        U: Clone + Eq + Hash,
        F: FnMut(&Self::Elem) -> U,
    {
        let transform = require_callable("try_map", "transform", transform)?;
        Ok(self.map(transform))
    }

    /// Checked [`reduce`](SetIteration::reduce).
    ///
    /// `initial` is an ordinary value and is never subject to the
    /// argument check; only the callable is required.
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::InvalidArgument`] if `accumulator` is
    /// `None`.
    fn try_reduce<A, F>(&self, initial: A, accumulator: Option<F>) -> Result<A, IterationError>
    where
        F: FnMut(A, &Self::Elem) -> A,
    {
        let accumulator = require_callable("try_reduce", "accumulator", accumulator)?;
        Ok(self.reduce(initial, accumulator))
    }
}

impl<S: SetIteration> CheckedSetIteration for S {}
