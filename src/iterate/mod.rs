//! Smalltalk-style iteration vocabulary for sets.
//!
//! This module provides the six higher-order operations layered over
//! the [`SetStore`](crate::store::SetStore) capability:
//!
//! - [`SetIteration::each`]: Element-wise iteration for side effects
//! - [`SetIteration::match_with`]: Short-circuiting predicate search
//! - [`SetIteration::select`]: Filtering to satisfying elements
//! - [`SetIteration::reject`]: Filtering to non-satisfying elements
//! - [`SetIteration::map`]: Element-wise transformation into a new set
//! - [`SetIteration::reduce`]: Fold/accumulation to a single value
//!
//! All six execute synchronously on the caller's thread, hold no state
//! across invocations, and never mutate the source set. The only
//! cross-element state anywhere in the vocabulary is `reduce`'s running
//! accumulator, which is local to one call and discarded at completion.
//!
//! The callables are ordinary closures supplied as generic parameters,
//! so in this surface a "missing callable" cannot be expressed at all.
//! Call sites that thread optional callables instead go through the
//! checked surface, [`CheckedSetIteration`], whose `try_` methods
//! report an absent callable as
//! [`IterationError::InvalidArgument`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use setkit::prelude::*;
//!
//! let reusable: HashSet<&str> = ["idle", "loading", "done"].into_iter().collect();
//!
//! // reject is the tool for dropping elements from a set.
//! let quiet = reusable.reject(|state| *state == "loading");
//! assert_eq!(quiet.len(), 2);
//!
//! // Transforms land in a new set of the transform's result type.
//! let tagged = reusable.map(|state| format!("x-{state}"));
//! assert!(tagged.contains("x-idle"));
//! ```

mod checked;
mod error;
mod ops;

pub use checked::CheckedSetIteration;
pub use error::{IterationError, MissingCallableError};
pub use ops::SetIteration;
