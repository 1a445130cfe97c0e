//! The set capability consumed by the iteration vocabulary.
//!
//! The iteration operations in [`crate::iterate`] do not own a set
//! implementation. They are written against [`SetStore`], a minimal
//! capability trait describing what they actually need from a set:
//! construction, uniqueness-preserving insertion, membership testing,
//! and a traversal that yields every element exactly once in
//! unspecified order.
//!
//! Uniqueness is defined by the element type's `Eq`/`Hash` relation.
//! Iteration order is a genuine semantic property of the capability:
//! it is unspecified and may differ between two traversals of the same
//! set, so nothing built on top of this trait may rely on a particular
//! order.
//!
//! An adapter impl is provided for [`std::collections::HashSet`] over
//! any default-constructible hasher, which also covers the optional
//! fast-hasher aliases behind the `fxhash` and `ahash` feature flags.

mod capability;
mod hashed;

pub use capability::SetStore;

#[cfg(feature = "ahash")]
pub use hashed::AhashSet;

#[cfg(feature = "fxhash")]
pub use hashed::FxSet;
