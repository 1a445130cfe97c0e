//! `SetStore` adapter for the standard library's `HashSet`.

use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::{BuildHasher, Hash};

use super::capability::SetStore;

/// Any `HashSet` with a default-constructible hasher is a `SetStore`.
///
/// This single impl covers the std `RandomState` default as well as
/// the fast-hasher aliases behind the `fxhash` and `ahash` features.
/// No ordered container is adapted: the capability's iteration order
/// is unspecified by contract, and an ordered adapter would expose a
/// deterministic order.
impl<T, S> SetStore for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    type Elem = T;

    type Rebound<U: Clone + Eq + Hash> = HashSet<U, S>;

    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }

    #[inline]
    fn adjoin(mut self, element: T) -> Self {
        self.insert(element);
        self
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

/// `HashSet` keyed by the Fx hasher.
///
/// Fx is a fast, non-cryptographic hasher. It is deterministic across
/// processes, so do not expose sets keyed by it to untrusted input.
#[cfg(feature = "fxhash")]
pub type FxSet<T> = HashSet<T, rustc_hash::FxBuildHasher>;

/// `HashSet` keyed by aHash.
///
/// aHash keeps per-process random keys, trading reproducibility for
/// DoS resistance at speeds close to Fx.
#[cfg(feature = "ahash")]
pub type AhashSet<T> = HashSet<T, ahash::RandomState>;
