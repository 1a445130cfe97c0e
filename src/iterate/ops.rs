//! The `SetIteration` extension trait.

use std::hash::Hash;

use crate::store::SetStore;

/// Higher-order iteration over an unordered set.
///
/// `SetIteration` is blanket-implemented for every [`SetStore`], so
/// bringing the trait into scope is enough to call the vocabulary on
/// any adapted set type.
///
/// # Ordering
///
/// Every operation scans the set in its native, unspecified order.
/// Two invocations over the same set may observe different orders, so
/// supplied callables must not depend on the order in which elements
/// arrive. For [`map`](Self::map) this matters only when the transform
/// has side effects; for [`reduce`](Self::reduce) it makes
/// order-independence of the accumulator a caller precondition.
///
/// # Purity
///
/// Predicates and transforms are expected to be pure. The vocabulary
/// never stores or re-inspects a callable beyond the call in which it
/// is used.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use setkit::prelude::*;
///
/// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
///
/// let evens = numbers.select(|n| n % 2 == 0);
/// let odds = numbers.reject(|n| n % 2 == 0);
///
/// assert_eq!(evens.union(&odds).count(), numbers.len());
/// assert!(evens.is_disjoint(&odds));
/// ```
pub trait SetIteration: SetStore {
    /// Invokes `procedure` exactly once for every element of the set.
    ///
    /// Elements arrive in the set's native, unspecified order. The
    /// operation provides no isolation or ordering guarantee beyond
    /// "every element exactly once"; any side effect is the
    /// procedure's own.
    ///
    /// # Arguments
    ///
    /// * `procedure` - A unary procedure run once per element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// let mut total = 0;
    /// numbers.each(|n| total += n);
    /// assert_eq!(total, 6);
    /// ```
    fn each<F>(&self, mut procedure: F)
    where
        F: FnMut(&Self::Elem),
    {
        for element in self.iter() {
            procedure(element);
        }
    }

    /// Returns some element satisfying `predicate`, or `None`.
    ///
    /// The scan short-circuits: it stops at the first success, so the
    /// predicate is not necessarily invoked for every element. Over an
    /// unordered set "first" is not well-defined; when several
    /// elements satisfy the predicate, which one is returned is
    /// unspecified. Callers needing a particular element must arrange
    /// for at most one match or assert only "some matching element".
    ///
    /// Absence of a match is a normal outcome, reported as `None`,
    /// never an error.
    ///
    /// # Arguments
    ///
    /// * `predicate` - The test an element must pass to be returned
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(numbers.match_with(|n| *n > 3), Some(&4));
    /// assert_eq!(numbers.match_with(|n| *n > 10), None);
    /// ```
    #[must_use]
    fn match_with<P>(&self, mut predicate: P) -> Option<&Self::Elem>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        self.iter().find(|&element| predicate(element))
    }

    /// Returns a new set of the elements satisfying `predicate`.
    ///
    /// Performs a full scan; the result's cardinality is at most the
    /// source's. When nothing matches the result is an empty set, not
    /// a failure. The source set is left untouched.
    ///
    /// # Arguments
    ///
    /// * `predicate` - The test an element must pass to be kept
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let evens = numbers.select(|n| n % 2 == 0);
    ///
    /// let expected: HashSet<i32> = [2, 4].into_iter().collect();
    /// assert_eq!(evens, expected);
    /// assert_eq!(numbers.len(), 4); // Source unchanged
    /// ```
    #[must_use]
    fn select<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut result = Self::empty();
        for element in self.iter() {
            if predicate(element) {
                result = result.adjoin(element.clone());
            }
        }
        result
    }

    /// Returns a new set of the elements *not* satisfying `predicate`.
    ///
    /// The exact complement of [`select`](Self::select) under the same
    /// predicate: for any set `S` and predicate `p`, `select(S, p)`
    /// and `reject(S, p)` are disjoint and their union equals `S`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let odds = numbers.reject(|n| n % 2 == 0);
    ///
    /// let expected: HashSet<i32> = [1, 3].into_iter().collect();
    /// assert_eq!(odds, expected);
    /// ```
    #[must_use]
    fn reject<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        self.select(|element| !predicate(element))
    }

    /// Applies `transform` to every element, collecting the results
    /// into a new set of the transform's result type.
    ///
    /// Performs a full scan; the transform is invoked exactly once per
    /// element. Because the destination is itself a set, equal outputs
    /// of distinct inputs collapse into a single element, so the
    /// result's cardinality is at most the source's. This collapse is
    /// a documented consequence of mapping into a set, not a defect.
    ///
    /// The order in which elements are transformed is unspecified and
    /// must not be relied upon unless the transform is free of side
    /// effects.
    ///
    /// # Arguments
    ///
    /// * `transform` - The function applied to each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// let labels = numbers.map(|n| format!("#{n}"));
    /// assert_eq!(labels.len(), 3);
    /// assert!(labels.contains("#2"));
    ///
    /// // Equal outputs collapse under uniqueness.
    /// let collapsed = numbers.map(|_| 0);
    /// assert_eq!(collapsed.len(), 1);
    /// ```
    #[must_use]
    fn map<U, F>(&self, mut transform: F) -> Self::Rebound<U>
    where
        Self: Sized,
        U: Clone + Eq + Hash,
        F: FnMut(&Self::Elem) -> U,
    {
        let mut result = <Self::Rebound<U> as SetStore>::empty();
        for element in self.iter() {
            result = result.adjoin(transform(element));
        }
        result
    }

    /// Folds every element into a single accumulated value.
    ///
    /// Starting from `initial`, combines the running accumulator with
    /// each element via `accumulator`, in the set's native,
    /// unspecified order. For a deterministic result the accumulator
    /// function must be insensitive to application order (commutative
    /// and associative in effect); this is a caller precondition, not
    /// something the operation enforces.
    ///
    /// Folding an empty set returns `initial` unchanged.
    ///
    /// # Arguments
    ///
    /// * `initial` - The value of the accumulation at its start
    /// * `accumulator` - Combines the running value with an element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use setkit::prelude::*;
    ///
    /// let numbers: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(numbers.reduce(0, |total, n| total + n), 10);
    ///
    /// let empty: HashSet<i32> = HashSet::new();
    /// assert_eq!(empty.reduce(7, |total, n| total + n), 7);
    /// ```
    #[must_use]
    fn reduce<A, F>(&self, initial: A, accumulator: F) -> A
    where
        F: FnMut(A, &Self::Elem) -> A,
    {
        self.iter().fold(initial, accumulator)
    }
}

impl<S: SetStore> SetIteration for S {}
