//! Immutable integer set backed by canonical ranges.
//!
//! This module provides [`FrozenIntSet`], a set of arbitrary-precision
//! integers that stores runs of consecutive values as half-open ranges.
//!
//! # Overview
//!
//! - O(log R) `contains`, where R is the number of stored ranges
//! - O(R + S) union, intersection, difference, symmetric difference and
//!   disjointness/inclusion tests against a set of S ranges
//! - O(1) `len` and `hash` after the first call (both are memoized)
//! - O(1) `clone`: clones share the store and its memoized values
//!
//! All operations return new sets without modifying the original.
//!
//! # Examples
//!
//! ```rust
//! use frozen_intset::{FrozenIntSet, Integer};
//!
//! let set = FrozenIntSet::from_elements([1, 2, 3, 10, 11, 12]);
//! assert_eq!(set.len(), &Integer::from(6));
//! assert_eq!(set.range_count(), 2);
//! assert!(set.contains(&Integer::from(11)));
//! assert!(!set.contains(&Integer::from(4)));
//!
//! let values: Vec<Integer> = set.iter().collect();
//! assert_eq!(values.len(), 6);
//! ```
//!
//! # Representation Equality
//!
//! Equality and hashing compare the stored ranges, not the element sets.
//! [`FrozenIntSet::from_ranges`] keeps touching ranges split, so a set built
//! from `[(1, 3), (3, 5)]` holds the same integers as
//! `FrozenIntSet::from(1..5)` yet compares unequal to it. Every other
//! constructor and every algebra operation produces maximal ranges, so sets
//! built through them compare equal exactly when they hold the same
//! integers.

mod algebra;
mod compare;
mod index;
mod iter;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Range, RangeInclusive};

use malachite::Integer;
use rustc_hash::FxHasher;

use crate::error::FrozenIntSetError;
use crate::range::IntRange;
use crate::shared::{OnceCache, ReferenceCounter};
use crate::store::RangeStore;

pub use index::SliceSpec;
pub use iter::{FrozenIntSetIntoIterator, FrozenIntSetIterator, RangesIterator};

/// Shared allocation behind every clone of one set.
struct SetInner {
    store: RangeStore,
    length: OnceCache<Integer>,
    fingerprint: OnceCache<u64>,
}

// =============================================================================
// FrozenIntSet Definition
// =============================================================================

/// An immutable set of arbitrary-precision integers stored as sorted,
/// disjoint half-open ranges.
///
/// # Time Complexity
///
/// R and S are the range counts of the operands, K the number of selected
/// elements.
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `from_elements`        | O(n log n)        |
/// | `from_ranges`          | O(R log R)        |
/// | `contains`             | O(log R)          |
/// | `len`                  | O(R) once, then O(1) |
/// | `min` / `max`          | O(1)              |
/// | `get`                  | O(R)              |
/// | `slice`                | O(R + K)          |
/// | `union`                | O(R + S)          |
/// | `intersection`         | O(R + S)          |
/// | `difference`           | O(R + S)          |
/// | `symmetric_difference` | O(R + S)          |
/// | `is_disjoint`          | O(R + S)          |
/// | `is_subset`            | O(R + S)          |
///
/// # Examples
///
/// ```rust
/// use frozen_intset::{FrozenIntSet, Integer};
///
/// let set = FrozenIntSet::from(0..20);
/// let other = FrozenIntSet::from_elements([2, 3, 4, 6, 7, 9, 12, 18, 19, 20, 21]);
///
/// let common = &set & &other;
/// assert_eq!(common, FrozenIntSet::from_elements([2, 3, 4, 6, 7, 9, 12, 18, 19]));
/// assert_eq!(common.max(), Ok(Integer::from(19)));
/// ```
#[derive(Clone)]
pub struct FrozenIntSet {
    inner: ReferenceCounter<SetInner>,
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FrozenIntSet: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(FrozenIntSet: Send, Sync);

impl FrozenIntSet {
    /// Creates the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let set = FrozenIntSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(RangeStore::empty())
    }

    /// Wraps a store that already satisfies the sorted/disjoint invariant.
    pub(crate) fn from_store(store: RangeStore) -> Self {
        Self {
            inner: ReferenceCounter::new(SetInner {
                store,
                length: OnceCache::new(),
                fingerprint: OnceCache::new(),
            }),
        }
    }

    /// Builds a set from arbitrary integers, merging consecutive values into
    /// maximal ranges. Duplicates and input order are irrelevant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let set = FrozenIntSet::from_elements([5, 3, 4, 4, 9]);
    /// assert_eq!(format!("{set}"), "FrozenIntSet([3..6, 9..10])");
    /// ```
    #[must_use]
    pub fn from_elements<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        Self::from_store(RangeStore::coalesce(elements.into_iter().map(Into::into)))
    }

    /// Builds the contiguous set `[lo, hi)`. Empty when `lo >= hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::{FrozenIntSet, Integer};
    ///
    /// let set = FrozenIntSet::from_range(10, 15);
    /// assert_eq!(set.len(), &Integer::from(5));
    /// assert!(FrozenIntSet::from_range(3, 3).is_empty());
    /// ```
    #[must_use]
    pub fn from_range(lo: impl Into<Integer>, hi: impl Into<Integer>) -> Self {
        IntRange::new(lo, hi).map_or_else(Self::new, |range| {
            Self::from_store(RangeStore::single(range))
        })
    }

    /// Builds a set from explicit `(lo, hi)` pairs, each describing `[lo, hi)`.
    ///
    /// The pairs may arrive in any order. Touching pairs such as `(1, 3)` and
    /// `(3, 5)` are accepted and stored split, so the result may compare
    /// unequal to a coalesced set holding the same integers.
    ///
    /// # Errors
    ///
    /// - [`FrozenIntSetError::InvalidRange`] if a pair has `lo >= hi`.
    /// - [`FrozenIntSetError::OverlappingRanges`] if two pairs overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let set = FrozenIntSet::from_ranges([(10, 15), (1, 4)]).unwrap();
    /// assert_eq!(set.range_count(), 2);
    ///
    /// assert!(FrozenIntSet::from_ranges([(1, 3), (2, 5)]).is_err());
    /// ```
    pub fn from_ranges<I, L, H>(ranges: I) -> Result<Self, FrozenIntSetError>
    where
        I: IntoIterator<Item = (L, H)>,
        L: Into<Integer>,
        H: Into<Integer>,
    {
        let pairs = ranges
            .into_iter()
            .map(|(lo, hi)| (lo.into(), hi.into()))
            .collect();
        RangeStore::from_ranges(pairs).map(Self::from_store)
    }

    #[inline]
    pub(crate) fn ranges_slice(&self) -> &[IntRange] {
        self.inner.store.as_slice()
    }

    /// Returns `true` if both handles share one allocation.
    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of integers in the set.
    ///
    /// Computed on first use and memoized for this set and all its clones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::{FrozenIntSet, Integer};
    ///
    /// let huge = FrozenIntSet::from_range(0, Integer::from(u128::MAX));
    /// assert_eq!(huge.len(), &Integer::from(u128::MAX));
    /// ```
    #[must_use]
    pub fn len(&self) -> &Integer {
        self.inner
            .length
            .get_or_init(|| self.inner.store.element_count())
    }

    /// Returns `true` if the set contains no integers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.store.is_empty()
    }

    /// Returns the number of stored ranges.
    #[inline]
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.inner.store.range_count()
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Complexity
    ///
    /// O(log R), independent of the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::{FrozenIntSet, Integer};
    ///
    /// let set = FrozenIntSet::from_elements([1, 2, 3, 10, 11, 12, 17, 18, 19]);
    /// assert!(set.contains(&Integer::from(17)));
    /// assert!(!set.contains(&Integer::from(13)));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &Integer) -> bool {
        self.inner.store.locate(value).is_some()
    }

    /// Returns an iterator over the stored ranges in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::{FrozenIntSet, Integer};
    ///
    /// let set = FrozenIntSet::from_elements([1, 2, 3, 10, 11]);
    /// let bounds: Vec<(Integer, Integer)> = set
    ///     .ranges()
    ///     .map(|range| (range.lo().clone(), range.hi().clone()))
    ///     .collect();
    /// assert_eq!(
    ///     bounds,
    ///     vec![
    ///         (Integer::from(1), Integer::from(4)),
    ///         (Integer::from(10), Integer::from(12)),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn ranges(&self) -> RangesIterator<'_> {
        RangesIterator::new(self.ranges_slice())
    }

    /// Returns an iterator over the integers of the set in ascending order.
    ///
    /// Ranges are expanded lazily, one value at a time.
    #[must_use]
    pub fn iter(&self) -> FrozenIntSetIterator<'_> {
        FrozenIntSetIterator::new(self.ranges_slice())
    }

    /// Structural hash of the stored ranges, memoized like `len`.
    fn fingerprint(&self) -> u64 {
        *self.inner.fingerprint.get_or_init(|| {
            let mut hasher = FxHasher::default();
            self.inner.store.hash(&mut hasher);
            hasher.finish()
        })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for FrozenIntSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Into<Integer>> FromIterator<V> for FrozenIntSet {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<V: Into<Integer>> From<Range<V>> for FrozenIntSet {
    fn from(range: Range<V>) -> Self {
        Self::from_range(range.start, range.end)
    }
}

impl<V: Into<Integer>> From<RangeInclusive<V>> for FrozenIntSet {
    fn from(range: RangeInclusive<V>) -> Self {
        let (start, end) = range.into_inner();
        let end: Integer = end.into();
        Self::from_range(start, end + Integer::from(1))
    }
}

impl From<&IntRange> for FrozenIntSet {
    fn from(range: &IntRange) -> Self {
        Self::from_store(RangeStore::single(range.clone()))
    }
}

impl IntoIterator for FrozenIntSet {
    type Item = Integer;
    type IntoIter = FrozenIntSetIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        FrozenIntSetIntoIterator::new(self)
    }
}

impl<'a> IntoIterator for &'a FrozenIntSet {
    type Item = Integer;
    type IntoIter = FrozenIntSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for FrozenIntSet {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if let (Some(left), Some(right)) =
            (self.inner.fingerprint.get(), other.inner.fingerprint.get())
            && left != right
        {
            return false;
        }
        self.inner.store == other.inner.store
    }
}

impl Eq for FrozenIntSet {}

impl Hash for FrozenIntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl AsRef<[IntRange]> for FrozenIntSet {
    fn as_ref(&self) -> &[IntRange] {
        self.ranges_slice()
    }
}

impl fmt::Debug for FrozenIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FrozenIntSet(")?;
        formatter.debug_list().entries(self.ranges()).finish()?;
        formatter.write_str(")")
    }
}

impl fmt::Display for FrozenIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Multithread Tests (arc feature only)
// =============================================================================

#[cfg(all(test, feature = "arc"))]
mod multithread_tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    fn test_set_shared_across_threads() {
        let set = Arc::new(FrozenIntSet::from_elements([1, 2, 3, 10, 11]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let set_clone = Arc::clone(&set);
                thread::spawn(move || {
                    assert!(set_clone.contains(&Integer::from(2)));
                    assert!(!set_clone.contains(&Integer::from(4)));
                    set_clone.len().clone()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("Thread panicked"), Integer::from(5));
        }
    }

    #[rstest]
    fn test_concurrent_first_hash_agrees() {
        let set = FrozenIntSet::from(0..1000);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let set_clone = set.clone();
                thread::spawn(move || set_clone.fingerprint())
            })
            .collect();

        let fingerprints: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect();
        assert!(fingerprints.iter().all(|value| *value == set.fingerprint()));
    }
}
