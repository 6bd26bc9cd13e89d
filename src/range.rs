//! Half-open integer ranges.

use std::fmt;
use std::ops::Range;

use malachite::Integer;

/// A non-empty half-open interval `[lo, hi)` of arbitrary-precision integers.
///
/// An `IntRange` always satisfies `lo < hi`; the only public way to obtain
/// one is through [`IntRange::new`], which rejects empty and reversed bounds,
/// or by reading the ranges of a [`FrozenIntSet`](crate::FrozenIntSet).
///
/// Ranges order lexicographically by `(lo, hi)`, which for the disjoint
/// ranges of one set is the same as ordering by `lo`.
///
/// # Examples
///
/// ```rust
/// use frozen_intset::{IntRange, Integer};
///
/// let range = IntRange::new(3, 7).unwrap();
/// assert_eq!(range.len(), Integer::from(4));
/// assert!(range.contains(&Integer::from(6)));
/// assert!(!range.contains(&Integer::from(7)));
///
/// assert!(IntRange::new(7, 7).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntRange {
    lo: Integer,
    hi: Integer,
}

impl IntRange {
    /// Creates the range `[lo, hi)`, or `None` when `lo >= hi`.
    #[must_use]
    pub fn new(lo: impl Into<Integer>, hi: impl Into<Integer>) -> Option<Self> {
        let (lo, hi) = (lo.into(), hi.into());
        (lo < hi).then_some(Self { lo, hi })
    }

    /// Creates a range without checking `lo < hi`.
    ///
    /// Callers inside the crate guarantee the bound order.
    #[inline]
    pub(crate) fn new_unchecked(lo: Integer, hi: Integer) -> Self {
        debug_assert!(lo < hi, "IntRange requires lo < hi");
        Self { lo, hi }
    }

    /// Raises the upper bound to `hi` if it is larger.
    #[inline]
    pub(crate) fn stretch_to(&mut self, hi: &Integer) {
        if *hi > self.hi {
            self.hi = hi.clone();
        }
    }

    /// Inclusive lower bound.
    #[inline]
    #[must_use]
    pub const fn lo(&self) -> &Integer {
        &self.lo
    }

    /// Exclusive upper bound.
    #[inline]
    #[must_use]
    pub const fn hi(&self) -> &Integer {
        &self.hi
    }

    /// Number of integers in the range, `hi - lo`. Always positive.
    #[must_use]
    pub fn len(&self) -> Integer {
        &self.hi - &self.lo
    }

    /// Always `false`: stored ranges are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `lo <= value < hi`.
    #[must_use]
    pub fn contains(&self, value: &Integer) -> bool {
        self.lo <= *value && *value < self.hi
    }

    /// Converts into the equivalent `std` range.
    #[must_use]
    pub fn to_range(&self) -> Range<Integer> {
        self.lo.clone()..self.hi.clone()
    }

    /// Splits the range into its bounds.
    #[must_use]
    pub fn into_bounds(self) -> (Integer, Integer) {
        (self.lo, self.hi)
    }
}

impl fmt::Debug for IntRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}..{}", self.lo, self.hi)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {})", self.lo, self.hi)
    }
}

impl From<IntRange> for Range<Integer> {
    fn from(range: IntRange) -> Self {
        range.lo..range.hi
    }
}
