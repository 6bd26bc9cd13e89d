//! Disjointness and inclusion tests.
//!
//! All tests sweep the stored ranges of both operands and never expand
//! individual integers. Their results match the element-wise definitions,
//! including for sets built from touching explicit ranges.

use malachite::Integer;

use super::FrozenIntSet;

impl FrozenIntSet {
    /// Returns `true` if `self` and `other` have no integer in common.
    ///
    /// Stops at the first overlapping pair of ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let a = FrozenIntSet::from_elements([1, 2]);
    /// let b = FrozenIntSet::from_elements([3, 4]);
    /// let c = FrozenIntSet::from_elements([2, 3]);
    ///
    /// assert!(a.is_disjoint(&b));
    /// assert!(!a.is_disjoint(&c));
    /// assert!(FrozenIntSet::new().is_disjoint(&a));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (left, right) = (self.ranges_slice(), other.ranges_slice());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let (a, b) = (&left[i], &right[j]);
            if a.hi() <= b.lo() {
                i += 1;
            } else if b.hi() <= a.lo() {
                j += 1;
            } else {
                return false;
            }
        }
        true
    }

    /// Returns `true` if every integer of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let small = FrozenIntSet::from_elements([1, 2]);
    /// let large = FrozenIntSet::from_elements([1, 2, 3, 10]);
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(small.is_subset(&small));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        let mut covers = other.ranges_slice().iter().peekable();
        for range in self.ranges_slice() {
            let mut cursor = range.lo();
            while cursor < range.hi() {
                match covers.peek() {
                    Some(&cover) if cover.hi() <= cursor => {
                        covers.next();
                    }
                    // Touching covers are walked one after the other.
                    Some(&cover) if cover.lo() <= cursor => cursor = cover.hi(),
                    _ => return false,
                }
            }
        }
        true
    }

    /// Returns `true` if every integer of `self` appears in `elements`.
    #[must_use]
    pub fn is_subset_of_elements<I, V>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.is_subset(&Self::from_elements(elements))
    }

    /// Returns `true` if no integer of `elements` is in `self`.
    #[must_use]
    pub fn is_disjoint_from_elements<I, V>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.is_disjoint(&Self::from_elements(elements))
    }

    /// Returns `true` if every integer of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let small = FrozenIntSet::from_elements([1, 2]);
    /// let large = FrozenIntSet::from_elements([1, 2, 3, 10, 11, 12]);
    ///
    /// assert!(small.is_proper_subset(&large));
    /// assert!(!small.is_proper_subset(&small));
    /// ```
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and strictly larger.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }
}
