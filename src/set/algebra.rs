//! Union, intersection, difference and symmetric difference as linear sweeps
//! over two sorted range sequences.
//!
//! Every sweep emits through [`RangeAccumulator`], so results are sorted and
//! maximal even when an operand was built from touching explicit ranges.

use std::borrow::Borrow;
use std::cmp::{max, min};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use malachite::Integer;

use super::FrozenIntSet;
use crate::store::RangeAccumulator;

impl FrozenIntSet {
    /// Returns the union of two sets.
    ///
    /// When either operand is empty the other one is returned as is, sharing
    /// its storage.
    ///
    /// # Complexity
    ///
    /// O(R + S) in the number of stored ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let low = FrozenIntSet::from_elements([1, 2, 3]);
    /// let high = FrozenIntSet::from_elements([3, 4, 5]);
    /// assert_eq!(low.union(&high), FrozenIntSet::from_elements([1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut accumulator = RangeAccumulator::new();
        let mut left = self.ranges_slice().iter().peekable();
        let mut right = other.ranges_slice().iter().peekable();
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(left_range), Some(right_range)) if right_range.lo() <= left_range.lo() => {
                    right.next()
                }
                (Some(_), _) => left.next(),
                (None, _) => right.next(),
            };
            let Some(range) = next else { break };
            accumulator.push_range(range);
        }
        Self::from_store(accumulator.finish())
    }

    /// Returns the intersection of two sets.
    ///
    /// # Complexity
    ///
    /// O(R + S) in the number of stored ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let a = FrozenIntSet::from(0..20);
    /// let b = FrozenIntSet::from_elements([2, 3, 4, 18, 19, 20, 21]);
    /// assert_eq!(a.intersection(&b), FrozenIntSet::from_elements([2, 3, 4, 18, 19]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }

        let (left, right) = (self.ranges_slice(), other.ranges_slice());
        let mut accumulator = RangeAccumulator::new();
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let (a, b) = (&left[i], &right[j]);
            let lo = max(a.lo(), b.lo());
            let hi = min(a.hi(), b.hi());
            if lo < hi {
                accumulator.push(lo.clone(), hi.clone());
            }
            // Advance whichever range ends first.
            if a.hi() < b.hi() {
                i += 1;
            } else {
                j += 1;
            }
        }
        Self::from_store(accumulator.finish())
    }

    /// Returns the integers of `self` that are not in `other`.
    ///
    /// An empty `other` returns `self` as is, sharing its storage.
    ///
    /// # Complexity
    ///
    /// O(R + S) in the number of stored ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let a = FrozenIntSet::from_elements([1, 2, 3, 4, 5]);
    /// let b = FrozenIntSet::from_elements([2, 3]);
    /// assert_eq!(a.difference(&b), FrozenIntSet::from_elements([1, 4, 5]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Self::new();
        }
        if other.is_empty() {
            return self.clone();
        }

        let cuts = other.ranges_slice();
        let mut accumulator = RangeAccumulator::new();
        let mut j = 0;
        for range in self.ranges_slice() {
            let mut cursor = range.lo().clone();
            while j < cuts.len() && *cuts[j].hi() <= cursor {
                j += 1;
            }
            while j < cuts.len() && cuts[j].lo() < range.hi() {
                let cut = &cuts[j];
                if *cut.lo() > cursor {
                    accumulator.push(cursor.clone(), min(cut.lo(), range.hi()).clone());
                }
                if *cut.hi() > cursor {
                    cursor = cut.hi().clone();
                }
                // The cut may extend into the next range; keep it.
                if cursor >= *range.hi() {
                    break;
                }
                j += 1;
            }
            if cursor < *range.hi() {
                accumulator.push(cursor, range.hi().clone());
            }
        }
        Self::from_store(accumulator.finish())
    }

    /// Returns the integers in exactly one of the two sets, computed as
    /// `(self - other) | (other - self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let a = FrozenIntSet::from_elements([1, 2, 3]);
    /// let b = FrozenIntSet::from_elements([3, 4]);
    /// assert_eq!(a.symmetric_difference(&b), FrozenIntSet::from_elements([1, 2, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Union with an arbitrary integer collection, coalesced first as by
    /// [`FrozenIntSet::from_elements`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let set = FrozenIntSet::from(1..4);
    /// assert_eq!(set.union_elements([4, 9]), FrozenIntSet::from_elements([1, 2, 3, 4, 9]));
    /// ```
    #[must_use]
    pub fn union_elements<I, V>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.union(&Self::from_elements(elements))
    }

    /// Intersection with an arbitrary integer collection.
    #[must_use]
    pub fn intersection_elements<I, V>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.intersection(&Self::from_elements(elements))
    }

    /// Difference with an arbitrary integer collection.
    #[must_use]
    pub fn difference_elements<I, V>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.difference(&Self::from_elements(elements))
    }

    /// Symmetric difference with an arbitrary integer collection.
    #[must_use]
    pub fn symmetric_difference_elements<I, V>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Integer>,
    {
        self.symmetric_difference(&Self::from_elements(elements))
    }

    /// Returns the union of `self` with every set in `others`, folding left.
    ///
    /// With no other sets, `self` is returned as is.
    #[must_use]
    pub fn union_many<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        others
            .into_iter()
            .fold(self.clone(), |accumulated, other| {
                accumulated.union(Borrow::<Self>::borrow(&other))
            })
    }

    /// Returns the intersection of `self` with every set in `others`,
    /// folding left.
    ///
    /// With no other sets, `self` is returned as is.
    #[must_use]
    pub fn intersection_many<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        others
            .into_iter()
            .fold(self.clone(), |accumulated, other| {
                accumulated.intersection(Borrow::<Self>::borrow(&other))
            })
    }

    /// Returns the union of all given sets, or the empty set when none are
    /// given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let sets = [
    ///     FrozenIntSet::from(0..5),
    ///     FrozenIntSet::from(10..15),
    ///     FrozenIntSet::from(3..12),
    /// ];
    /// assert_eq!(FrozenIntSet::union_all(&sets), FrozenIntSet::from(0..15));
    /// assert!(FrozenIntSet::union_all(Vec::<FrozenIntSet>::new()).is_empty());
    /// ```
    #[must_use]
    pub fn union_all<I>(sets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        let mut sets = sets.into_iter();
        sets.next()
            .map_or_else(Self::new, |first| Borrow::<Self>::borrow(&first).union_many(sets))
    }

    /// Returns the integers common to all given sets, or the empty set when
    /// none are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::FrozenIntSet;
    ///
    /// let sets = [
    ///     FrozenIntSet::from(8..11),
    ///     FrozenIntSet::from(10..15),
    ///     FrozenIntSet::from(3..12),
    /// ];
    /// assert_eq!(FrozenIntSet::intersection_all(&sets), FrozenIntSet::from_elements([10]));
    /// ```
    #[must_use]
    pub fn intersection_all<I>(sets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        let mut sets = sets.into_iter();
        sets.next().map_or_else(Self::new, |first| {
            Borrow::<Self>::borrow(&first).intersection_many(sets)
        })
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

macro_rules! impl_set_operator {
    ($trait:ident, $method:ident, $operation:ident) => {
        impl $trait<&FrozenIntSet> for &FrozenIntSet {
            type Output = FrozenIntSet;

            fn $method(self, rhs: &FrozenIntSet) -> FrozenIntSet {
                self.$operation(rhs)
            }
        }

        impl $trait<FrozenIntSet> for FrozenIntSet {
            type Output = FrozenIntSet;

            fn $method(self, rhs: FrozenIntSet) -> FrozenIntSet {
                self.$operation(&rhs)
            }
        }

        impl $trait<&FrozenIntSet> for FrozenIntSet {
            type Output = FrozenIntSet;

            fn $method(self, rhs: &FrozenIntSet) -> FrozenIntSet {
                self.$operation(rhs)
            }
        }
    };
}

impl_set_operator!(BitOr, bitor, union);
impl_set_operator!(BitAnd, bitand, intersection);
impl_set_operator!(Sub, sub, difference);
impl_set_operator!(BitXor, bitxor, symmetric_difference);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(values: &[i64]) -> FrozenIntSet {
        FrozenIntSet::from_elements(values.iter().copied())
    }

    fn bounds(set: &FrozenIntSet) -> Vec<(Integer, Integer)> {
        set.ranges()
            .map(|range| (range.lo().clone(), range.hi().clone()))
            .collect()
    }

    // =========================================================================
    // Union Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 2, 3], &[3, 4, 5], &[1, 2, 3, 4, 5])]
    #[case(&[1, 2, 3], &[2, 3, 4], &[1, 2, 3, 4])]
    #[case(&[1, 2], &[3, 4], &[1, 2, 3, 4])]
    #[case(&[1, 2], &[4, 5], &[1, 2, 4, 5])]
    #[case(&[1, 5, 9], &[3, 7], &[1, 3, 5, 7, 9])]
    fn test_union(#[case] a: &[i64], #[case] b: &[i64], #[case] expected: &[i64]) {
        assert_eq!(set(a).union(&set(b)), set(expected));
        assert_eq!(set(b).union(&set(a)), set(expected));
    }

    #[rstest]
    fn test_union_with_empty_shares_operand() {
        let a = set(&[1, 2, 3]);
        let empty = FrozenIntSet::new();
        assert!(a.union(&empty).ptr_eq(&a));
        assert!(empty.union(&a).ptr_eq(&a));
    }

    #[rstest]
    fn test_union_merges_touching_explicit_ranges() {
        let split = FrozenIntSet::from_ranges([(1, 3), (3, 5)]).unwrap();
        let other = set(&[10]);
        let union = split.union(&other);
        assert_eq!(
            bounds(&union),
            vec![
                (Integer::from(1), Integer::from(5)),
                (Integer::from(10), Integer::from(11)),
            ]
        );
    }

    // =========================================================================
    // Intersection Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 2, 3], &[3, 4, 5], &[3])]
    #[case(&[1, 2, 3], &[2, 3, 4], &[2, 3])]
    #[case(&[1, 2], &[3, 4], &[])]
    #[case(&[1, 2], &[4, 5], &[])]
    #[case(&[0, 1, 2], &[7, 8, 9], &[])]
    fn test_intersection(#[case] a: &[i64], #[case] b: &[i64], #[case] expected: &[i64]) {
        assert_eq!(set(a).intersection(&set(b)), set(expected));
        assert_eq!(set(b).intersection(&set(a)), set(expected));
    }

    #[rstest]
    fn test_intersection_range_against_scattered() {
        let range = FrozenIntSet::from(0..20);
        let scattered = set(&[2, 3, 4, 6, 7, 9, 12, 18, 19, 20, 21]);
        let expected = set(&[2, 3, 4, 6, 7, 9, 12, 18, 19]);
        assert_eq!(range.intersection(&scattered), expected);
        assert_eq!(scattered.intersection(&range), expected);
    }

    #[rstest]
    fn test_intersection_merges_split_output() {
        let split = FrozenIntSet::from_ranges([(0, 5), (5, 10)]).unwrap();
        let wide = FrozenIntSet::from(2..8);
        assert_eq!(bounds(&split.intersection(&wide)), bounds(&wide));
    }

    // =========================================================================
    // Difference Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 2, 3, 4, 5], &[2, 3], &[1, 4, 5])]
    #[case(&[1, 2, 3, 4, 8, 9], &[2, 3, 4], &[1, 8, 9])]
    #[case(&[1, 2, 3], &[1, 2, 3], &[])]
    #[case(&[1, 2, 3], &[0, 4], &[1, 2, 3])]
    #[case(&[1, 2, 3, 7, 8, 9], &[3, 4, 5, 6, 7], &[1, 2, 8, 9])]
    #[case(&[5], &[1, 2, 3, 4, 5, 6], &[])]
    fn test_difference(#[case] a: &[i64], #[case] b: &[i64], #[case] expected: &[i64]) {
        assert_eq!(set(a).difference(&set(b)), set(expected));
    }

    #[rstest]
    fn test_difference_with_empty_operands() {
        let a = FrozenIntSet::from(1..10);
        let empty = FrozenIntSet::new();
        assert_eq!(empty.difference(&a), FrozenIntSet::new());
        assert!(a.difference(&empty).ptr_eq(&a));
    }

    #[rstest]
    fn test_difference_cut_spanning_several_ranges() {
        let a = set(&[1, 2, 5, 6, 9, 10]);
        let cut = FrozenIntSet::from(2..10);
        assert_eq!(a.difference(&cut), set(&[1, 10]));
    }

    #[rstest]
    fn test_difference_against_split_ranges() {
        let a = FrozenIntSet::from(0..10);
        let split = FrozenIntSet::from_ranges([(2, 4), (4, 6)]).unwrap();
        assert_eq!(a.difference(&split), set(&[0, 1, 6, 7, 8, 9]));
    }

    // =========================================================================
    // Symmetric Difference Tests
    // =========================================================================

    #[rstest]
    fn test_symmetric_difference() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);
        assert_eq!(a.symmetric_difference(&b), set(&[1, 2, 4]));
        assert_eq!(b.symmetric_difference(&a), set(&[1, 2, 4]));
        assert!(a.symmetric_difference(&a).is_empty());
    }

    // =========================================================================
    // Operator Tests
    // =========================================================================

    #[rstest]
    fn test_operators_match_methods() {
        let a = set(&[1, 2, 3, 4]);
        let b = set(&[3, 4, 5]);
        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a & &b, a.intersection(&b));
        assert_eq!(&a - &b, a.difference(&b));
        assert_eq!(&a ^ &b, a.symmetric_difference(&b));
        assert_eq!(a.clone() | &b, a.union(&b));
        assert_eq!(a.clone() - b.clone(), set(&[1, 2]));
    }

    // =========================================================================
    // Element Coercion Tests
    // =========================================================================

    #[rstest]
    fn test_element_forms_match_set_forms() {
        let a = set(&[1, 2, 3, 7]);
        let elements = [3, 4, 7, 8, 8];
        let b = set(&elements);
        assert_eq!(a.union_elements(elements), a.union(&b));
        assert_eq!(a.intersection_elements(elements), a.intersection(&b));
        assert_eq!(a.difference_elements(elements), a.difference(&b));
        assert_eq!(
            a.symmetric_difference_elements(elements),
            a.symmetric_difference(&b)
        );
        assert!(a.difference_elements(Vec::<i64>::new()).ptr_eq(&a));
    }

    // =========================================================================
    // N-ary Tests
    // =========================================================================

    #[rstest]
    fn test_union_all() {
        let sets = vec![set(&[1, 2, 3]), set(&[1, 3, 5]), set(&[3, 4, 7])];
        assert_eq!(FrozenIntSet::union_all(&sets), set(&[1, 2, 3, 4, 5, 7]));
        assert_eq!(FrozenIntSet::union_all(sets), set(&[1, 2, 3, 4, 5, 7]));
        assert_eq!(
            FrozenIntSet::union_all(Vec::<FrozenIntSet>::new()),
            FrozenIntSet::new()
        );
    }

    #[rstest]
    fn test_intersection_all() {
        let sets = [
            FrozenIntSet::from(8..11),
            FrozenIntSet::from(10..15),
            FrozenIntSet::from(3..12),
        ];
        assert_eq!(FrozenIntSet::intersection_all(&sets), set(&[10]));

        let disjoint = [
            FrozenIntSet::from(8..11),
            FrozenIntSet::from(10..15),
            FrozenIntSet::from(3..12),
            FrozenIntSet::from(20..22),
        ];
        assert!(FrozenIntSet::intersection_all(&disjoint).is_empty());
        assert!(FrozenIntSet::intersection_all(Vec::<FrozenIntSet>::new()).is_empty());
    }

    #[rstest]
    fn test_many_without_arguments_returns_receiver() {
        let a = set(&[1, 2]);
        assert!(a.union_many(Vec::<FrozenIntSet>::new()).ptr_eq(&a));
        assert!(a.intersection_many(Vec::<FrozenIntSet>::new()).ptr_eq(&a));
    }

    #[rstest]
    fn test_many_folds_every_argument() {
        let a = set(&[1, 2, 3, 4, 5]);
        let b = set(&[2, 3, 4]);
        let c = set(&[3, 4, 9]);
        assert_eq!(a.union_many([&b, &c]), set(&[1, 2, 3, 4, 5, 9]));
        assert_eq!(a.intersection_many([&b, &c]), set(&[3, 4]));
    }
}
