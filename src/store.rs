//! Canonical range storage and the builders that produce it.
//!
//! A [`RangeStore`] is a sorted sequence of non-empty, pairwise disjoint
//! [`IntRange`]s. Three builders create one:
//!
//! - [`RangeStore::coalesce`] sorts and deduplicates arbitrary integers and
//!   merges consecutive values into maximal runs.
//! - [`RangeStore::from_ranges`] validates explicit `(lo, hi)` pairs. It
//!   accepts touching ranges such as `[1, 3)` followed by `[3, 5)` and keeps
//!   them split.
//! - [`RangeStore::from_trusted`] wraps ranges already known to be sorted and
//!   disjoint. The sweeps in the set module emit through
//!   [`RangeAccumulator`], which guarantees that.
//!
//! Stores with a handful of ranges keep them inline, larger ones spill to
//! the heap.

use malachite::Integer;
use smallvec::SmallVec;

use crate::error::FrozenIntSetError;
use crate::range::IntRange;

/// Number of ranges stored inline before spilling to the heap.
const INLINE_RANGES: usize = 2;

pub(crate) type RangeVec = SmallVec<[IntRange; INLINE_RANGES]>;

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "RangeStore invariant violated: ranges must be sorted and disjoint";

/// Returns `true` if every range starts at or after the end of its predecessor.
fn is_sorted_and_disjoint(ranges: &[IntRange]) -> bool {
    ranges.windows(2).all(|pair| pair[0].hi() <= pair[1].lo())
}

// =============================================================================
// RangeStore Definition
// =============================================================================

/// Sorted, disjoint ranges backing one set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct RangeStore {
    ranges: RangeVec,
}

impl RangeStore {
    #[inline]
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// A store holding one contiguous run.
    pub(crate) fn single(range: IntRange) -> Self {
        let mut ranges = RangeVec::new();
        ranges.push(range);
        Self { ranges }
    }

    /// Wraps ranges the caller guarantees to be sorted, disjoint and non-empty.
    #[inline]
    pub(crate) fn from_trusted(ranges: RangeVec) -> Self {
        debug_assert!(
            is_sorted_and_disjoint(&ranges),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { ranges }
    }

    /// Builds maximal runs from arbitrary integers.
    ///
    /// Duplicates are dropped; a run ends as soon as the next distinct value
    /// is not exactly one past the current upper bound.
    pub(crate) fn coalesce<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Integer>,
    {
        let mut values: Vec<Integer> = elements.into_iter().collect();
        let element_count = values.len();
        values.sort_unstable();
        values.dedup();

        let one = Integer::from(1);
        let mut ranges = RangeVec::new();
        let mut values = values.into_iter();
        if let Some(first) = values.next() {
            let mut hi = &first + &one;
            let mut lo = first;
            for value in values {
                if value == hi {
                    hi += &one;
                } else {
                    let next_hi = &value + &one;
                    ranges.push(IntRange::new_unchecked(
                        std::mem::replace(&mut lo, value),
                        std::mem::replace(&mut hi, next_hi),
                    ));
                }
            }
            ranges.push(IntRange::new_unchecked(lo, hi));
        }

        tracing::trace!(
            elements = element_count,
            ranges = ranges.len(),
            "coalesced integers into ranges"
        );
        Self::from_trusted(ranges)
    }

    /// Validates explicit `(lo, hi)` pairs without merging touching ones.
    ///
    /// Pairs are sorted first, so input order does not matter.
    ///
    /// # Errors
    ///
    /// - [`FrozenIntSetError::InvalidRange`] if some pair has `lo >= hi`.
    /// - [`FrozenIntSetError::OverlappingRanges`] if a pair starts before the
    ///   previous one ends.
    pub(crate) fn from_ranges(
        mut pairs: Vec<(Integer, Integer)>,
    ) -> Result<Self, FrozenIntSetError> {
        pairs.sort_unstable();

        let mut ranges = RangeVec::with_capacity(pairs.len());
        for (lo, hi) in pairs {
            if lo >= hi {
                tracing::debug!(%lo, %hi, "rejected empty or reversed range");
                return Err(FrozenIntSetError::InvalidRange { lo, hi });
            }
            if let Some(previous) = ranges.last()
                && lo < *previous.hi()
            {
                let previous_hi = previous.hi().clone();
                tracing::debug!(%lo, %previous_hi, "rejected overlapping range");
                return Err(FrozenIntSetError::OverlappingRanges { previous_hi, lo });
            }
            ranges.push(IntRange::new_unchecked(lo, hi));
        }
        Ok(Self::from_trusted(ranges))
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[IntRange] {
        &self.ranges
    }

    /// Number of stored ranges (not elements).
    #[inline]
    pub(crate) fn range_count(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Sum of all range spans.
    pub(crate) fn element_count(&self) -> Integer {
        self.ranges
            .iter()
            .fold(Integer::from(0), |total, range| total + range.len())
    }

    /// Finds the range holding `value` by binary search over lower bounds.
    pub(crate) fn locate(&self, value: &Integer) -> Option<&IntRange> {
        let position = self.ranges.partition_point(|range| range.lo() <= value);
        position
            .checked_sub(1)
            .map(|index| &self.ranges[index])
            .filter(|range| value < range.hi())
    }
}

// =============================================================================
// RangeAccumulator
// =============================================================================

/// Collects ranges emitted in ascending order of `lo` and merges any range
/// that overlaps or touches the last one, so the result is always maximal.
pub(crate) struct RangeAccumulator {
    ranges: RangeVec,
}

impl RangeAccumulator {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            ranges: RangeVec::new(),
        }
    }

    /// Appends `[lo, hi)`; empty spans are ignored.
    pub(crate) fn push(&mut self, lo: Integer, hi: Integer) {
        if lo >= hi {
            return;
        }
        match self.ranges.last_mut() {
            Some(last) if lo <= *last.hi() => {
                debug_assert!(last.lo() <= &lo, "ranges must arrive sorted by lo");
                last.stretch_to(&hi);
            }
            _ => self.ranges.push(IntRange::new_unchecked(lo, hi)),
        }
    }

    pub(crate) fn push_range(&mut self, range: &IntRange) {
        self.push(range.lo().clone(), range.hi().clone());
    }

    pub(crate) fn finish(self) -> RangeStore {
        RangeStore::from_trusted(self.ranges)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(store: &RangeStore) -> Vec<(Integer, Integer)> {
        store
            .as_slice()
            .iter()
            .map(|range| (range.lo().clone(), range.hi().clone()))
            .collect()
    }

    fn expected(bounds: &[(i64, i64)]) -> Vec<(Integer, Integer)> {
        bounds
            .iter()
            .map(|&(lo, hi)| (Integer::from(lo), Integer::from(hi)))
            .collect()
    }

    fn integers(values: &[i64]) -> Vec<Integer> {
        values.iter().copied().map(Integer::from).collect()
    }

    #[rstest]
    fn test_coalesce_empty_input() {
        let store = RangeStore::coalesce(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.element_count(), Integer::from(0));
    }

    #[rstest]
    #[case(&[5], &[(5, 6)])]
    #[case(&[3, 1, 2], &[(1, 4)])]
    #[case(&[1, 2, 3, 10, 11, 12], &[(1, 4), (10, 13)])]
    #[case(&[4, 4, 4, 5, 5], &[(4, 6)])]
    #[case(&[-3, -1, -2, 7], &[(-3, 0), (7, 8)])]
    fn test_coalesce_builds_maximal_runs(#[case] values: &[i64], #[case] bounds: &[(i64, i64)]) {
        let store = RangeStore::coalesce(integers(values));
        assert_eq!(pairs(&store), expected(bounds));
    }

    #[rstest]
    fn test_from_ranges_sorts_and_keeps_touching_ranges() {
        let store = RangeStore::from_ranges(expected(&[(3, 5), (1, 3)])).unwrap();
        assert_eq!(pairs(&store), expected(&[(1, 3), (3, 5)]));
        assert_eq!(store.range_count(), 2);
    }

    #[rstest]
    #[case(&[(5, 5)])]
    #[case(&[(5, 4)])]
    fn test_from_ranges_rejects_empty_or_reversed(#[case] bounds: &[(i64, i64)]) {
        let error = RangeStore::from_ranges(expected(bounds)).unwrap_err();
        assert!(matches!(error, FrozenIntSetError::InvalidRange { .. }));
    }

    #[rstest]
    fn test_from_ranges_rejects_overlap() {
        let error = RangeStore::from_ranges(expected(&[(2, 5), (1, 3)])).unwrap_err();
        assert_eq!(
            error,
            FrozenIntSetError::OverlappingRanges {
                previous_hi: Integer::from(3),
                lo: Integer::from(2),
            }
        );
    }

    #[rstest]
    fn test_locate() {
        let store = RangeStore::coalesce(integers(&[1, 2, 3, 10, 11]));
        assert_eq!(
            store.locate(&Integer::from(2)).map(|range| range.lo().clone()),
            Some(Integer::from(1))
        );
        assert_eq!(
            store.locate(&Integer::from(10)).map(|range| range.lo().clone()),
            Some(Integer::from(10))
        );
        assert!(store.locate(&Integer::from(0)).is_none());
        assert!(store.locate(&Integer::from(4)).is_none());
        assert!(store.locate(&Integer::from(12)).is_none());
    }

    #[rstest]
    fn test_accumulator_merges_touching_and_overlapping() {
        let mut accumulator = RangeAccumulator::new();
        accumulator.push(Integer::from(1), Integer::from(3));
        accumulator.push(Integer::from(3), Integer::from(5));
        accumulator.push(Integer::from(4), Integer::from(4));
        accumulator.push(Integer::from(4), Integer::from(6));
        accumulator.push(Integer::from(8), Integer::from(9));
        assert_eq!(pairs(&accumulator.finish()), expected(&[(1, 6), (8, 9)]));
    }

    #[rstest]
    fn test_debug_lists_ranges() {
        let store = RangeStore::from_ranges(expected(&[(1, 3), (3, 5)])).unwrap();
        assert_eq!(format!("{store:?}"), "RangeStore { ranges: [1..3, 3..5] }");
        assert_eq!(format!("{:?}", RangeStore::empty()), "RangeStore { ranges: [] }");
    }

    #[rstest]
    fn test_element_count() {
        let store = RangeStore::from_ranges(expected(&[(0, 10), (20, 25)])).unwrap();
        assert_eq!(store.element_count(), Integer::from(15));
    }
}
