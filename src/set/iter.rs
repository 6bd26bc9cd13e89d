//! Iterators over the elements and ranges of a [`FrozenIntSet`].

use std::iter::FusedIterator;

use malachite::Integer;

use super::FrozenIntSet;
use crate::range::IntRange;

// =============================================================================
// Element Iterators
// =============================================================================

/// An iterator over the integers of a [`FrozenIntSet`], in ascending order.
///
/// Ranges are expanded one value at a time, so a set holding a huge range
/// can be iterated partially without materializing it.
pub struct FrozenIntSetIterator<'a> {
    ranges: std::slice::Iter<'a, IntRange>,
    /// Next value to yield and the end of the range it belongs to.
    current: Option<(Integer, &'a Integer)>,
}

impl<'a> FrozenIntSetIterator<'a> {
    pub(super) fn new(ranges: &'a [IntRange]) -> Self {
        Self {
            ranges: ranges.iter(),
            current: None,
        }
    }
}

impl Iterator for FrozenIntSetIterator<'_> {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((next, hi)) = &mut self.current
                && *next < **hi
            {
                let value = next.clone();
                *next += Integer::from(1);
                return Some(value);
            }
            let range = self.ranges.next()?;
            self.current = Some((range.lo().clone(), range.hi()));
        }
    }
}

impl FusedIterator for FrozenIntSetIterator<'_> {}

/// An owning iterator over the integers of a [`FrozenIntSet`].
///
/// Holds a clone of the set, which shares the original storage.
pub struct FrozenIntSetIntoIterator {
    set: FrozenIntSet,
    range_index: usize,
    next: Option<Integer>,
}

impl FrozenIntSetIntoIterator {
    pub(super) const fn new(set: FrozenIntSet) -> Self {
        Self {
            set,
            range_index: 0,
            next: None,
        }
    }
}

impl Iterator for FrozenIntSetIntoIterator {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let range = self.set.ranges_slice().get(self.range_index)?;
            let value = self.next.take().unwrap_or_else(|| range.lo().clone());
            if value < *range.hi() {
                self.next = Some(&value + Integer::from(1));
                return Some(value);
            }
            self.range_index += 1;
        }
    }
}

impl FusedIterator for FrozenIntSetIntoIterator {}

// =============================================================================
// Range Iterator
// =============================================================================

/// A read-only view over the stored ranges of a [`FrozenIntSet`].
///
/// Yields each range as an [`IntRange`] describing `[lo, hi)`.
pub struct RangesIterator<'a> {
    inner: std::slice::Iter<'a, IntRange>,
}

impl<'a> RangesIterator<'a> {
    pub(super) fn new(ranges: &'a [IntRange]) -> Self {
        Self {
            inner: ranges.iter(),
        }
    }
}

impl<'a> Iterator for RangesIterator<'a> {
    type Item = &'a IntRange;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for RangesIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for RangesIterator<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for RangesIterator<'_> {}
