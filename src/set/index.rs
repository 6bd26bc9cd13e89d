//! Ordinal access: extrema, positional lookup and slicing.

use std::cmp::{max, min};
use std::ops::Range;

use malachite::Integer;

use super::FrozenIntSet;
use crate::error::FrozenIntSetError;
use crate::store::RangeAccumulator;

// =============================================================================
// SliceSpec Definition
// =============================================================================

/// Start/stop/step triple selecting ordinal positions of a set.
///
/// Missing bounds default the usual way: from the first (or, for a negative
/// step, the last) position to the other end. Negative bounds count from the
/// end and are clamped to the set's length.
///
/// # Examples
///
/// ```rust
/// use frozen_intset::{FrozenIntSet, SliceSpec};
///
/// let set = FrozenIntSet::from_elements([1, 2, 3, 10, 11, 12]);
///
/// let middle = set.slice(&SliceSpec::from(2..4)).unwrap();
/// assert_eq!(middle, FrozenIntSet::from_elements([3, 10]));
///
/// let every_other = set.slice(&SliceSpec::new().step(2)).unwrap();
/// assert_eq!(every_other, FrozenIntSet::from_elements([1, 3, 11]));
///
/// let tail = set.slice(&SliceSpec::new().start(-2)).unwrap();
/// assert_eq!(tail, FrozenIntSet::from_elements([11, 12]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceSpec {
    start: Option<Integer>,
    stop: Option<Integer>,
    step: Option<Integer>,
}

impl SliceSpec {
    /// The slice selecting every position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first selected position.
    #[must_use]
    pub fn start(mut self, start: impl Into<Integer>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the exclusive bound on selected positions.
    #[must_use]
    pub fn stop(mut self, stop: impl Into<Integer>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    /// Sets the distance between selected positions. Must not be zero.
    #[must_use]
    pub fn step(mut self, step: impl Into<Integer>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Resolves the slice against `len` into ascending positions
    /// `first, first + stride, ...` strictly below `end`.
    fn ascending_positions(&self, len: &Integer) -> Result<Positions, FrozenIntSetError> {
        let zero = Integer::from(0);
        let step = self.step.clone().unwrap_or_else(|| Integer::from(1));
        if step == zero {
            return Err(FrozenIntSetError::ZeroSliceStep);
        }

        let backwards = step < zero;
        let (lower, upper) = if backwards {
            (Integer::from(-1), len - Integer::from(1))
        } else {
            (zero.clone(), len.clone())
        };
        let clamp = |bound: &Integer| {
            if *bound < zero {
                max(bound + len, lower.clone())
            } else {
                min(bound.clone(), upper.clone())
            }
        };
        let (start, stop) = match (&self.start, &self.stop, backwards) {
            (start, stop, false) => (
                start.as_ref().map_or_else(|| lower.clone(), clamp),
                stop.as_ref().map_or_else(|| upper.clone(), clamp),
            ),
            (start, stop, true) => (
                start.as_ref().map_or_else(|| upper.clone(), clamp),
                stop.as_ref().map_or_else(|| lower.clone(), clamp),
            ),
        };

        if backwards {
            let stride = -step;
            if start <= stop {
                return Ok(Positions::empty());
            }
            let count = (&start - &stop + &stride - Integer::from(1)) / &stride;
            let first = &start - (count - Integer::from(1)) * &stride;
            Ok(Positions {
                first,
                end: start + Integer::from(1),
                stride,
            })
        } else if start >= stop {
            Ok(Positions::empty())
        } else {
            Ok(Positions {
                first: start,
                end: stop,
                stride: step,
            })
        }
    }
}

impl<V: Into<Integer>> From<Range<V>> for SliceSpec {
    fn from(range: Range<V>) -> Self {
        Self::new().start(range.start).stop(range.end)
    }
}

/// Ascending ordinal positions `first, first + stride, ...` below `end`.
struct Positions {
    first: Integer,
    end: Integer,
    stride: Integer,
}

impl Positions {
    fn empty() -> Self {
        Self {
            first: Integer::from(0),
            end: Integer::from(0),
            stride: Integer::from(1),
        }
    }
}

// =============================================================================
// Ordinal Queries
// =============================================================================

impl FrozenIntSet {
    /// Returns the smallest integer of the set.
    ///
    /// # Errors
    ///
    /// [`FrozenIntSetError::EmptySet`] if the set is empty.
    pub fn min(&self) -> Result<Integer, FrozenIntSetError> {
        self.ranges_slice()
            .first()
            .map(|range| range.lo().clone())
            .ok_or(FrozenIntSetError::EmptySet { query: "minimum" })
    }

    /// Returns the largest integer of the set.
    ///
    /// # Errors
    ///
    /// [`FrozenIntSetError::EmptySet`] if the set is empty.
    pub fn max(&self) -> Result<Integer, FrozenIntSetError> {
        self.ranges_slice()
            .last()
            .map(|range| range.hi() - Integer::from(1))
            .ok_or(FrozenIntSetError::EmptySet { query: "maximum" })
    }

    /// Returns the `index`-th smallest integer (0-based). Negative indices
    /// count from the end, `-1` being the largest integer.
    ///
    /// # Errors
    ///
    /// [`FrozenIntSetError::IndexOutOfBounds`] if the normalized index lies
    /// outside `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_intset::{FrozenIntSet, Integer};
    ///
    /// let set = FrozenIntSet::from_elements([1, 2, 3, 10, 11]);
    /// assert_eq!(set.get(3), Ok(Integer::from(10)));
    /// assert_eq!(set.get(-1), Ok(Integer::from(11)));
    /// assert!(set.get(5).is_err());
    /// ```
    pub fn get(&self, index: impl Into<Integer>) -> Result<Integer, FrozenIntSetError> {
        let index = index.into();
        let len = self.len();
        let zero = Integer::from(0);
        let mut remaining = if index < zero {
            &index + len
        } else {
            index.clone()
        };
        if remaining < zero || remaining >= *len {
            return Err(FrozenIntSetError::IndexOutOfBounds {
                index,
                len: len.clone(),
            });
        }

        for range in self.ranges_slice() {
            let span = range.len();
            if remaining < span {
                return Ok(range.lo() + remaining);
            }
            remaining -= span;
        }
        tracing::error!(%index, "no range owns a valid ordinal index");
        Err(FrozenIntSetError::CorruptStore { index })
    }

    /// Returns the set of integers found at the positions selected by
    /// `spec`.
    ///
    /// A unit step clips the stored ranges to the selected window; any other
    /// step visits each selected position, so the cost grows with the number
    /// of selected integers.
    ///
    /// # Errors
    ///
    /// [`FrozenIntSetError::ZeroSliceStep`] if the step is zero.
    pub fn slice(&self, spec: &SliceSpec) -> Result<Self, FrozenIntSetError> {
        let Positions { first, end, stride } = spec.ascending_positions(self.len())?;
        if first >= end {
            return Ok(Self::new());
        }

        let mut accumulator = RangeAccumulator::new();
        let mut offset = Integer::from(0);
        if stride == Integer::from(1) {
            for range in self.ranges_slice() {
                let range_end = &offset + range.len();
                let window_lo = max(&first, &offset);
                let window_hi = min(&end, &range_end);
                if window_lo < window_hi {
                    accumulator.push(
                        range.lo() + (window_lo - &offset),
                        range.lo() + (window_hi - &offset),
                    );
                }
                offset = range_end;
                if offset >= end {
                    break;
                }
            }
        } else {
            let one = Integer::from(1);
            let mut position = first;
            for range in self.ranges_slice() {
                let range_end = &offset + range.len();
                while position < range_end && position < end {
                    let value = range.lo() + (&position - &offset);
                    let next = &value + &one;
                    accumulator.push(value, next);
                    position += &stride;
                }
                offset = range_end;
                if position >= end {
                    break;
                }
            }
        }
        Ok(Self::from_store(accumulator.finish()))
    }
}

// =============================================================================
// Tests
// =============================================================================
