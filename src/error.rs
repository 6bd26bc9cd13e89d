//! Error types for set construction and queries.
//!
//! Every fallible operation of [`FrozenIntSet`](crate::FrozenIntSet) reports
//! its failure synchronously through [`FrozenIntSetError`]. No operation
//! retries or silently corrects its input.

use malachite::Integer;

/// Represents errors that can occur when building or querying a set.
///
/// # Examples
///
/// ```rust
/// use frozen_intset::{FrozenIntSet, FrozenIntSetError, Integer};
///
/// let error = FrozenIntSet::from_ranges([(5, 5)]).unwrap_err();
/// assert_eq!(
///     error,
///     FrozenIntSetError::InvalidRange {
///         lo: Integer::from(5),
///         hi: Integer::from(5),
///     }
/// );
/// assert_eq!(format!("{error}"), "invalid range (5, 5): must have lo < hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrozenIntSetError {
    /// An explicit range was empty or reversed (`lo >= hi`).
    InvalidRange {
        /// Inclusive lower bound of the offending pair.
        lo: Integer,
        /// Exclusive upper bound of the offending pair.
        hi: Integer,
    },
    /// Explicit ranges overlap once sorted by their lower bound.
    OverlappingRanges {
        /// Upper bound of the preceding range.
        previous_hi: Integer,
        /// Lower bound of the range starting before `previous_hi`.
        lo: Integer,
    },
    /// `min` or `max` was queried on an empty set.
    EmptySet {
        /// The extremum that was requested (`"minimum"` or `"maximum"`).
        query: &'static str,
    },
    /// An ordinal index fell outside `[0, len)` after negative-index
    /// normalization.
    IndexOutOfBounds {
        /// The index as given by the caller.
        index: Integer,
        /// The number of elements in the set.
        len: Integer,
    },
    /// A slice was requested with a step of zero.
    ZeroSliceStep,
    /// The ordinal walk could not find the range owning a valid index.
    ///
    /// Unreachable while the store invariants hold.
    CorruptStore {
        /// The normalized index being located.
        index: Integer,
    },
}

impl std::fmt::Display for FrozenIntSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { lo, hi } => {
                write!(formatter, "invalid range ({lo}, {hi}): must have lo < hi")
            }
            Self::OverlappingRanges { previous_hi, lo } => write!(
                formatter,
                "ranges must be disjoint and sorted: range starting at {lo} overlaps range ending at {previous_hi}"
            ),
            Self::EmptySet { query } => write!(formatter, "empty FrozenIntSet has no {query}"),
            Self::IndexOutOfBounds { index, len } => write!(
                formatter,
                "index {index} out of range for FrozenIntSet of length {len}"
            ),
            Self::ZeroSliceStep => write!(formatter, "slice step cannot be zero"),
            Self::CorruptStore { index } => write!(
                formatter,
                "corrupt FrozenIntSet state: no range owns index {index}"
            ),
        }
    }
}

impl std::error::Error for FrozenIntSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        FrozenIntSetError::InvalidRange { lo: Integer::from(5), hi: Integer::from(4) },
        "invalid range (5, 4): must have lo < hi"
    )]
    #[case(
        FrozenIntSetError::OverlappingRanges { previous_hi: Integer::from(3), lo: Integer::from(2) },
        "ranges must be disjoint and sorted: range starting at 2 overlaps range ending at 3"
    )]
    #[case(
        FrozenIntSetError::EmptySet { query: "minimum" },
        "empty FrozenIntSet has no minimum"
    )]
    #[case(
        FrozenIntSetError::IndexOutOfBounds { index: Integer::from(-4), len: Integer::from(3) },
        "index -4 out of range for FrozenIntSet of length 3"
    )]
    #[case(FrozenIntSetError::ZeroSliceStep, "slice step cannot be zero")]
    #[case(
        FrozenIntSetError::CorruptStore { index: Integer::from(9) },
        "corrupt FrozenIntSet state: no range owns index 9"
    )]
    fn test_error_display(#[case] error: FrozenIntSetError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(FrozenIntSetError::ZeroSliceStep);
        assert_eq!(error.to_string(), "slice step cannot be zero");
    }
}
