//! # frozen-intset
//!
//! An immutable set of arbitrary-precision integers that stores runs of
//! consecutive values as half-open ranges instead of individual elements.
//!
//! ## Overview
//!
//! A [`FrozenIntSet`] wraps one canonical, sorted sequence of disjoint
//! [`IntRange`]s. Every set-algebra operation (union, intersection,
//! difference, symmetric difference, disjointness and inclusion tests) is a
//! linear sweep over two range sequences, so its cost depends on the number
//! of ranges rather than on the number of elements.
//!
//! - **Construction**: from any collection of integers (coalesced into
//!   maximal runs), from a `std` range, or from explicit `(lo, hi)` pairs
//! - **Queries**: membership, length, minimum/maximum, ordinal access and
//!   slicing, iteration over elements or stored ranges
//! - **Algebra**: binary operations, operator overloads and n-ary reducers
//!
//! ## Feature Flags
//!
//! - `arc` (default): sets are `Send + Sync` and share their storage through
//!   `Arc`. Without it, storage is shared through `Rc`.
//!
//! ## Example
//!
//! ```rust
//! use frozen_intset::prelude::*;
//!
//! let low = FrozenIntSet::from_elements([1, 2, 3]);
//! let high = FrozenIntSet::from_elements([3, 4, 5]);
//!
//! let union = &low | &high;
//! assert_eq!(union, FrozenIntSet::from(1..6));
//! assert_eq!(union.ranges().count(), 1);
//! assert!(union.contains(&Integer::from(4)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use frozen_intset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::FrozenIntSet;
    pub use crate::FrozenIntSetError;
    pub use crate::IntRange;
    pub use crate::Integer;
    pub use crate::SliceSpec;
}

mod error;
mod range;
mod set;
mod shared;
mod store;

pub use error::FrozenIntSetError;
pub use malachite::Integer;
pub use range::IntRange;
pub use set::FrozenIntSet;
pub use set::FrozenIntSetIntoIterator;
pub use set::FrozenIntSetIterator;
pub use set::RangesIterator;
pub use set::SliceSpec;
