//! Sharing primitives selected by the `arc` feature.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets sets cross thread boundaries.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Compute-Once Cache Type Alias
// =============================================================================

/// Write-once cell used to memoize values derived from an immutable store.
///
/// Paired with [`ReferenceCounter`]: `OnceLock` under `arc`, `OnceCell`
/// otherwise. Concurrent first access may run the initializer more than
/// once, but only one result is ever published.
#[cfg(feature = "arc")]
pub(crate) type OnceCache<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type OnceCache<T> = std::cell::OnceCell<T>;

// =============================================================================
// Tests
// =============================================================================
