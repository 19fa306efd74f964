//! The persistent order-maintenance queue and its insertion machinery.
//!
//! This module provides [`SortedQueue`], an immutable sequence of
//! [`QueueEntry`] values kept in strictly ascending [`SortKey`] order, plus
//! the request and result types of its single mutating operation:
//!
//! - [`InsertionHint`]: where a new item should land, expressed as optional
//!   `after`/`before` anchor keys and a fractional position between them
//! - [`SearchLocation`]: where a key sits (or would sit) in a queue
//! - [`InsertionPlan`]: the resolved insertion index and freshly minted key
//!
//! # Structural Sharing
//!
//! [`SortedQueue::add`] never mutates in place: it returns a new queue value
//! and the previous value remains observably unchanged, so any number of
//! readers can hold distinct snapshots safely.
//!
//! # Examples
//!
//! ```rust
//! use orderq::queue::{InsertionHint, SortedQueue};
//!
//! let empty: SortedQueue<&str> = SortedQueue::new();
//! let one = empty.add("solo", &InsertionHint::append());
//!
//! // The original snapshot is untouched
//! assert!(empty.is_empty());
//! assert_eq!(one.len(), 1);
//! ```
//!
//! [`SortKey`]: crate::key::SortKey

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod entry;
mod hint;
mod plan;
mod search;
mod sorted_queue;

pub use entry::QueueEntry;
pub use hint::InsertionHint;
pub use plan::InsertionPlan;
pub use search::SearchLocation;
pub use sorted_queue::SortedQueue;
pub use sorted_queue::SortedQueueIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
