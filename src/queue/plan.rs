//! The insertion planner's output.

use crate::key::SortKey;

/// A resolved insertion: the index to splice at and the freshly minted key.
///
/// Produced by [`SortedQueue::plan_insertion`], which resolves an
/// [`InsertionHint`] without committing it. [`SortedQueue::add`] consumes a
/// plan internally; callers can also inspect one directly, for example to
/// preview where a drag-and-drop would land.
///
/// [`SortedQueue::plan_insertion`]: crate::queue::SortedQueue::plan_insertion
/// [`SortedQueue::add`]: crate::queue::SortedQueue::add
/// [`InsertionHint`]: crate::queue::InsertionHint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPlan {
    index: usize,
    key: SortKey,
}

impl InsertionPlan {
    #[inline]
    pub(crate) const fn new(index: usize, key: SortKey) -> Self {
        Self { index, key }
    }

    /// The index the new entry would occupy, in `[0, queue length]`.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The minted key, sorting strictly between the planned neighbors.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &SortKey {
        &self.key
    }

    /// Consumes the plan, returning the index and minted key.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (usize, SortKey) {
        (self.index, self.key)
    }
}
