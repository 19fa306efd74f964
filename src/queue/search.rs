//! The result of locating a key within a queue.

/// Where a key sits, or would sit, in a queue.
///
/// A queue of N items exposes 2N+1 addressable locations: before each item,
/// at each item, and past the last item. They interleave as follows:
///
/// ```text
/// Before(0)  At(0)  Before(1)  At(1)  ...  At(N-1)  Before(N)
/// ```
///
/// `Before(N)` (the queue length) means "append". The insertion planner
/// exploits this interleaving to interpolate fractional positions across
/// item boundaries rather than only landing on integer gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLocation {
    /// An item with exactly the searched key exists at this index.
    At(usize),
    /// No exact match; inserting before this index preserves order.
    Before(usize),
}

impl SearchLocation {
    /// Returns the index component, regardless of variant.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::At(index) | Self::Before(index) => index,
        }
    }

    /// Returns `true` if the searched key was found exactly.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::At(_))
    }
}
