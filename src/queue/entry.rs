//! The (item, key) pairing stored in a queue.

use crate::key::SortKey;

/// A queue item paired with the [`SortKey`] that positions it.
///
/// The pairing is created at insertion time and is immutable thereafter.
/// The payload is opaque to the queue: it is stored, cloned, and handed back
/// without inspection.
///
/// # Examples
///
/// ```rust
/// use orderq::key::SortKey;
/// use orderq::queue::QueueEntry;
///
/// let entry = QueueEntry::new(SortKey::new("n").unwrap(), "payload");
/// assert_eq!(entry.key().as_str(), "n");
/// assert_eq!(*entry.item(), "payload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry<T> {
    key: SortKey,
    item: T,
}

impl<T> QueueEntry<T> {
    /// Pairs an item with a key.
    ///
    /// Direct construction is intended for collaborators rebuilding a queue
    /// from previously issued keys (see
    /// [`SortedQueue::from_sorted_entries`]); inside a queue, entries are
    /// normally created by [`SortedQueue::add`].
    ///
    /// [`SortedQueue::from_sorted_entries`]: crate::queue::SortedQueue::from_sorted_entries
    /// [`SortedQueue::add`]: crate::queue::SortedQueue::add
    #[inline]
    #[must_use]
    pub const fn new(key: SortKey, item: T) -> Self {
        Self { key, item }
    }

    /// Returns the entry's sort key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &SortKey {
        &self.key
    }

    /// Returns a reference to the payload.
    #[inline]
    #[must_use]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the entry, returning the payload.
    #[inline]
    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }

    /// Consumes the entry, returning both halves of the pairing.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (SortKey, T) {
        (self.key, self.item)
    }
}
