//! The persistent queue container.
//!
//! # Overview
//!
//! [`SortedQueue`] keeps an ordered sequence of [`QueueEntry`] values in
//! strictly ascending key order inside a reference-counted `Vec`. The single
//! mutating operation, [`SortedQueue::add`], copies the sequence with the
//! new entry spliced in; every other operation is a read. Cloning a queue is
//! O(1) and shares storage.
//!
//! # Time Complexity
//!
//! | Operation        | Cost      |
//! |------------------|-----------|
//! | `locate`         | O(log n)  |
//! | `plan_insertion` | O(log n)  |
//! | `add`            | O(n)      |
//! | `get`            | O(1)      |
//! | `len`/`is_empty` | O(1)      |
//! | `clone`          | O(1)      |

use crate::key::SortKey;
use crate::queue::ReferenceCounter;
use crate::queue::entry::QueueEntry;
use crate::queue::hint::InsertionHint;
use crate::queue::plan::InsertionPlan;
use crate::queue::search::SearchLocation;

/// Message constant for the panic when a hint's `percent` leaves `[0, 1]`.
const PERCENT_RANGE_PANIC_MESSAGE: &str =
    "insertion hint percent must be within 0.0..=1.0 (caller bug, not clamped)";

/// Message constant for the debug panic when bulk construction receives
/// entries whose keys are not strictly ascending.
#[cfg(debug_assertions)]
const KEY_ORDER_PANIC_MESSAGE: &str =
    "from_sorted_entries requires strictly ascending keys (sorted + deduplicated)";

/// A persistent sequence of items in strictly ascending [`SortKey`] order.
///
/// The queue is a value: [`add`](Self::add) returns a new queue and the
/// previous one remains observably unchanged, so concurrent readers can hold
/// distinct snapshots safely. There is no deletion or re-keying operation;
/// collaborators that need one filter [`to_entries`](Self::to_entries) and
/// rebuild via [`from_sorted_entries`](Self::from_sorted_entries), which
/// preserves the issued keys.
///
/// Layering persistence on top (load queue, `add`, store queue) is not
/// atomic; a backing store needs its own compare-and-set or locking
/// discipline. The queue itself assumes a single writer at a time.
///
/// # Examples
///
/// ```rust
/// use orderq::queue::{InsertionHint, SortedQueue};
///
/// let queue: SortedQueue<&str> = SortedQueue::new();
/// let queue = queue.add("alpha", &InsertionHint::append());
/// let queue = queue.add("omega", &InsertionHint::append());
/// let queue = queue.add("mid", &InsertionHint::at_fraction(0.5));
///
/// let items: Vec<&str> = queue.iter().map(|entry| *entry.item()).collect();
/// assert_eq!(items, vec!["alpha", "mid", "omega"]);
/// ```
pub struct SortedQueue<T> {
    entries: ReferenceCounter<Vec<QueueEntry<T>>>,
}

impl<T> SortedQueue<T> {
    /// Creates an empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::queue::SortedQueue;
    ///
    /// let queue: SortedQueue<i32> = SortedQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ReferenceCounter::new(Vec::new()),
        }
    }

    /// Builds a queue from entries already in strictly ascending key order.
    ///
    /// This is the bulk-construction path for collaborators that persist a
    /// queue snapshot and later rebuild it, or that remove items by
    /// filtering [`to_entries`](Self::to_entries): keys minted earlier
    /// remain valid, so the surviving entries are simply re-wrapped.
    ///
    /// # Preconditions
    ///
    /// Keys must be strictly ascending (sorted, no duplicates). In debug
    /// builds a violation panics; in release builds it yields a queue with
    /// undefined ordering behavior (logic error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::key::SortKey;
    /// use orderq::queue::{QueueEntry, SortedQueue};
    ///
    /// let entries = vec![
    ///     QueueEntry::new(SortKey::new("b").unwrap(), 1),
    ///     QueueEntry::new(SortKey::new("d").unwrap(), 2),
    /// ];
    /// let queue = SortedQueue::from_sorted_entries(entries);
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[must_use]
    pub fn from_sorted_entries(entries: Vec<QueueEntry<T>>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            has_strictly_ascending_keys(&entries),
            "{KEY_ORDER_PANIC_MESSAGE}"
        );
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Returns the number of items in the queue.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QueueEntry<T>> {
        self.entries.get(index)
    }

    /// Returns the first entry (smallest key), or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&QueueEntry<T>> {
        self.entries.first()
    }

    /// Returns the last entry (largest key), or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&QueueEntry<T>> {
        self.entries.last()
    }

    /// Returns the entries as a slice, in ascending key order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[QueueEntry<T>] {
        &self.entries
    }

    /// Returns an iterator over the entries in ascending key order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedQueueIterator<'_, T> {
        SortedQueueIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &SortKey> {
        self.entries.iter().map(QueueEntry::key)
    }

    /// Finds where `key` sits, or would sit, in the queue.
    ///
    /// Returns [`SearchLocation::At`] when an entry carries exactly `key`,
    /// otherwise [`SearchLocation::Before`] at the unique index where every
    /// earlier entry's key is smaller and every later one's is greater.
    /// `Before(len)` means the key would append. An empty queue always
    /// yields `Before(0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::key::SortKey;
    /// use orderq::queue::{QueueEntry, SearchLocation, SortedQueue};
    ///
    /// let queue = SortedQueue::from_sorted_entries(vec![
    ///     QueueEntry::new(SortKey::new("b").unwrap(), ()),
    ///     QueueEntry::new(SortKey::new("d").unwrap(), ()),
    /// ]);
    ///
    /// assert_eq!(queue.locate(&SortKey::new("d").unwrap()), SearchLocation::At(1));
    /// assert_eq!(queue.locate(&SortKey::new("c").unwrap()), SearchLocation::Before(1));
    /// assert_eq!(queue.locate(&SortKey::new("z").unwrap()), SearchLocation::Before(2));
    /// ```
    #[must_use]
    pub fn locate(&self, key: &SortKey) -> SearchLocation {
        let index = self.entries.partition_point(|entry| entry.key() < key);
        match self.entries.get(index) {
            Some(entry) if entry.key() == key => SearchLocation::At(index),
            _ => SearchLocation::Before(index),
        }
    }

    /// Resolves an [`InsertionHint`] into a concrete index and minted key,
    /// without committing anything.
    ///
    /// Each anchor is located in the queue (an absent `after` anchors at the
    /// very start, an absent `before` at the very end), the two locations
    /// are mapped onto fractional positions, the hint's `percent`
    /// interpolates between them, and the nearest integer index wins. The
    /// new key is minted between the keys adjacent to that index.
    ///
    /// # Panics
    ///
    /// Panics if `hint.percent()` is outside `[0, 1]` (including NaN). An
    /// out-of-range percent is a caller bug and is deliberately not clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::key::SortKey;
    /// use orderq::queue::{InsertionHint, QueueEntry, SortedQueue};
    ///
    /// let queue = SortedQueue::from_sorted_entries(vec![
    ///     QueueEntry::new(SortKey::new("b").unwrap(), ()),
    ///     QueueEntry::new(SortKey::new("d").unwrap(), ()),
    ///     QueueEntry::new(SortKey::new("f").unwrap(), ()),
    /// ]);
    ///
    /// let plan = queue.plan_insertion(&InsertionHint::at_fraction(0.49));
    /// assert_eq!(plan.index(), 1);
    /// assert_eq!(plan.key().as_str(), "c");
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn plan_insertion(&self, hint: &InsertionHint) -> InsertionPlan {
        assert!(
            (0.0..=1.0).contains(&hint.percent()),
            "{PERCENT_RANGE_PANIC_MESSAGE}"
        );

        let lower_location = hint
            .after()
            .map_or(SearchLocation::Before(0), |key| self.locate(key));
        let upper_location = hint
            .before()
            .map_or(SearchLocation::Before(self.len()), |key| self.locate(key));

        // With items at indices I-1, I, I+1: a lower anchor resolving to
        // At(I) means "just past item I" (I + 0.75 rounds up), while
        // Before(I) means "into the gap left of item I" (I + 0.25 rounds
        // down). The upper side mirrors this with the offsets negated.
        let lower_position = match lower_location {
            SearchLocation::At(index) => index as f64 + 0.75,
            SearchLocation::Before(index) => index as f64 + 0.25,
        };
        let upper_position = match upper_location {
            SearchLocation::At(index) => index as f64 + 0.25,
            SearchLocation::Before(index) => index as f64 - 0.25,
        };

        let interpolated =
            (upper_position - lower_position).mul_add(hint.percent(), lower_position);
        // Interpolation stays within [-0.25, len + 0.25], so rounding lands
        // in [0, len] without clamping.
        let index = interpolated.round().max(0.0) as usize;

        let lower_key = index
            .checked_sub(1)
            .and_then(|previous| self.entries.get(previous))
            .map(QueueEntry::key);
        let upper_key = self.entries.get(index).map(QueueEntry::key);

        InsertionPlan::new(index, SortKey::between(lower_key, upper_key))
    }

    /// Returns `true` if two queue values share the same underlying storage.
    ///
    /// This is primarily useful for testing structural sharing.
    #[cfg(test)]
    fn shares_storage_with(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.entries, &other.entries)
    }
}

impl<T: Clone> SortedQueue<T> {
    /// Inserts `item` where `hint` directs, returning a new queue.
    ///
    /// The sole mutator. Plans the insertion, mints a key strictly between
    /// the new entry's neighbors, and splices a copy of the sequence. All
    /// existing entries keep their keys; the original queue value is
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `hint.percent()` is outside `[0, 1]`, as documented on
    /// [`plan_insertion`](Self::plan_insertion).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::queue::{InsertionHint, SortedQueue};
    ///
    /// let queue: SortedQueue<&str> = SortedQueue::new();
    /// let queue = queue.add("only", &InsertionHint::prepend());
    ///
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(*queue.first().unwrap().item(), "only");
    /// ```
    #[must_use]
    pub fn add(&self, item: T, hint: &InsertionHint) -> Self {
        let (index, key) = self.plan_insertion(hint).into_parts();

        let mut entries = Vec::with_capacity(self.len() + 1);
        entries.extend_from_slice(&self.entries[..index]);
        entries.push(QueueEntry::new(key, item));
        entries.extend_from_slice(&self.entries[index..]);

        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Returns an owned snapshot of the entries, in ascending key order.
    ///
    /// Collaborators use this to serialize a queue or to rebuild a filtered
    /// one via [`from_sorted_entries`](Self::from_sorted_entries).
    #[must_use]
    pub fn to_entries(&self) -> Vec<QueueEntry<T>> {
        self.entries.as_ref().clone()
    }
}

impl<T> Clone for SortedQueue<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for SortedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SortedQueue<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SortedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for SortedQueue<T> {}

/// Iterator over references to a queue's entries, in ascending key order.
pub struct SortedQueueIterator<'a, T> {
    inner: std::slice::Iter<'a, QueueEntry<T>>,
}

impl<'a, T> Iterator for SortedQueueIterator<'a, T> {
    type Item = &'a QueueEntry<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedQueueIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for SortedQueueIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> IntoIterator for &'a SortedQueue<T> {
    type Item = &'a QueueEntry<T>;
    type IntoIter = SortedQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(any(debug_assertions, feature = "serde"))]
#[inline]
fn has_strictly_ascending_keys<T>(entries: &[QueueEntry<T>]) -> bool {
    entries
        .windows(2)
        .all(|window| window[0].key() < window[1].key())
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedQueueVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedQueueVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedQueueVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SortedQueue<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of entries with strictly ascending keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries: Vec<QueueEntry<T>> = Vec::with_capacity(capacity);
        while let Some(entry) = seq.next_element()? {
            entries.push(entry);
        }

        if !has_strictly_ascending_keys(&entries) {
            return Err(serde::de::Error::custom(
                "queue entries must carry strictly ascending sort keys",
            ));
        }

        Ok(SortedQueue {
            entries: ReferenceCounter::new(entries),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedQueue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedQueueVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
