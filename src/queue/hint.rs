//! Insertion hints: where a new item should land.

use crate::key::SortKey;

/// A request describing where a new item should be inserted.
///
/// A hint names up to two anchor keys and a fractional position between
/// them: `percent` is a value in `[0, 1]` interpolating between the resolved
/// `after` anchor (or the very start, when absent) and the resolved `before`
/// anchor (or the very end, when absent). `0` means immediately after the
/// `after` anchor; `1` means immediately before the `before` anchor.
///
/// Anchors do not have to name keys currently present in the queue; an
/// absent or stale key resolves to the nearest gap that preserves order.
///
/// # Examples
///
/// ```rust
/// use orderq::key::SortKey;
/// use orderq::queue::InsertionHint;
///
/// // The common policies have named constructors
/// let append = InsertionHint::append();
/// let prepend = InsertionHint::prepend();
///
/// // "roughly three quarters of the way between these two items"
/// let anchored = InsertionHint::at_fraction(0.75)
///     .anchored_after(SortKey::new("b").unwrap())
///     .anchored_before(SortKey::new("f").unwrap());
/// assert_eq!(anchored.percent(), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionHint {
    after: Option<SortKey>,
    before: Option<SortKey>,
    percent: f64,
}

impl InsertionHint {
    /// A hint placing the item at the given fraction of the whole queue
    /// (no anchors).
    ///
    /// The `percent` precondition (`0 <= percent <= 1`) is checked by the
    /// insertion planner, not here: an out-of-range value is a caller bug
    /// and fails fast at planning time.
    #[inline]
    #[must_use]
    pub const fn at_fraction(percent: f64) -> Self {
        Self {
            after: None,
            before: None,
            percent,
        }
    }

    /// A hint placing the item at the very end of the queue.
    #[inline]
    #[must_use]
    pub const fn append() -> Self {
        Self::at_fraction(1.0)
    }

    /// A hint placing the item at the very start of the queue.
    #[inline]
    #[must_use]
    pub const fn prepend() -> Self {
        Self::at_fraction(0.0)
    }

    /// Anchors the fractional range to start just after `key`.
    #[inline]
    #[must_use]
    pub fn anchored_after(mut self, key: SortKey) -> Self {
        self.after = Some(key);
        self
    }

    /// Anchors the fractional range to end just before `key`.
    #[inline]
    #[must_use]
    pub fn anchored_before(mut self, key: SortKey) -> Self {
        self.before = Some(key);
        self
    }

    /// The `after` anchor, if any.
    #[inline]
    #[must_use]
    pub const fn after(&self) -> Option<&SortKey> {
        self.after.as_ref()
    }

    /// The `before` anchor, if any.
    #[inline]
    #[must_use]
    pub const fn before(&self) -> Option<&SortKey> {
        self.before.as_ref()
    }

    /// The fractional position between the resolved anchors.
    #[inline]
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }
}
