//! # orderq
//!
//! An order-maintenance queue: a persistent (immutable) sequence of items
//! ordered by short lexicographic sort keys, where inserting a new item
//! never rewrites the keys of the items already present.
//!
//! ## Overview
//!
//! Reorderable lists backed by external storage have a classic problem:
//! renumbering every row on each drag-and-drop. This crate solves it with
//! fractional lexicographic keys. Each item carries an opaque [`SortKey`]
//! drawn from the alphabet `a..=z`; inserting between two neighbors mints a
//! fresh key that sorts strictly between theirs, leaving every existing key
//! untouched.
//!
//! The crate is built from four small pure components:
//!
//! - [`SortKey::between`]: the key synthesizer, which manufactures a key
//!   strictly between two optional bounds.
//! - [`SortedQueue::locate`]: the key locator, which finds where a key sits
//!   (or would sit) in a queue.
//! - [`SortedQueue::plan_insertion`]: the insertion planner, which turns a
//!   fractional [`InsertionHint`] into a concrete index and a fresh key.
//! - [`SortedQueue::add`]: the container operation, which splices the new
//!   entry in and returns a new queue value, copy-on-write.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for keys, entries, and queues, with
//!   order revalidation on deserialize
//! - `arc`: use `Arc` instead of `Rc` for structural sharing, making queues
//!   `Send + Sync` for payloads that are
//!
//! ## Example
//!
//! ```rust
//! use orderq::prelude::*;
//!
//! let queue: SortedQueue<&str> = SortedQueue::new();
//! let queue = queue.add("first", &InsertionHint::append());
//! let queue = queue.add("second", &InsertionHint::append());
//!
//! // Drop a third item halfway between the existing two.
//! let between = InsertionHint::at_fraction(0.5);
//! let queue = queue.add("middle", &between);
//!
//! let items: Vec<&str> = queue.iter().map(|entry| *entry.item()).collect();
//! assert_eq!(items, vec!["first", "middle", "second"]);
//! ```
//!
//! [`SortKey`]: key::SortKey
//! [`SortKey::between`]: key::SortKey::between
//! [`SortedQueue::locate`]: queue::SortedQueue::locate
//! [`SortedQueue::plan_insertion`]: queue::SortedQueue::plan_insertion
//! [`SortedQueue::add`]: queue::SortedQueue::add
//! [`InsertionHint`]: queue::InsertionHint

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use orderq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::key::{SortKey, SortKeyError};
    pub use crate::queue::{InsertionHint, InsertionPlan, QueueEntry, SearchLocation, SortedQueue};
}

pub mod key;
pub mod queue;
