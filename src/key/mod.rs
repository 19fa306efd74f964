//! Sort keys: opaque, totally ordered string tokens.
//!
//! This module provides [`SortKey`], the validated value type that positions
//! an item inside a queue, and its synthesizer [`SortKey::between`], which
//! mints a fresh key strictly between two existing ones without touching
//! either.
//!
//! # Examples
//!
//! ```rust
//! use orderq::key::SortKey;
//!
//! let lower = SortKey::new("b").unwrap();
//! let upper = SortKey::new("d").unwrap();
//!
//! let minted = SortKey::between(Some(&lower), Some(&upper));
//! assert_eq!(minted.as_str(), "c");
//! assert!(lower < minted && minted < upper);
//! ```

mod sort_key;

pub use sort_key::SortKey;
pub use sort_key::SortKeyError;
pub use sort_key::{ALPHABET_MAX, ALPHABET_MIN};
