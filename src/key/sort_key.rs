//! The [`SortKey`] value type and its midpoint synthesizer.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest symbol of the key alphabet (`'a'`).
pub const ALPHABET_MIN: u8 = b'a';

/// Largest symbol of the key alphabet (`'z'`).
pub const ALPHABET_MAX: u8 = b'z';

/// Inline capacity for minted key buffers.
///
/// Synthesized keys are short in the common case; growth past this length
/// only happens after many insertions into the same gap.
const INLINE_KEY_CAPACITY: usize = 16;

/// Message constant for the debug panic when [`SortKey::between`] receives
/// bounds that are not strictly ascending.
const BOUNDS_INVARIANT_PANIC_MESSAGE: &str =
    "between requires strictly ascending bounds (lower < upper)";

/// Message constant for the debug panic when [`SortKey::between`] receives
/// bounds with no representable key between them.
const BOUNDS_ROOM_PANIC_MESSAGE: &str =
    "between requires room: no key sorts strictly between `x` and `x` plus a run of 'a'";

/// Error returned when a string fails validation as a [`SortKey`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortKeyError {
    /// The input string was empty. The empty string is reserved as the
    /// conceptual "open end" sentinel and is never a valid key.
    #[error("sort key must not be empty")]
    Empty,

    /// The input contained a character outside the `a..=z` alphabet.
    #[error("invalid character {character:?} at position {position}: sort keys use 'a'..='z' only")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its character offset within the input.
        position: usize,
    },
}

/// An opaque, totally ordered string token that positions an item in a queue.
///
/// Keys are non-empty strings over the lowercase ASCII alphabet `a..=z`,
/// compared by plain lexicographic order. Within one queue all keys are
/// pairwise distinct, and the items sorted by key ascending are exactly the
/// queue's visible order. A key is never mutated after assignment; new
/// positions are expressed by minting new keys with [`SortKey::between`].
///
/// # Examples
///
/// ```rust
/// use orderq::key::SortKey;
///
/// let key = SortKey::new("abc").unwrap();
/// assert_eq!(key.as_str(), "abc");
///
/// // Ordering is lexicographic
/// let other = SortKey::new("abd").unwrap();
/// assert!(key < other);
///
/// // Validation happens at construction time
/// assert!(SortKey::new("").is_err());
/// assert!(SortKey::new("aBc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(String);

impl SortKey {
    /// Creates a new key, validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`SortKeyError::Empty`] for an empty string, or
    /// [`SortKeyError::InvalidCharacter`] for any character outside `a..=z`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::key::{SortKey, SortKeyError};
    ///
    /// assert!(SortKey::new("queue").is_ok());
    ///
    /// let error = SortKey::new("no-dashes").unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     SortKeyError::InvalidCharacter { character: '-', position: 2 }
    /// );
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, SortKeyError> {
        let value = value.into();

        if value.is_empty() {
            return Err(SortKeyError::Empty);
        }

        match value
            .chars()
            .enumerate()
            .find(|(_, character)| !character.is_ascii_lowercase())
        {
            Some((position, character)) => Err(SortKeyError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(Self(value)),
        }
    }

    /// Returns the key as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints a key that sorts strictly between `lower` and `upper`.
    ///
    /// An absent `lower` behaves as the empty string, which sorts before
    /// every key; an absent `upper` behaves as an unbounded run of symbols
    /// past `'z'`, which sorts after every key. The result is deterministic:
    /// identical bounds always produce the identical key.
    ///
    /// The scan proceeds one position at a time. Where the bounds share a
    /// symbol, the result inherits it. At the first position where they
    /// differ, the result takes the floor midpoint of the two codes and
    /// stops, unless the midpoint collapses onto the lower code (adjacent
    /// symbols leave no integer strictly between), in which case the scan
    /// continues one position further to grow the result past `lower`.
    ///
    /// Repeated insertion into the same gap therefore grows keys without
    /// bound. That is an accepted cost of the scheme: long-running systems
    /// that need bounded key length must rebalance (re-key) their queues
    /// periodically, which is outside this crate's scope.
    ///
    /// # Preconditions
    ///
    /// When both bounds are present, `lower < upper` must hold, and `upper`
    /// must not be `lower` followed only by runs of `'a'` (no key can sort
    /// strictly between `"x"` and `"xa"`). Keys minted by this function
    /// never end in `'a'`, so the second case cannot arise between
    /// neighbors a queue produced itself. Violations panic in debug builds
    /// and yield an unspecified key in release builds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderq::key::SortKey;
    ///
    /// let b = SortKey::new("b").unwrap();
    /// let c = SortKey::new("c").unwrap();
    /// let d = SortKey::new("d").unwrap();
    ///
    /// // Room between the bounds: single-symbol midpoint
    /// assert_eq!(SortKey::between(Some(&b), Some(&d)).as_str(), "c");
    ///
    /// // Adjacent symbols force the key to grow
    /// assert_eq!(SortKey::between(Some(&b), Some(&c)).as_str(), "bn");
    ///
    /// // Open ends are valid
    /// assert_eq!(SortKey::between(None, None).as_str(), "n");
    /// assert!(SortKey::between(Some(&d), None) > d);
    /// assert!(SortKey::between(None, Some(&b)) < b);
    /// ```
    #[must_use]
    pub fn between(lower: Option<&Self>, upper: Option<&Self>) -> Self {
        debug_assert!(
            lower.zip(upper).is_none_or(|(low, high)| low < high),
            "{BOUNDS_INVARIANT_PANIC_MESSAGE}"
        );
        debug_assert!(
            lower.zip(upper).is_none_or(|(low, high)| {
                high.0
                    .strip_prefix(low.0.as_str())
                    .is_none_or(|suffix| suffix.bytes().any(|byte| byte != ALPHABET_MIN))
            }),
            "{BOUNDS_ROOM_PANIC_MESSAGE}"
        );

        let lower_bytes = lower.map_or(&[] as &[u8], |key| key.0.as_bytes());
        let upper_bytes = upper.map_or(&[] as &[u8], |key| key.0.as_bytes());

        let mut minted: SmallVec<[u8; INLINE_KEY_CAPACITY]> = SmallVec::new();
        let mut position = 0;

        loop {
            let lower_code = lower_bytes.get(position).copied().unwrap_or(ALPHABET_MIN);
            let upper_code = upper_bytes
                .get(position)
                .copied()
                .unwrap_or(ALPHABET_MAX + 1);

            if lower_code == upper_code {
                // Shared prefix: inherit the symbol and keep scanning.
                minted.push(lower_code);
                position += 1;
                continue;
            }

            let midpoint = lower_code + (upper_code - lower_code) / 2;
            minted.push(midpoint);
            if midpoint != lower_code {
                break;
            }
            // No integer strictly between adjacent codes; keep the lower
            // code and extend to the next position to grow past `lower`.
            position += 1;
        }

        // Midpoints of in-alphabet codes (upper capped at one past 'z')
        // never leave the alphabet, so this is valid ASCII by construction.
        Self(minted.iter().map(|&code| char::from(code)).collect())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for SortKey {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SortKey> for String {
    #[inline]
    fn from(key: SortKey) -> Self {
        key.0
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for SortKey {
    type Error = SortKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SortKey {
    type Error = SortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SortKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_accepts_alphabet_strings() {
        let key = SortKey::new("abcxyz").unwrap();
        assert_eq!(key.as_str(), "abcxyz");
    }

    #[rstest]
    fn test_new_rejects_empty_string() {
        assert_eq!(SortKey::new(""), Err(SortKeyError::Empty));
    }

    #[rstest]
    #[case::uppercase("aBc", 'B', 1)]
    #[case::digit("a1", '1', 1)]
    #[case::leading_space(" a", ' ', 0)]
    #[case::non_ascii("aé", 'é', 1)]
    fn test_new_rejects_out_of_alphabet_characters(
        #[case] input: &str,
        #[case] character: char,
        #[case] position: usize,
    ) {
        assert_eq!(
            SortKey::new(input),
            Err(SortKeyError::InvalidCharacter {
                character,
                position
            })
        );
    }

    #[rstest]
    fn test_ordering_is_lexicographic() {
        let b = SortKey::new("b").unwrap();
        let bn = SortKey::new("bn").unwrap();
        let c = SortKey::new("c").unwrap();
        assert!(b < bn);
        assert!(bn < c);
    }

    #[rstest]
    fn test_display_and_from_str_round_trip() {
        let key: SortKey = "queue".parse().unwrap();
        assert_eq!(format!("{key}"), "queue");
    }

    #[rstest]
    fn test_between_open_open_yields_alphabet_midpoint() {
        assert_eq!(SortKey::between(None, None).as_str(), "n");
    }

    #[rstest]
    fn test_between_adjacent_symbols_grows_key() {
        let b = SortKey::new("b").unwrap();
        let c = SortKey::new("c").unwrap();
        assert_eq!(SortKey::between(Some(&b), Some(&c)).as_str(), "bn");
    }

    #[rstest]
    fn test_between_shared_prefix_grows_key() {
        let lower = SortKey::new("abc").unwrap();
        let upper = SortKey::new("abd").unwrap();
        let minted = SortKey::between(Some(&lower), Some(&upper));
        assert!(minted.as_str().starts_with("abc"));
        assert!(lower < minted && minted < upper);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "requires room")]
    fn test_between_no_room_panics_in_debug() {
        let a = SortKey::new("a").unwrap();
        let aa = SortKey::new("aa").unwrap();
        let _ = SortKey::between(Some(&a), Some(&aa));
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly ascending bounds")]
    fn test_between_inverted_bounds_panics_in_debug() {
        let b = SortKey::new("b").unwrap();
        let d = SortKey::new("d").unwrap();
        let _ = SortKey::between(Some(&d), Some(&b));
    }
}
