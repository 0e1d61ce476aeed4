//! Number pairs on the puzzle strip.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Identifier of a [`NumberPair`], stable for the puzzle's lifetime.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("pair-{_0}")]
pub struct PairId(u32);

impl PairId {
    /// Creates a pair id from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// One of the two value slots of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Slot {
    /// The `first` (smaller) value.
    First,
    /// The `second` (larger) value.
    Second,
}

impl Slot {
    /// Both slots, first before second.
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Returns the opposite slot.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// One entry of the puzzle strip.
///
/// `first` and `second` are the values shown to the player; `None` marks a
/// hidden slot. Whenever a slot is hidden, the matching `*_original` field holds
/// the true value, so the pair's true values can always be recovered with
/// [`true_values`](Self::true_values).
///
/// # Examples
///
/// ```
/// use tetonor_core::{NumberPair, PairId, Slot};
///
/// let mut pair = NumberPair::new(PairId::new(1), 6, 44);
/// pair.hide(Slot::Second);
///
/// assert_eq!(pair.second, None);
/// assert_eq!(pair.second_original, Some(44));
/// assert_eq!(pair.true_values(), Some((6, 44)));
/// assert!(pair.matches(44, 6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberPair {
    /// Unique identifier.
    pub id: PairId,
    /// Visible first value, `None` when hidden.
    pub first: Option<u32>,
    /// Visible second value, `None` when hidden.
    pub second: Option<u32>,
    /// True first value, present whenever `first` is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_original: Option<u32>,
    /// True second value, present whenever `second` is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_original: Option<u32>,
}

impl NumberPair {
    /// Creates a fully visible pair, stored in ascending order.
    #[must_use]
    pub fn new(id: PairId, a: u32, b: u32) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            id,
            first: Some(first),
            second: Some(second),
            first_original: None,
            second_original: None,
        }
    }

    /// Returns the visible value of a slot.
    #[must_use]
    pub fn visible(&self, slot: Slot) -> Option<u32> {
        match slot {
            Slot::First => self.first,
            Slot::Second => self.second,
        }
    }

    /// Returns the true value of a slot, preferring the shadow copy.
    #[must_use]
    pub fn true_value(&self, slot: Slot) -> Option<u32> {
        match slot {
            Slot::First => self.first_original.or(self.first),
            Slot::Second => self.second_original.or(self.second),
        }
    }

    /// Returns both true values, or `None` if either one is unrecoverable.
    #[must_use]
    pub fn true_values(&self) -> Option<(u32, u32)> {
        Some((self.true_value(Slot::First)?, self.true_value(Slot::Second)?))
    }

    /// Returns both visible values if neither slot is hidden.
    #[must_use]
    pub fn visible_values(&self) -> Option<(u32, u32)> {
        Some((self.first?, self.second?))
    }

    /// Returns `true` if the slot is hidden from the player.
    #[must_use]
    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.visible(slot).is_none()
    }

    /// Returns the number of hidden slots (0, 1 or 2).
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        Slot::BOTH.into_iter().filter(|&s| self.is_hidden(s)).count()
    }

    /// Hides a slot, moving its value into the shadow field.
    ///
    /// Hiding an already hidden slot is a no-op.
    pub fn hide(&mut self, slot: Slot) {
        let (visible, original) = match slot {
            Slot::First => (&mut self.first, &mut self.first_original),
            Slot::Second => (&mut self.second, &mut self.second_original),
        };
        if let Some(value) = visible.take() {
            *original = Some(value);
        }
    }

    /// Returns `true` if the pair's true values equal `{a, b}` in either order.
    #[must_use]
    pub fn matches(&self, a: u32, b: u32) -> bool {
        match self.true_values() {
            Some((first, second)) => (first == a && second == b) || (first == b && second == a),
            None => false,
        }
    }

    /// Orders pairs by true values, `(first, second)` ascending.
    ///
    /// Unrecoverable values sort as zero.
    #[must_use]
    pub fn cmp_by_true_values(&self, other: &Self) -> Ordering {
        let key = |p: &Self| {
            (
                p.true_value(Slot::First).unwrap_or_default(),
                p.true_value(Slot::Second).unwrap_or_default(),
            )
        };
        key(self).cmp(&key(other))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_canonicalizes_order() {
        let pair = NumberPair::new(PairId::new(0), 9, 2);
        assert_eq!(pair.visible_values(), Some((2, 9)));
        assert_eq!(pair.first_original, None);
        assert_eq!(pair.second_original, None);
    }

    #[test]
    fn test_hide_preserves_true_value() {
        let mut pair = NumberPair::new(PairId::new(0), 3, 7);
        pair.hide(Slot::First);
        pair.hide(Slot::First);
        assert_eq!(pair.first, None);
        assert_eq!(pair.first_original, Some(3));
        assert_eq!(pair.hidden_count(), 1);
        assert_eq!(pair.visible_values(), None);

        pair.hide(Slot::Second);
        assert_eq!(pair.hidden_count(), 2);
        assert_eq!(pair.true_values(), Some((3, 7)));
    }

    #[test]
    fn test_matches_is_order_insensitive() {
        let pair = NumberPair::new(PairId::new(0), 3, 7);
        assert!(pair.matches(3, 7));
        assert!(pair.matches(7, 3));
        assert!(!pair.matches(4, 6));
    }

    #[test]
    fn test_unrecoverable_pair_matches_nothing() {
        let pair = NumberPair {
            id: PairId::new(0),
            first: None,
            second: Some(7),
            first_original: None,
            second_original: None,
        };
        assert_eq!(pair.true_values(), None);
        assert!(!pair.matches(0, 7));
    }

    #[test]
    fn test_ordering_uses_shadow_values() {
        let mut hidden = NumberPair::new(PairId::new(0), 2, 26);
        hidden.hide(Slot::First);
        let visible = NumberPair::new(PairId::new(1), 6, 44);
        assert_eq!(hidden.cmp_by_true_values(&visible), Ordering::Less);
    }

    #[test]
    fn test_serialized_shape() {
        let mut pair = NumberPair::new(PairId::new(4), 3, 7);
        pair.hide(Slot::Second);
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 4, "first": 3, "second": null, "secondOriginal": 7 })
        );
        let back: NumberPair = serde_json::from_value(json).unwrap();
        assert_eq!(back, pair);
    }

    proptest! {
        #[test]
        fn test_hiding_keeps_true_values(
            a in 0_u32..1000,
            b in 0_u32..1000,
            hide_first in any::<bool>(),
            hide_second in any::<bool>()
        ) {
            let mut pair = NumberPair::new(PairId::new(1), a, b);
            let before = pair.true_values();
            if hide_first {
                pair.hide(Slot::First);
            }
            if hide_second {
                pair.hide(Slot::Second);
            }
            prop_assert_eq!(pair.true_values(), before);
            prop_assert_eq!(
                pair.hidden_count(),
                usize::from(hide_first) + usize::from(hide_second)
            );
            prop_assert!(pair.matches(b, a));
        }
    }
}
