use std::iter::FusedIterator;

use crate::bitset::bitset_traits;
use crate::{Card, CARD_COUNT};

/// A compact set of [`Card`]s.
///
/// Allows intersection/union/xor with other such sets via bitwise ops.
/// Also implements [`IntoIterator`], which yields the cards in deck order.
///
/// ```
/// use clueless::{card, CardsSet};
/// let mut set = CardsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CardsSet`.
/// set = set.insert(card!("Rope"));
/// set = set.insert(card!("Rope"));  // Inserting a second time has no effect
/// set = set.insert(card!("Plum"));
/// assert_eq!(Vec::from_iter(set), vec![card!("Plum"), card!("Rope")]);
/// ```
///
/// # Note on immutability
///
/// This is an immutable type, so its "mutating" methods return a
/// new value instead of really mutating in-place (except for `std::ops::BitXxxAssign` trait methods).
/// It is also [`Copy`], so a value is not consumed by methods with `self` receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardsSet {
    // Only the low 21 bits are used.
    pub(crate) bits: u32,
}

const VALID_BITS: u32 = (1u32 << CARD_COUNT) - 1;

/// Equal to `CardsSet::from_iter(ALL_CARDS)`.
pub const FULL_DECK: CardsSet = CardsSet { bits: VALID_BITS };

impl CardsSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn contains(self, card: Card) -> bool {
        (self.bits & (1u32 << card.to_index())) != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | (1u32 << card.to_index()),
        }
    }
}

bitset_traits!(CardsSet, VALID_BITS);

impl FromIterator<Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut bits = 0;
        for card in iter {
            bits |= 1u32 << card.to_index();
        }
        Self { bits }
    }
}

impl IntoIterator for CardsSet {
    type Item = Card;

    type IntoIter = CardsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardsSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CardsSet`] that returns cards in deck order.
#[derive(Clone, Copy, Debug)]
pub struct CardsSetIter {
    bits: u32,
}

impl Iterator for CardsSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // The number of trailing bits is the card_idx
        let card_idx = self.bits.trailing_zeros() as usize;
        // Clear the flag corresponding to this card index
        self.bits ^= 1u32 << card_idx;

        Card::from_index(card_idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CardsSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CardsSetIter {}
