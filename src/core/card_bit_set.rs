use std::fmt::Debug;
use std::ops::{BitOr, BitOrAssign};

use super::Card;

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use holdem_odds::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// A bitset holding every one of the 52 cards.
    ///
    /// ```
    /// use holdem_odds::core::CardBitSet;
    ///
    /// assert_eq!(52, CardBitSet::full().count());
    /// ```
    pub fn full() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }

    /// Insert a card. Returns true if the card was not already present.
    ///
    /// ```
    /// use holdem_odds::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// assert!(cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert!(!cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert_eq!(1, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.cards |= 1 << u8::from(card);
        !present
    }

    /// Remove a card from the bitset
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << u8::from(card));
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.cards = 0;
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Iterates the cards in dense index order.
pub struct CardBitSetIter(u64);

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros();
        // Clear the lowest set bit
        self.0 &= self.0 - 1;
        Some(Card::from(idx as u8))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_empty() {
        let cards = CardBitSet::new();
        assert!(cards.is_empty());
        assert_eq!(0, cards.count());
        assert_eq!(0, cards.into_iter().count());
    }

    #[test]
    fn test_insert_remove() {
        let mut cards = CardBitSet::new();
        let c = Card::new(Value::Ace, Suit::Spade);
        assert!(cards.insert(c));
        assert!(cards.contains(c));
        cards.remove(c);
        assert!(!cards.contains(c));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_full_iterates_all() {
        let cards: Vec<Card> = CardBitSet::full().into_iter().collect();
        assert_eq!(52, cards.len());
        assert_eq!(Card::from(0), cards[0]);
        assert_eq!(Card::from(51), cards[51]);
    }

    #[test]
    fn test_bit_or() {
        let a: CardBitSet = [Card::from(3), Card::from(7)].into_iter().collect();
        let b: CardBitSet = [Card::from(7), Card::from(40)].into_iter().collect();
        let mut c = a | b;
        assert_eq!(3, c.count());
        c |= CardBitSet::full();
        assert_eq!(52, c.count());
        c.clear();
        assert!(c.is_empty());
    }
}
