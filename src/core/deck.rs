use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::{Card, Suit, Value};

/// Ordered 52 card deck used for dealing.
///
/// Each slot holds `Some(card)` until that card is removed, either
/// because it's already known (hole cards, community cards) or because
/// it was drawn. Drawing walks the slots in order and skips empty ones,
/// so a shuffled deck with some cards marked removed deals uniformly
/// from the cards that remain unseen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    slots: Vec<Option<Card>>,
    /// Index of the next slot to look at when drawing.
    position: usize,
}

impl Deck {
    /// Create the ordered 52 card deck, value major.
    ///
    /// ```
    /// use holdem_odds::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                slots.push(Some(Card::new(*v, *s)));
            }
        }
        Self { slots, position: 0 }
    }

    /// Create a full deck and shuffle it.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use holdem_odds::core::Deck;
    ///
    /// let mut rng = StdRng::seed_from_u64(420);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Randomly shuffle every slot, removed or not, and start dealing
    /// from the top again.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.slots.shuffle(rng);
        self.position = 0;
    }

    /// Put every card back in order and forget any removals.
    pub fn reset(&mut self) {
        for (slot, idx) in self.slots.iter_mut().zip(0u8..) {
            *slot = Some(Card::from(idx));
        }
        self.position = 0;
    }

    /// Mark a card as removed so it will never be drawn.
    /// Returns true if the card was still in the deck.
    pub fn mark_removed(&mut self, card: &Card) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(*card)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Deal the next card that hasn't been removed.
    /// None if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        while self.position < self.slots.len() {
            let slot = self.slots[self.position].take();
            self.position += 1;
            if slot.is_some() {
                return slot;
            }
        }
        None
    }

    /// Given a card, is it still available to be drawn?
    pub fn contains(&self, card: &Card) -> bool {
        self.slots[self.position..]
            .iter()
            .any(|slot| *slot == Some(*card))
    }

    /// How many cards can still be drawn.
    pub fn len(&self) -> usize {
        self.slots[self.position..]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::CardBitSet;

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_mark_removed() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.mark_removed(&c));
        assert!(!d.contains(&c));
        assert!(!d.mark_removed(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_draw_skips_removed() {
        let mut d = Deck::new();
        let first = Card::from(0);
        let second = Card::from(1);
        d.mark_removed(&first);
        assert_eq!(Some(second), d.draw());
        assert_eq!(50, d.len());
    }

    #[test]
    fn test_draw_everything_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut d = Deck::shuffled(&mut rng);
        let mut seen = CardBitSet::new();
        while let Some(card) = d.draw() {
            assert!(seen.insert(card));
        }
        assert_eq!(52, seen.count());
        assert!(d.is_empty());
        assert_eq!(None, d.draw());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        let d_one = Deck::shuffled(&mut rng_one);
        let d_two = Deck::shuffled(&mut rng_two);

        assert_eq!(d_one, d_two);
        assert_ne!(Deck::new(), d_one);
    }

    #[test]
    fn test_reset() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut d = Deck::shuffled(&mut rng);
        d.draw();
        d.mark_removed(&Card::from(30));
        d.reset();
        assert_eq!(Deck::new(), d);
    }
}
