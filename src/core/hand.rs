use std::fmt;
use std::ops::Index;

use super::{Card, OddsError};

/// Two hole cards owned by one player.
///
/// The cards are always distinct. A hand is created when it's dealt
/// and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Card; 2]", into = "[Card; 2]"))]
pub struct Hand([Card; 2]);

impl Hand {
    /// Create a hand from two different cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Hand, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// let king = Card::new(Value::King, Suit::Spade);
    ///
    /// assert!(Hand::new(ace, king).is_ok());
    /// assert!(Hand::new(ace, ace).is_err());
    /// ```
    pub fn new(first: Card, second: Card) -> Result<Self, OddsError> {
        if first == second {
            return Err(OddsError::DuplicateCard(second));
        }
        Ok(Self([first, second]))
    }

    /// Parse a hand from a string like `AsKd`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AdKh").unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Diamond), hand[0]);
    /// assert_eq!(Card::new(Value::King, Suit::Heart), hand[1]);
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, OddsError> {
        let cards = super::parse_cards(hand_string)?;
        match cards[..] {
            [first, second] => Self::new(first, second),
            _ => Err(OddsError::HoleCardCount(cards.len())),
        }
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// Does this hand hold the given card?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = OddsError;

    fn try_from([first, second]: [Card; 2]) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}
