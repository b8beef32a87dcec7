use std::fmt;
use std::ops::Deref;

use super::{Card, CardBitSet, OddsError};

/// The most community cards there will ever be.
pub const MAX_COMMUNITY_CARDS: usize = 5;

/// A betting round, named by how many community cards are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Every street in the order they are played.
    pub fn streets() -> [Street; 4] {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River]
    }

    /// How many community cards are known on this street.
    pub fn community_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street that has exactly `len` community cards, if any.
    pub fn from_community_cards(len: usize) -> Option<Street> {
        match len {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };
        f.write_str(name)
    }
}

/// Shared cards on the table.
///
/// Cards are only ever appended, there are at most five of them, and none
/// of them repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct CommunityCards {
    cards: Vec<Card>,
}

impl CommunityCards {
    /// No community cards, i.e. preflop.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_COMMUNITY_CARDS),
        }
    }

    /// Build from already dealt cards.
    ///
    /// ```
    /// use holdem_odds::core::{CommunityCards, Deck};
    ///
    /// let mut deck = Deck::new();
    /// let flop: Vec<_> = (0..3).filter_map(|_| deck.draw()).collect();
    /// let board = CommunityCards::new_with_cards(flop).unwrap();
    /// assert_eq!(3, board.len());
    /// ```
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, OddsError> {
        let mut board = Self::new();
        board.extend(cards)?;
        Ok(board)
    }

    /// Parse a board like `AdKcKh`.
    pub fn new_from_str(board: &str) -> Result<Self, OddsError> {
        Self::new_with_cards(super::parse_cards(board)?)
    }

    /// Append one card.
    pub fn push(&mut self, card: Card) -> Result<(), OddsError> {
        if self.cards.len() >= MAX_COMMUNITY_CARDS {
            return Err(OddsError::TooManyCommunityCards);
        }
        if self.cards.contains(&card) {
            return Err(OddsError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Append several cards, e.g. the whole flop.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> Result<(), OddsError> {
        for card in cards {
            self.push(card)?;
        }
        Ok(())
    }

    /// The street these cards put the hand on. None while the flop is
    /// only partially dealt.
    pub fn street(&self) -> Option<Street> {
        Street::from_community_cards(self.cards.len())
    }

    /// How many more cards are needed to complete the board.
    pub fn remaining(&self) -> usize {
        MAX_COMMUNITY_CARDS - self.cards.len()
    }

    /// The first `len` cards, as they were on an earlier street.
    pub fn prefix(&self, len: usize) -> &[Card] {
        &self.cards[..len.min(self.cards.len())]
    }

    pub fn to_bit_set(&self) -> CardBitSet {
        self.cards.iter().copied().collect()
    }
}

impl TryFrom<Vec<Card>> for CommunityCards {
    type Error = OddsError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_with_cards(cards)
    }
}

impl From<CommunityCards> for Vec<Card> {
    fn from(board: CommunityCards) -> Self {
        board.cards
    }
}

impl Deref for CommunityCards {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for CommunityCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
