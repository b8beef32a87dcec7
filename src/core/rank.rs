use std::fmt;

use crate::core::card::{Card, Value};
use crate::core::hand::Hand;
use crate::core::board::MAX_COMMUNITY_CARDS;

/// All the different hand categories the evaluator produces.
///
/// The discriminant is the combination level. Level 5 is never produced
/// and there is no straight flush: a straight that is also a flush is
/// ranked as a flush.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combination {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two diffent pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
}

impl Combination {
    /// Integer level in `0..=8`.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Combination::HighCard => "High card",
            Combination::OnePair => "One pair",
            Combination::TwoPair => "Two pair",
            Combination::ThreeOfAKind => "Three of a kind",
            Combination::Straight => "Straight",
            Combination::Flush => "Flush",
            Combination::FullHouse => "Full house",
            Combination::FourOfAKind => "Four of a kind",
        };
        f.write_str(name)
    }
}

/// Result of evaluating a set of cards.
///
/// Fields are declared in tie break order so the derived `Ord` compares
/// combination, then primary, then secondary, with a missing secondary
/// sorting below any present one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandStrength {
    pub combination: Combination,
    /// Value that defines the combination: the quad, the trips of a full
    /// house, the top of a straight, the higher pair, or the high card.
    pub primary: Value,
    /// Second value for full houses and two pair.
    pub secondary: Option<Value>,
}

impl HandStrength {
    pub fn new(combination: Combination, primary: Value, secondary: Option<Value>) -> Self {
        Self {
            combination,
            primary,
            secondary,
        }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{} ({}, {})", self.combination, self.primary, secondary),
            None => write!(f, "{} ({})", self.combination, self.primary),
        }
    }
}

/// Value and suit histograms over a set of cards.
struct Tally {
    values: [u8; 13],
    suits: [u8; 4],
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut values = [0; 13];
        let mut suits = [0; 4];
        for c in cards {
            values[c.value as usize] += 1;
            suits[c.suit as usize] += 1;
        }
        Self { values, suits }
    }

    /// Values whose count satisfies `pred`, highest first.
    fn values_where<F: Fn(u8) -> bool>(&self, pred: F) -> impl Iterator<Item = Value> {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| pred(self.values[*v as usize]))
    }

    fn highest(&self) -> Option<Value> {
        self.values_where(|count| count > 0).next()
    }

    fn is_flush(&self) -> bool {
        self.suits.iter().any(|&count| count >= 5)
    }

    /// Top value of the highest run of five consecutive values.
    /// Aces only play high.
    fn straight_top(&self) -> Option<Value> {
        let mut consecutive = 0;
        for idx in (0..self.values.len()).rev() {
            if self.values[idx] > 0 {
                consecutive += 1;
                if consecutive == 5 {
                    return Some(Value::from_u8(idx as u8 + 4));
                }
            } else {
                consecutive = 0;
            }
        }
        None
    }
}

/// Anything that can be evaluated into a `HandStrength`.
pub trait Rankable {
    /// Classify these cards. Expected to be 2, 5, 6 or 7 distinct cards.
    fn strength(&self) -> HandStrength;
}

impl Rankable for [Card] {
    fn strength(&self) -> HandStrength {
        let tally = Tally::new(self);
        // An empty slice breaks the caller contract; treat it as the weakest hand.
        let highest = tally.highest().unwrap_or(Value::Two);

        if let Some(quad) = tally.values_where(|count| count == 4).next() {
            return HandStrength::new(Combination::FourOfAKind, quad, None);
        }

        let trips = tally.values_where(|count| count == 3).next();
        if let Some(three) = trips {
            // A second set of trips fills the house too.
            if let Some(pair) = tally
                .values_where(|count| count >= 2)
                .find(|v| *v != three)
            {
                return HandStrength::new(Combination::FullHouse, three, Some(pair));
            }
        }

        if tally.is_flush() {
            return HandStrength::new(Combination::Flush, highest, None);
        }

        if let Some(top) = tally.straight_top() {
            return HandStrength::new(Combination::Straight, top, None);
        }

        if let Some(three) = trips {
            return HandStrength::new(Combination::ThreeOfAKind, three, None);
        }

        let mut pairs = tally.values_where(|count| count == 2);
        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => HandStrength::new(Combination::TwoPair, high, Some(low)),
            (Some(pair), None) => HandStrength::new(Combination::OnePair, pair, None),
            _ => HandStrength::new(Combination::HighCard, highest, None),
        }
    }
}

impl Rankable for Vec<Card> {
    fn strength(&self) -> HandStrength {
        self[..].strength()
    }
}

/// Evaluate two hole cards together with whatever community cards are
/// known. With no community cards only the hole cards are compared.
///
/// Community cards past the fifth are ignored.
///
/// ```
/// use holdem_odds::core::{evaluate_hand, Combination, CommunityCards, Hand, Value};
///
/// let hand = Hand::new_from_str("AsAh").unwrap();
/// let board = CommunityCards::new_from_str("AdKcKh2s3d").unwrap();
/// let strength = evaluate_hand(&hand, &board);
///
/// assert_eq!(Combination::FullHouse, strength.combination);
/// assert_eq!(Value::Ace, strength.primary);
/// assert_eq!(Some(Value::King), strength.secondary);
/// ```
pub fn evaluate_hand(hand: &Hand, community: &[Card]) -> HandStrength {
    let community = &community[..community.len().min(MAX_COMMUNITY_CARDS)];
    let len = 2 + community.len();

    let mut cards = [hand[0]; 2 + MAX_COMMUNITY_CARDS];
    cards[..2].copy_from_slice(hand.cards());
    cards[2..len].copy_from_slice(community);

    cards[..len].strength()
}
