//! This is the core module. It exports the card model, the deck that
//! deals them, and hand strength evaluation.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Bitset of cards, used to find duplicates.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Two hole cards.
mod hand;
pub use self::hand::Hand;

/// Community cards and the street they imply.
mod board;
pub use self::board::{CommunityCards, MAX_COMMUNITY_CARDS, Street};

/// Deck is the shuffled 52 card deck that simulations deal from.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Parsing strings like `AsKd` into cards.
mod parse;
pub use self::parse::parse_cards;

/// Hand strength evaluation.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Combination, HandStrength, Rankable, evaluate_hand};

/// Error type shared by the whole crate.
mod error;
pub use self::error::OddsError;
