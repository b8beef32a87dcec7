use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// holdem_odds library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Hash, PartialEq, Eq)]
pub enum OddsError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} is already in play")]
    DuplicateCard(Card),
    #[error("A hand is exactly two hole cards, found {0}")]
    HoleCardCount(usize),
    #[error("There are never more than five community cards.")]
    TooManyCommunityCards,
    #[error("No street has {0} community cards")]
    NotAStreet(usize),
    #[error("Unable to deal a game for {0} players")]
    InvalidPlayerCount(usize),
    #[error("At least one trial must be run to estimate a probability")]
    NoTrials,
    #[error("The deck ran out of cards while dealing")]
    DeckExhausted,
    #[error("A simulation needs the player's hand")]
    MissingHand,
}
