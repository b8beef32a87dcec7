//! holdem_odds estimates how often a Texas Hold'em hand wins.
//!
//! `core` has the cards, the deck they're dealt from, and the hand
//! evaluator. `holdem` compares evaluated hands and runs the Monte Carlo
//! estimate.
//!
//! ```
//! use holdem_odds::core::{CommunityCards, Hand};
//! use holdem_odds::holdem::estimate_win_probability;
//!
//! let hand = Hand::new_from_str("AsAh").unwrap();
//! let flop = CommunityCards::new_from_str("Ad7c2h").unwrap();
//! let percent = estimate_win_probability(&hand, &flop, 3).unwrap();
//! assert!(percent > 50);
//! ```

/// Cards, decks, and hand strength. Nothing in here knows about
/// opponents or probabilities.
pub mod core;
/// Comparison of evaluated hands and the Monte Carlo estimator.
pub mod holdem;
