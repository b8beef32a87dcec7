//! Comparing evaluated hands and estimating how often a hand wins.

/// Comparing hand strengths and picking the winner of a showdown.
mod compare;
pub use self::compare::{
    SecondaryTieBreak, compare_hands, compare_hands_with, find_winning_opponent,
    find_winning_opponent_with,
};

/// Settings for estimates.
mod config;
pub use self::config::{DEFAULT_TRIALS, EstimatorConfig, TieHandling};

/// Monte Carlo win probability.
mod monte_carlo_game;
pub use self::monte_carlo_game::{
    MAX_PLAYERS, MonteCarloGame, SimulationOutcome, TrialResult, estimate_win_probability,
};

/// Builder for `MonteCarloGame`.
mod game_builder;
pub use self::game_builder::{MonteCarloGameBuilder, RngMonteCarloGameBuilder};
