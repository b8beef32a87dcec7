use rand::Rng;
use rand::rngs::ThreadRng;

use super::{EstimatorConfig, MonteCarloGame, SecondaryTieBreak, TieHandling};
use crate::core::{CommunityCards, Hand, OddsError};

/// # RngMonteCarloGameBuilder
///
/// Builder for a `MonteCarloGame`. The player's hand is required, every
/// other field is optional: no community cards, two players, and the
/// default `EstimatorConfig`.
///
/// `MonteCarloGameBuilder` is a type alias for
/// `RngMonteCarloGameBuilder<ThreadRng>` which is the default builder.
///
/// ## Examples
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::MonteCarloGameBuilder;
///
/// let game = MonteCarloGameBuilder::default()
///     .hand(Hand::new_from_str("KhQh").unwrap())
///     .num_players(4)
///     .build()
///     .unwrap();
/// ```
///
/// However sometimes you want a repeatable estimate. In that case pass in
/// a seeded rng:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::MonteCarloGameBuilder;
///
/// let build = || {
///     MonteCarloGameBuilder::default()
///         .hand(Hand::new_from_str("KhQh").unwrap())
///         .trials(100)
///         .rng(StdRng::seed_from_u64(420))
///         .build()
///         .unwrap()
/// };
/// assert_eq!(
///     build().estimate().unwrap(),
///     build().estimate().unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RngMonteCarloGameBuilder<R> {
    hand: Option<Hand>,
    community: CommunityCards,
    num_players: usize,
    config: EstimatorConfig,
    rng: R,
}

impl<R: Rng> RngMonteCarloGameBuilder<R> {
    /// Start a builder around the given rng.
    pub fn with_rng(rng: R) -> Self {
        Self {
            hand: None,
            community: CommunityCards::new(),
            num_players: 2,
            config: EstimatorConfig::default(),
            rng,
        }
    }

    /// Set the player's hole cards.
    pub fn hand(mut self, hand: Hand) -> Self {
        self.hand = Some(hand);
        self
    }

    /// Set the community cards that are already known.
    pub fn community(mut self, community: CommunityCards) -> Self {
        self.community = community;
        self
    }

    /// Players at the table, counting the player.
    pub fn num_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EstimatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    pub fn tie_handling(mut self, tie_handling: TieHandling) -> Self {
        self.config.tie_handling = tie_handling;
        self
    }

    pub fn secondary_tie_break(mut self, secondary_tie_break: SecondaryTieBreak) -> Self {
        self.config.secondary_tie_break = secondary_tie_break;
        self
    }

    pub fn complete_board(mut self, complete_board: bool) -> Self {
        self.config.complete_board = complete_board;
        self
    }

    /// Swap in a different rng, e.g. a seeded `StdRng`.
    pub fn rng<R2: Rng>(self, rng: R2) -> RngMonteCarloGameBuilder<R2> {
        RngMonteCarloGameBuilder {
            hand: self.hand,
            community: self.community,
            num_players: self.num_players,
            config: self.config,
            rng,
        }
    }

    /// Validate the fields and create the game.
    ///
    /// @returns OddsError::MissingHand if no hand was given.
    pub fn build(self) -> Result<MonteCarloGame<R>, OddsError> {
        let hand = self.hand.ok_or(OddsError::MissingHand)?;
        MonteCarloGame::with_config(
            hand,
            self.community,
            self.num_players,
            self.config,
            self.rng,
        )
    }
}

impl Default for RngMonteCarloGameBuilder<ThreadRng> {
    fn default() -> Self {
        Self::with_rng(rand::rng())
    }
}

/// The rng is ThreadRng.
pub type MonteCarloGameBuilder = RngMonteCarloGameBuilder<ThreadRng>;
