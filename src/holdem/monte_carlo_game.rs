use std::ops::{Add, AddAssign};

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{Level, event, trace_span};

use super::{EstimatorConfig, TieHandling, compare_hands_with};
use crate::core::{
    Card, CommunityCards, Deck, Hand, MAX_COMMUNITY_CARDS, OddsError, evaluate_hand,
};

/// Most players a single deck can deal two hole cards to with a full board left over.
pub const MAX_PLAYERS: usize = (52 - MAX_COMMUNITY_CARDS) / 2;

/// What happened to the player in a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialResult {
    /// No opponent was as strong as the player.
    Win,
    /// The best opponent matched the player exactly.
    Tie,
    /// At least one opponent was stronger.
    Loss,
}

/// Counters for one probability query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationOutcome {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl SimulationOutcome {
    /// Count one trial.
    pub fn record(&mut self, result: TrialResult, tie_handling: TieHandling) {
        match (result, tie_handling) {
            (TrialResult::Win, _) | (TrialResult::Tie, TieHandling::CountAsWin) => self.wins += 1,
            (TrialResult::Tie, TieHandling::Separate) => self.ties += 1,
            (TrialResult::Loss, _) => self.losses += 1,
        }
    }

    /// Total number of trials counted.
    pub fn trials(&self) -> usize {
        self.wins + self.losses + self.ties
    }

    /// `wins * 100 / trials`, truncated. None if nothing was counted.
    ///
    /// ```
    /// use holdem_odds::holdem::SimulationOutcome;
    ///
    /// let outcome = SimulationOutcome { wins: 2, losses: 1, ties: 0 };
    /// assert_eq!(Some(66), outcome.win_percentage());
    /// assert_eq!(None, SimulationOutcome::default().win_percentage());
    /// ```
    pub fn win_percentage(&self) -> Option<u8> {
        let trials = self.trials();
        if trials == 0 {
            return None;
        }
        // wins <= trials so this is at most 100
        Some((self.wins * 100 / trials) as u8)
    }

    /// Fraction of trials won, without truncation.
    pub fn win_rate(&self) -> Option<f64> {
        match self.trials() {
            0 => None,
            trials => Some(self.wins as f64 / trials as f64),
        }
    }
}

impl Add for SimulationOutcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
            ties: self.ties + rhs.ties,
        }
    }
}

impl AddAssign for SimulationOutcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Everything needed to run trials except the rng.
///
/// The deck and the opponent and board vectors are reused between trials.
#[derive(Debug, Clone)]
struct Dealer {
    hand: Hand,
    community: CommunityCards,
    num_players: usize,
    config: EstimatorConfig,
    deck: Deck,
    opponents: Vec<Hand>,
    board: Vec<Card>,
}

impl Dealer {
    fn new(
        hand: Hand,
        community: CommunityCards,
        num_players: usize,
        config: EstimatorConfig,
    ) -> Result<Self, OddsError> {
        config.validate()?;
        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return Err(OddsError::InvalidPlayerCount(num_players));
        }

        let mut known = community.to_bit_set();
        for card in &hand {
            if !known.insert(*card) {
                return Err(OddsError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            hand,
            community,
            num_players,
            config,
            deck: Deck::new(),
            opponents: Vec::with_capacity(num_players - 1),
            board: Vec::with_capacity(MAX_COMMUNITY_CARDS),
        })
    }

    fn draw(&mut self) -> Result<Card, OddsError> {
        self.deck.draw().ok_or(OddsError::DeckExhausted)
    }

    /// Deal one random completion and judge it.
    fn simulate<R: Rng>(&mut self, rng: &mut R) -> Result<TrialResult, OddsError> {
        self.deck.reset();
        self.deck.shuffle(rng);
        for card in self.hand.iter().chain(self.community.iter()) {
            self.deck.mark_removed(card);
        }

        self.opponents.clear();
        for _ in 1..self.num_players {
            let first = self.draw()?;
            let second = self.draw()?;
            self.opponents.push(Hand::new(first, second)?);
        }

        self.board.clear();
        self.board.extend_from_slice(&self.community);
        if self.config.complete_board {
            for _ in 0..self.community.remaining() {
                let card = self.draw()?;
                self.board.push(card);
            }
        }

        Ok(self.judge())
    }

    fn judge(&self) -> TrialResult {
        let tie_break = self.config.secondary_tie_break;
        let player = evaluate_hand(&self.hand, &self.board);

        let mut result = TrialResult::Win;
        for opponent in &self.opponents {
            let strength = evaluate_hand(opponent, &self.board);
            match compare_hands_with(&strength, &player, tie_break) {
                std::cmp::Ordering::Greater => return TrialResult::Loss,
                std::cmp::Ordering::Equal => result = TrialResult::Tie,
                std::cmp::Ordering::Less => {}
            }
        }
        result
    }

    fn run<R: Rng>(&mut self, rng: &mut R, trials: usize) -> Result<SimulationOutcome, OddsError> {
        let mut outcome = SimulationOutcome::default();
        for _ in 0..trials {
            let result = self.simulate(rng)?;
            event!(Level::TRACE, ?result, "trial");
            outcome.record(result, self.config.tie_handling);
        }
        Ok(outcome)
    }
}

/// Monte Carlo estimate of how often a hand wins.
///
/// Every trial shuffles a fresh deck, removes the known cards, deals two
/// hole cards to each opponent, deals out the rest of the board, and
/// checks whether any opponent beats the player.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_odds::core::{CommunityCards, Hand};
/// use holdem_odds::holdem::MonteCarloGameBuilder;
///
/// let mut game = MonteCarloGameBuilder::default()
///     .hand(Hand::new_from_str("AsAh").unwrap())
///     .community(CommunityCards::new_from_str("AdKcKh").unwrap())
///     .num_players(3)
///     .trials(1_000)
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
///
/// let percent = game.estimate_win_probability().unwrap();
/// assert!(percent > 90);
/// ```
#[derive(Debug)]
pub struct MonteCarloGame<R = ThreadRng> {
    dealer: Dealer,
    rng: R,
}

impl MonteCarloGame<ThreadRng> {
    /// Game using the default configuration and the thread local rng.
    pub fn new(
        hand: Hand,
        community: CommunityCards,
        num_players: usize,
    ) -> Result<Self, OddsError> {
        Self::with_config(hand, community, num_players, EstimatorConfig::default(), rand::rng())
    }
}

impl<R: Rng> MonteCarloGame<R> {
    pub fn with_config(
        hand: Hand,
        community: CommunityCards,
        num_players: usize,
        config: EstimatorConfig,
        rng: R,
    ) -> Result<Self, OddsError> {
        Ok(Self {
            dealer: Dealer::new(hand, community, num_players, config)?,
            rng,
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.dealer.config
    }

    /// Run a single trial.
    pub fn simulate(&mut self) -> Result<TrialResult, OddsError> {
        self.dealer.simulate(&mut self.rng)
    }

    /// Run the configured number of trials and return the counters.
    pub fn estimate(&mut self) -> Result<SimulationOutcome, OddsError> {
        let span = trace_span!(
            "estimate",
            players = self.dealer.num_players,
            community = self.dealer.community.len(),
            trials = self.dealer.config.trials
        );
        let _enter = span.enter();

        let outcome = self.dealer.run(&mut self.rng, self.dealer.config.trials)?;
        event!(
            Level::DEBUG,
            wins = outcome.wins,
            losses = outcome.losses,
            ties = outcome.ties,
            "estimate finished"
        );
        Ok(outcome)
    }

    /// Percentage of trials won, in `0..=100`.
    pub fn estimate_win_probability(&mut self) -> Result<u8, OddsError> {
        self.estimate()?.win_percentage().ok_or(OddsError::NoTrials)
    }
}

#[cfg(feature = "parallel")]
impl<R: Rng> MonteCarloGame<R> {
    /// Trials handed to one rayon task.
    const CHUNK_TRIALS: usize = 1_000;

    /// Same as `estimate` but spread over the rayon thread pool.
    ///
    /// Each chunk of trials gets its own deck and its own `StdRng`, seeded
    /// from this game's rng, so a seeded game gives the same answer no
    /// matter how many threads run it.
    pub fn estimate_parallel(&mut self) -> Result<SimulationOutcome, OddsError> {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use rayon::prelude::*;

        let trials = self.dealer.config.trials;
        let chunks: Vec<(u64, usize)> = (0..trials)
            .step_by(Self::CHUNK_TRIALS)
            .map(|start| {
                let len = Self::CHUNK_TRIALS.min(trials - start);
                (self.rng.random::<u64>(), len)
            })
            .collect();

        let dealer = &self.dealer;
        let outcome = chunks
            .into_par_iter()
            .map(|(seed, len)| {
                let mut rng = StdRng::seed_from_u64(seed);
                dealer.clone().run(&mut rng, len)
            })
            .try_reduce(SimulationOutcome::default, |a, b| Ok(a + b))?;

        event!(
            Level::DEBUG,
            wins = outcome.wins,
            losses = outcome.losses,
            ties = outcome.ties,
            "parallel estimate finished"
        );
        Ok(outcome)
    }
}

/// Estimate the player's chance of winning, as a whole percentage, with
/// `num_players` at the table including the player.
///
/// Uses the default configuration: ten thousand trials with the thread
/// local rng.
///
/// ```
/// use holdem_odds::core::{CommunityCards, Hand};
/// use holdem_odds::holdem::estimate_win_probability;
///
/// let hand = Hand::new_from_str("AsAh").unwrap();
/// let percent = estimate_win_probability(&hand, &CommunityCards::new(), 2).unwrap();
/// assert!(percent <= 100);
/// ```
pub fn estimate_win_probability(
    hand: &Hand,
    community: &CommunityCards,
    num_players: usize,
) -> Result<u8, OddsError> {
    MonteCarloGame::new(*hand, community.clone(), num_players)?.estimate_win_probability()
}
