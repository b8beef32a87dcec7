use super::SecondaryTieBreak;
use crate::core::OddsError;

/// Number of trials run for one probability query unless configured.
pub const DEFAULT_TRIALS: usize = 10_000;

/// What a trial where the best opponent only ties the player counts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieHandling {
    /// A tie is a win for the player.
    #[default]
    CountAsWin,
    /// Ties are counted on their own and never added to wins.
    Separate,
}

/// Settings for a Monte Carlo estimate.
///
/// The default is ten thousand trials, ties counted as wins, the one
/// sided secondary value winning, and the board dealt out to five cards
/// on every trial.
///
/// With the `serde` feature this can be read from json:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use holdem_odds::holdem::{EstimatorConfig, TieHandling};
///
/// let config: EstimatorConfig =
///     serde_json::from_str(r#"{"trials": 500, "tie_handling": "Separate"}"#).unwrap();
/// assert_eq!(500, config.trials);
/// assert_eq!(TieHandling::Separate, config.tie_handling);
/// assert!(config.complete_board);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig {
    /// How many random deals to run.
    pub trials: usize,
    pub tie_handling: TieHandling,
    pub secondary_tie_break: SecondaryTieBreak,
    /// Deal the unknown community cards on every trial. When false every
    /// hand is judged only on the community cards known right now.
    pub complete_board: bool,
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<(), OddsError> {
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            tie_handling: TieHandling::default(),
            secondary_tie_break: SecondaryTieBreak::default(),
            complete_board: true,
        }
    }
}
