//! Win/loss statistics per player strategy.
//!
//! Counts are exact unsigned integers; percentages are derived on demand and
//! rounded to one decimal for display only. The aggregate is a plain value
//! owned by whoever drives the engine (a `GameSession`, a UI host, a test),
//! mutated only through `report`/`bulk_report` and cleared only by `reset`.

use serde::{Deserialize, Serialize};

use crate::engine::round::RoundOutcome;

/// The player's final-decision strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the originally selected door.
    Stay,
    /// Move to the remaining closed door.
    Switch,
}

impl Strategy {
    /// The other strategy.
    pub fn opposite(self) -> Self {
        match self {
            Strategy::Stay => Strategy::Switch,
            Strategy::Switch => Strategy::Stay,
        }
    }

    /// Lowercase label, matching the wire names.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

/// Win/loss pair for one strategy.
///
/// Invariant: `wins + losses` equals the number of rounds resolved under the
/// strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTally {
    pub wins: u64,
    pub losses: u64,
}

impl StrategyTally {
    /// Rounds resolved under this strategy.
    pub fn resolved(&self) -> u64 {
        self.wins + self.losses
    }

    /// Win percentage rounded to one decimal; `0.0` with no resolved rounds.
    pub fn win_rate(&self) -> f64 {
        let resolved = self.resolved();
        if resolved == 0 {
            return 0.0;
        }
        let rate = 100.0 * self.wins as f64 / resolved as f64;
        (rate * 10.0).round() / 10.0
    }
}

/// Running statistics across both strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds resolved across both strategies.
    pub total: u64,
    pub stay: StrategyTally,
    pub switch: StrategyTally,
}

impl SessionStats {
    /// Create an all-zero statistics value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved round.
    pub fn report(&mut self, strategy: Strategy, outcome: RoundOutcome) {
        self.total += 1;
        let tally = self.tally_mut(strategy);
        match outcome {
            RoundOutcome::Win => tally.wins += 1,
            RoundOutcome::Loss => tally.losses += 1,
        }
    }

    /// Fold a batch of resolved rounds into one strategy's tally.
    ///
    /// Used by bulk simulation to avoid per-round call overhead.
    pub fn bulk_report(&mut self, strategy: Strategy, wins: u64, losses: u64) {
        self.total += wins + losses;
        let tally = self.tally_mut(strategy);
        tally.wins += wins;
        tally.losses += losses;
    }

    /// Win percentage for a strategy, rounded to one decimal.
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.tally(strategy).win_rate()
    }

    /// The tally tracked for a strategy.
    pub fn tally(&self, strategy: Strategy) -> &StrategyTally {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    fn tally_mut(&mut self, strategy: Strategy) -> &mut StrategyTally {
        match strategy {
            Strategy::Stay => &mut self.stay,
            Strategy::Switch => &mut self.switch,
        }
    }

    /// Zero the total and both tallies.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
