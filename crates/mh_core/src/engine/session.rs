//! Game session: one handle owning the active round, the statistics and the
//! randomness stream.
//!
//! Interactive callers (a UI host, the CLI) drive the session instead of
//! wiring `Round`, `SessionStats` and an RNG together themselves. A finished
//! round is reported to the statistics automatically under the strategy the
//! player actually used, matching what an interactive game expects. The
//! statistics stay an explicitly owned value; nothing here is global.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::engine::round::Round;
use crate::engine::simulation::{simulate, SimulationReport};
use crate::models::{SessionStats, Strategy};

/// Stateful driver for interactive play and bulk simulation.
pub struct GameSession {
    round: Round,
    stats: SessionStats,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Session with operating-system entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Deterministic session: same seed, same rounds, same simulations.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Self {
        let round = Round::start(&mut rng);
        Self { round, stats: SessionStats::new(), rng }
    }

    /// Replace the current round with a fresh `Picking`-phase round.
    pub fn new_game(&mut self) {
        self.round = Round::start(&mut self.rng);
    }

    /// Apply the player's initial selection to the current round.
    pub fn pick(&mut self, door: u8) -> bool {
        self.round.pick(door, &mut self.rng)
    }

    /// Resolve the current round and record its outcome.
    ///
    /// Returns `false` (and records nothing) when the round is not in the
    /// `Revealing` phase.
    pub fn finalize(&mut self, switch_choice: bool) -> bool {
        if !self.round.finalize(switch_choice) {
            return false;
        }
        let strategy = if switch_choice { Strategy::Switch } else { Strategy::Stay };
        if let Some(outcome) = self.round.outcome() {
            self.stats.report(strategy, outcome);
        }
        true
    }

    /// Run a bulk simulation and fold it into the session statistics.
    pub fn run_simulation(&mut self, trials: u64) -> SimulationReport {
        let report = simulate(trials, &mut self.rng);
        report.fold_into(&mut self.stats);
        report
    }

    /// Snapshot of the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Snapshot of the running statistics.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Clear the statistics; the current round is untouched.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
