//! Bulk simulation of hypothetical rounds.
//!
//! A round's prize and initial pick fully determine both strategies' results:
//! with one empty non-picked door revealed by the host, staying wins exactly
//! when the initial pick was right and switching wins exactly when it was
//! wrong. The simulator therefore skips the phased state machine and scores
//! both strategies per trial from two uniform draws.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::round::DOOR_COUNT;
use crate::models::{SessionStats, Strategy};

/// Outcome totals of one simulation run. Every trial is counted once per
/// strategy, so `stay_wins + switch_wins == trials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub trials: u64,
    pub stay_wins: u64,
    pub switch_wins: u64,
}

impl SimulationReport {
    /// Losses on the stay side.
    pub fn stay_losses(&self) -> u64 {
        self.trials - self.stay_wins
    }

    /// Losses on the switch side.
    pub fn switch_losses(&self) -> u64 {
        self.trials - self.switch_wins
    }

    /// Fold this run into an aggregator, one bulk report per strategy.
    ///
    /// Both strategies are evaluated for every trial, so folding adds
    /// `2 * trials` to the aggregator's total.
    pub fn fold_into(&self, stats: &mut SessionStats) {
        stats.bulk_report(Strategy::Stay, self.stay_wins, self.stay_losses());
        stats.bulk_report(Strategy::Switch, self.switch_wins, self.switch_losses());
    }
}

/// Run `trials` independent hypothetical rounds and score both strategies.
pub fn simulate(trials: u64, rng: &mut impl Rng) -> SimulationReport {
    let mut stay_wins = 0;
    for _ in 0..trials {
        let prize = rng.gen_range(0..DOOR_COUNT);
        let initial_pick = rng.gen_range(0..DOOR_COUNT);
        if initial_pick == prize {
            stay_wins += 1;
        }
    }
    let report = SimulationReport { trials, stay_wins, switch_wins: trials - stay_wins };
    log::info!(
        "simulated {} rounds: stay {} wins, switch {} wins",
        trials,
        report.stay_wins,
        report.switch_wins
    );
    report
}
