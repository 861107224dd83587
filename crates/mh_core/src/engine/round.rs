//! Round state machine for the classic three-door game.
//!
//! ## State transitions
//! ```text
//! Picking --pick--> Revealing --finalize--> Finished
//! ```
//!
//! Nothing leaves `Finished`; a new round replaces the old one. Calls made in
//! the wrong phase are silent no-ops so duplicate or stale caller events
//! (double clicks, replayed UI messages) cannot corrupt a round. Each
//! operation reports whether it was applied or ignored.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Strategy;

/// Door count of the classic game.
pub const DOOR_COUNT: u8 = 3;

/// Where a round currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// Waiting for the player's initial door selection.
    #[default]
    Picking,
    /// Host door is open; waiting for the stay-or-switch decision.
    Revealing,
    /// Outcome decided. The round is read-only from here on.
    Finished,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Loss,
}

impl RoundOutcome {
    /// `Win` iff `won` is true.
    pub fn from_won(won: bool) -> Self {
        if won {
            RoundOutcome::Win
        } else {
            RoundOutcome::Loss
        }
    }
}

/// One playthrough from prize placement to final outcome.
///
/// The prize door is fixed at creation and never moves. The host door is
/// guaranteed to differ from both the selection and the prize. Callers decide
/// when (and whether) to show `prize_door` to a player; the engine itself
/// hides nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    phase: RoundPhase,
    door_count: u8,
    prize_door: u8,
    selected_door: Option<u8>,
    host_opened_door: Option<u8>,
    final_choice: Option<u8>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Start a fresh round: place the prize uniformly at random and enter the
    /// `Picking` phase.
    pub fn start(rng: &mut impl Rng) -> Self {
        let prize_door = rng.gen_range(0..DOOR_COUNT);
        log::debug!("round started, prize behind door {}", prize_door);
        Self {
            phase: RoundPhase::Picking,
            door_count: DOOR_COUNT,
            prize_door,
            selected_door: None,
            host_opened_door: None,
            final_choice: None,
            outcome: None,
        }
    }

    /// Apply the player's initial selection and the host's reveal.
    ///
    /// The host opens a door chosen uniformly at random among the doors that
    /// are neither selected nor hiding the prize: one candidate when the pick
    /// is wrong, two when the pick is the prize. Returns `false` without any
    /// state change when called outside `Picking` or with an out-of-range
    /// door id.
    pub fn pick(&mut self, door: u8, rng: &mut impl Rng) -> bool {
        if self.phase != RoundPhase::Picking || door >= self.door_count {
            log::debug!("ignoring pick({}) in phase {:?}", door, self.phase);
            return false;
        }

        let candidates: Vec<u8> =
            self.doors().filter(|&d| d != door && d != self.prize_door).collect();
        let host_door = candidates[rng.gen_range(0..candidates.len())];

        self.selected_door = Some(door);
        self.host_opened_door = Some(host_door);
        self.phase = RoundPhase::Revealing;
        log::debug!("player picked door {}, host opened door {}", door, host_door);
        true
    }

    /// Resolve the round with the player's stay-or-switch decision.
    ///
    /// Switching moves to the unique door that is neither selected nor host
    /// opened. Returns `false` without any state change when called outside
    /// `Revealing`.
    pub fn finalize(&mut self, switch_choice: bool) -> bool {
        if self.phase != RoundPhase::Revealing {
            log::debug!("ignoring finalize in phase {:?}", self.phase);
            return false;
        }
        let selected = match self.selected_door {
            Some(door) => door,
            None => return false,
        };
        let host_door = match self.host_opened_door {
            Some(door) => door,
            None => return false,
        };

        let final_choice = if switch_choice {
            match self.doors().find(|&d| d != selected && d != host_door) {
                Some(door) => door,
                None => return false,
            }
        } else {
            selected
        };

        let outcome = RoundOutcome::from_won(final_choice == self.prize_door);
        self.final_choice = Some(final_choice);
        self.outcome = Some(outcome);
        self.phase = RoundPhase::Finished;
        log::debug!(
            "round finished: final door {}, {:?} ({})",
            final_choice,
            outcome,
            if switch_choice { "switch" } else { "stay" }
        );
        true
    }

    /// All door ids of this round, in order.
    pub fn doors(&self) -> impl Iterator<Item = u8> {
        0..self.door_count
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn door_count(&self) -> u8 {
        self.door_count
    }

    /// The door hiding the prize. Callers must not display this before the
    /// round is `Finished`.
    pub fn prize_door(&self) -> u8 {
        self.prize_door
    }

    pub fn selected_door(&self) -> Option<u8> {
        self.selected_door
    }

    pub fn host_opened_door(&self) -> Option<u8> {
        self.host_opened_door
    }

    pub fn final_choice(&self) -> Option<u8> {
        self.final_choice
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// The strategy a finished round was resolved under.
    pub fn strategy(&self) -> Option<Strategy> {
        let selected = self.selected_door?;
        let final_choice = self.final_choice?;
        Some(if final_choice == selected { Strategy::Stay } else { Strategy::Switch })
    }

    /// The outcome the opposite stay-or-switch decision would have produced.
    ///
    /// `None` until the round is `Finished`. With three doors this is always
    /// the negation of the actual outcome.
    pub fn counterfactual_outcome(&self) -> Option<RoundOutcome> {
        if self.phase != RoundPhase::Finished {
            return None;
        }
        let selected = self.selected_door?;
        let host_door = self.host_opened_door?;
        let final_choice = self.final_choice?;

        let opposite_choice = if final_choice == selected {
            self.doors().find(|&d| d != selected && d != host_door)?
        } else {
            selected
        };
        Some(RoundOutcome::from_won(opposite_choice == self.prize_door))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Smallest seed whose first draw places the prize behind `prize`.
    fn seed_with_prize(prize: u8) -> u64 {
        (0u64..)
            .find(|&seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Round::start(&mut rng).prize_door() == prize
            })
            .unwrap()
    }

    #[test]
    fn test_start_enters_picking_with_unset_fields() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let round = Round::start(&mut rng);

        assert_eq!(round.phase(), RoundPhase::Picking);
        assert!(round.prize_door() < DOOR_COUNT);
        assert_eq!(round.selected_door(), None);
        assert_eq!(round.host_opened_door(), None);
        assert_eq!(round.final_choice(), None);
        assert_eq!(round.outcome(), None);
        assert_eq!(round.doors().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_same_seed_same_round() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(Round::start(&mut a).prize_door(), Round::start(&mut b).prize_door());
    }

    #[test]
    fn test_host_avoids_selection_and_prize() {
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for door in 0..DOOR_COUNT {
                let mut round = Round::start(&mut rng);
                assert!(round.pick(door, &mut rng));
                let host = round.host_opened_door().unwrap();
                assert_ne!(host, door);
                assert_ne!(host, round.prize_door());
                assert!(host < DOOR_COUNT);
                assert_eq!(round.phase(), RoundPhase::Revealing);
            }
        }
    }

    #[test]
    fn test_switch_on_wrong_pick_wins() {
        let seed = seed_with_prize(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        assert_eq!(round.prize_door(), 1);

        assert!(round.pick(0, &mut rng));
        // Doors 0 and 1 are excluded, so the host has no choice.
        assert_eq!(round.host_opened_door(), Some(2));

        assert!(round.finalize(true));
        assert_eq!(round.final_choice(), Some(1));
        assert_eq!(round.outcome(), Some(RoundOutcome::Win));
        assert_eq!(round.strategy(), Some(Strategy::Switch));
    }

    #[test]
    fn test_stay_on_wrong_pick_loses() {
        let seed = seed_with_prize(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        assert_eq!(round.prize_door(), 1);

        assert!(round.pick(0, &mut rng));
        assert!(round.finalize(false));
        assert_eq!(round.final_choice(), Some(0));
        assert_eq!(round.outcome(), Some(RoundOutcome::Loss));
        assert_eq!(round.strategy(), Some(Strategy::Stay));
    }

    #[test]
    fn test_outcome_iff_final_choice_is_prize() {
        for seed in 0..64 {
            for door in 0..DOOR_COUNT {
                for switch_choice in [false, true] {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    let mut round = Round::start(&mut rng);
                    round.pick(door, &mut rng);
                    round.finalize(switch_choice);

                    let won = round.final_choice() == Some(round.prize_door());
                    assert_eq!(round.outcome(), Some(RoundOutcome::from_won(won)));
                }
            }
        }
    }

    #[test]
    fn test_second_pick_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut round = Round::start(&mut rng);

        assert!(round.pick(0, &mut rng));
        let selected = round.selected_door();
        let host = round.host_opened_door();

        assert!(!round.pick(1, &mut rng));
        assert_eq!(round.selected_door(), selected);
        assert_eq!(round.host_opened_door(), host);
        assert_eq!(round.phase(), RoundPhase::Revealing);
    }

    #[test]
    fn test_finalize_before_pick_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut round = Round::start(&mut rng);

        assert!(!round.finalize(true));
        assert_eq!(round.phase(), RoundPhase::Picking);
        assert_eq!(round.final_choice(), None);
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn test_finished_round_is_inert() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut round = Round::start(&mut rng);
        round.pick(2, &mut rng);
        round.finalize(true);
        let snapshot = round.clone();

        assert!(!round.pick(0, &mut rng));
        assert!(!round.finalize(false));
        assert_eq!(round.phase(), snapshot.phase());
        assert_eq!(round.final_choice(), snapshot.final_choice());
        assert_eq!(round.outcome(), snapshot.outcome());
    }

    #[test]
    fn test_out_of_range_door_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut round = Round::start(&mut rng);

        assert!(!round.pick(DOOR_COUNT, &mut rng));
        assert_eq!(round.phase(), RoundPhase::Picking);
        assert_eq!(round.selected_door(), None);
    }

    #[test]
    fn test_counterfactual_is_opposite_outcome() {
        for seed in 0..64 {
            for switch_choice in [false, true] {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut round = Round::start(&mut rng);
                round.pick(1, &mut rng);

                assert_eq!(round.counterfactual_outcome(), None);
                round.finalize(switch_choice);

                let actual = round.outcome().unwrap();
                let counterfactual = round.counterfactual_outcome().unwrap();
                assert_ne!(actual, counterfactual);
            }
        }
    }
}
