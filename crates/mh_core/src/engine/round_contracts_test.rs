//! Property tests for the round contracts: host-reveal exclusion, outcome
//! determination, and the switch/stay equivalence.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::engine::round::{Round, RoundOutcome, DOOR_COUNT};
use crate::models::Strategy;

proptest! {
    #[test]
    fn host_door_excludes_selection_and_prize(seed in any::<u64>(), door in 0..DOOR_COUNT) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);

        prop_assert!(round.pick(door, &mut rng));
        let host = round.host_opened_door().unwrap();
        prop_assert!(host < DOOR_COUNT);
        prop_assert_ne!(host, door);
        prop_assert_ne!(host, round.prize_door());
    }

    #[test]
    fn outcome_is_win_iff_final_choice_is_prize(
        seed in any::<u64>(),
        door in 0..DOOR_COUNT,
        switch_choice in any::<bool>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        prop_assert!(round.pick(door, &mut rng));
        prop_assert!(round.finalize(switch_choice));

        let won = round.final_choice() == Some(round.prize_door());
        prop_assert_eq!(round.outcome(), Some(RoundOutcome::from_won(won)));
    }

    #[test]
    fn switching_wins_iff_initial_pick_was_wrong(
        seed in any::<u64>(),
        door in 0..DOOR_COUNT,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        prop_assert!(round.pick(door, &mut rng));
        let picked_wrong = door != round.prize_door();

        prop_assert!(round.finalize(true));
        prop_assert_eq!(round.strategy(), Some(Strategy::Switch));
        prop_assert_eq!(round.outcome(), Some(RoundOutcome::from_won(picked_wrong)));
    }

    #[test]
    fn staying_wins_iff_initial_pick_was_right(
        seed in any::<u64>(),
        door in 0..DOOR_COUNT,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        prop_assert!(round.pick(door, &mut rng));
        let picked_right = door == round.prize_door();

        prop_assert!(round.finalize(false));
        prop_assert_eq!(round.strategy(), Some(Strategy::Stay));
        prop_assert_eq!(round.final_choice(), Some(door));
        prop_assert_eq!(round.outcome(), Some(RoundOutcome::from_won(picked_right)));
    }

    #[test]
    fn stale_events_never_change_a_finished_round(
        seed in any::<u64>(),
        door in 0..DOOR_COUNT,
        switch_choice in any::<bool>(),
        stale_door in 0..DOOR_COUNT,
        stale_switch in any::<bool>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::start(&mut rng);
        prop_assert!(round.pick(door, &mut rng));
        prop_assert!(round.finalize(switch_choice));
        let snapshot = round.clone();

        prop_assert!(!round.pick(stale_door, &mut rng));
        prop_assert!(!round.finalize(stale_switch));

        prop_assert_eq!(round.phase(), snapshot.phase());
        prop_assert_eq!(round.selected_door(), snapshot.selected_door());
        prop_assert_eq!(round.host_opened_door(), snapshot.host_opened_door());
        prop_assert_eq!(round.final_choice(), snapshot.final_choice());
        prop_assert_eq!(round.outcome(), snapshot.outcome());
    }
}
