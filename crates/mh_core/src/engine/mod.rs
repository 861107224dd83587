//! Round engine: the phased state machine of one playthrough, the bulk
//! simulator, and the session driver tying them to the statistics.

pub mod round;
pub mod session;
pub mod simulation;

#[cfg(test)]
mod round_contracts_test;

pub use round::{Round, RoundOutcome, RoundPhase, DOOR_COUNT};
pub use session::GameSession;
pub use simulation::{simulate, SimulationReport};
