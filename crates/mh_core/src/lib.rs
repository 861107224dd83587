//! # mh_core - Deterministic Monty Hall Decision/Outcome Engine
//!
//! This library implements the decision and outcome rules of the Monty Hall
//! game: prize placement, the host's forced reveal of an empty door, the
//! stay-or-switch resolution, and win/loss statistics across interactive
//! rounds and bulk simulations.
//!
//! ## Features
//! - 100% deterministic play (same seed = same round, same simulation)
//! - Silent no-op handling of duplicate or stale caller events
//! - Exact integer win/loss tallies per strategy, rates derived on demand
//! - JSON API for easy integration with UI hosts
//!
//! Presentation concerns (status text, reveal timing, animation) belong to
//! the caller; the engine computes results immediately and hides nothing.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    play_round_json, simulate_json, PlayRoundRequest, PlayRoundResponse, SimulateRequest,
    SimulateResponse, SCHEMA_VERSION,
};
pub use error::ApiError;

// Re-export engine types
pub use engine::round::{Round, RoundOutcome, RoundPhase, DOOR_COUNT};
pub use engine::session::GameSession;
pub use engine::simulation::{simulate, SimulationReport};

// Re-export statistics types
pub use models::{SessionStats, Strategy, StrategyTally};
