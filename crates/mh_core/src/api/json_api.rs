//! JSON API for UI hosts.
//!
//! String-in/string-out entry points so a front end (game engine, web view,
//! scripting host) can drive the engine without linking against its types.
//! Every request carries a `schema_version` and a `seed`; replaying the same
//! request always returns the same response. Errors come back as
//! `"MH###: message"` strings with stable codes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::engine::round::{Round, RoundOutcome, DOOR_COUNT};
use crate::engine::simulation::{simulate, SimulationReport};
use crate::error::ApiError;
use crate::models::{SessionStats, Strategy};

/// Current request/response schema version.
pub const SCHEMA_VERSION: u8 = 1;

/// Request for one complete round, played deterministically from `seed`.
#[derive(Debug, Deserialize)]
pub struct PlayRoundRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Player's initial selection, `0..3`.
    pub picked_door: u8,
    /// True to switch to the remaining closed door, false to stay.
    pub switch: bool,
}

/// Finished-round snapshot returned by [`play_round_json`].
#[derive(Debug, Serialize)]
pub struct PlayRoundResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub round: Round,
    pub strategy: Strategy,
    pub outcome: RoundOutcome,
    /// What the opposite decision would have produced.
    pub counterfactual_outcome: RoundOutcome,
}

/// Request for a bulk simulation run.
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Number of hypothetical rounds; must be at least 1.
    pub count: u64,
}

/// Simulation report plus the statistics it folds into.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub report: SimulationReport,
    pub stats: SessionStats,
    pub stay_win_rate: f64,
    pub switch_win_rate: f64,
}

/// Play one full round (start, pick, finalize) from a seeded RNG.
///
/// Fails fast on malformed JSON, an unsupported schema version, or an
/// out-of-range `picked_door`.
pub fn play_round_json(request_json: &str) -> Result<String, String> {
    let request: PlayRoundRequest =
        serde_json::from_str(request_json).map_err(|e| ApiError::from(e).coded_message())?;

    check_schema(request.schema_version).map_err(|e| e.coded_message())?;
    if request.picked_door >= DOOR_COUNT {
        return Err(ApiError::InvalidDoor { door: request.picked_door, door_count: DOOR_COUNT }
            .coded_message());
    }

    let response = play_round(&request).map_err(|e| e.coded_message())?;
    serde_json::to_string(&response)
        .map_err(|e| ApiError::Serialization(e.to_string()).coded_message())
}

/// Run a bulk simulation and return the report plus resulting statistics.
///
/// Fails fast on malformed JSON, an unsupported schema version, or a zero
/// trial count.
pub fn simulate_json(request_json: &str) -> Result<String, String> {
    let request: SimulateRequest =
        serde_json::from_str(request_json).map_err(|e| ApiError::from(e).coded_message())?;

    check_schema(request.schema_version).map_err(|e| e.coded_message())?;
    if request.count == 0 {
        return Err(ApiError::InvalidTrialCount.coded_message());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let report = simulate(request.count, &mut rng);
    let mut stats = SessionStats::new();
    report.fold_into(&mut stats);

    let response = SimulateResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        report,
        stay_win_rate: stats.win_rate(Strategy::Stay),
        switch_win_rate: stats.win_rate(Strategy::Switch),
        stats,
    };
    serde_json::to_string(&response)
        .map_err(|e| ApiError::Serialization(e.to_string()).coded_message())
}

fn check_schema(found: u8) -> Result<(), ApiError> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(ApiError::UnsupportedSchema { found, expected: SCHEMA_VERSION })
    }
}

fn play_round(request: &PlayRoundRequest) -> Result<PlayRoundResponse, ApiError> {
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let mut round = Round::start(&mut rng);

    // Door id was validated above; on a fresh round both calls apply.
    if !round.pick(request.picked_door, &mut rng) || !round.finalize(request.switch) {
        return Err(ApiError::InvalidRequest("round did not finish".to_string()));
    }
    let outcome = round
        .outcome()
        .ok_or_else(|| ApiError::InvalidRequest("round did not finish".to_string()))?;
    let strategy = if request.switch { Strategy::Switch } else { Strategy::Stay };
    let counterfactual_outcome = round
        .counterfactual_outcome()
        .ok_or_else(|| ApiError::InvalidRequest("round did not finish".to_string()))?;

    Ok(PlayRoundResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        round,
        strategy,
        outcome,
        counterfactual_outcome,
    })
}
