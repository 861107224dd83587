pub mod json_api;


pub use json_api::{
    play_round_json, simulate_json, PlayRoundRequest, PlayRoundResponse, SimulateRequest,
    SimulateResponse, SCHEMA_VERSION,
};
