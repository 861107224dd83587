//! API-layer error taxonomy.
//!
//! Engine operations themselves have no failure mode beyond the silent
//! no-op on out-of-phase calls; errors only arise at the JSON boundary,
//! where malformed requests must fail fast with a stable code.

use thiserror::Error;

/// Stable error codes surfaced at the JSON boundary.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "MH001";
    pub const UNSUPPORTED_SCHEMA: &str = "MH002";
    pub const INVALID_DOOR: &str = "MH003";
    pub const INVALID_TRIAL_COUNT: &str = "MH004";
    pub const SERIALIZATION: &str = "MH005";
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("door {door} out of range for {door_count} doors")]
    InvalidDoor { door: u8, door_count: u8 },

    #[error("simulation requires at least one trial")]
    InvalidTrialCount,

    #[error("response serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => error_codes::INVALID_REQUEST,
            ApiError::UnsupportedSchema { .. } => error_codes::UNSUPPORTED_SCHEMA,
            ApiError::InvalidDoor { .. } => error_codes::INVALID_DOOR,
            ApiError::InvalidTrialCount => error_codes::INVALID_TRIAL_COUNT,
            ApiError::Serialization(_) => error_codes::SERIALIZATION,
        }
    }

    /// The JSON boundary format, e.g. `"MH003: door 7 out of range for 3 doors"`.
    pub fn coded_message(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}
