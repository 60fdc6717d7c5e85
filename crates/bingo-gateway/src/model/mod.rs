mod analytics;
mod card;
mod pool;

pub use analytics::{TrackEventRequest, TrackEventResponse};
pub use card::{CreateCardRequest, CreateCardResponse};
pub use pool::{PoolSignupRequest, PoolSignupResponse};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
