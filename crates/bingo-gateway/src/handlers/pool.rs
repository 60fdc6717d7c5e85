use crate::error::{AppError, Result};
use crate::model::{PoolSignupRequest, PoolSignupResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use bingo_core::{PoolSignup, StorageError};
use tracing::{error, info};

pub async fn pool_signup_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PoolSignupRequest>, JsonRejection>,
) -> Result<Json<PoolSignupResponse>> {
    let Json(request) = payload?;

    let (Some(name), Some(phone_number)) = (
        request.name.filter(|name| !name.trim().is_empty()),
        request.phone_number.filter(|phone| !phone.trim().is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Name and phone number are required".to_string(),
        ));
    };

    let signup = PoolSignup::new(&name, &phone_number)
        .map_err(|_| AppError::BadRequest("Please enter a valid phone number".to_string()))?;

    match state.signups().insert_signup(&signup).await {
        Ok(()) => {
            info!("bingo pool signup recorded");
            Ok(Json(PoolSignupResponse {
                message: "Successfully signed up for the bingo pool!",
            }))
        }
        Err(StorageError::Conflict(_)) => Err(AppError::Conflict(
            "This phone number is already registered.".to_string(),
        )),
        Err(e) => {
            error!(error = %e, "failed to record bingo pool signup");
            Err(AppError::Internal(
                "Failed to process signup. Please try again later.".to_string(),
            ))
        }
    }
}
