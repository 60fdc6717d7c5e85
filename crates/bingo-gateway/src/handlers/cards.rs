use crate::error::{AppError, Result};
use crate::model::{CreateCardRequest, CreateCardResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bingo_core::{CardCode, CardError, CardRecord, NewCard, CODE_LENGTH, GRID_CELLS};
use tracing::error;

pub async fn create_card_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCardResponse>)> {
    let Json(request) = payload?;

    let items = request.items.ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid items array. Must contain exactly {} items.",
            GRID_CELLS
        ))
    })?;
    let card = NewCard::new(items, request.customization.unwrap_or_default())?;

    let code = state.cards().save(card).await.map_err(|e| {
        match &e {
            CardError::CodeSpaceExhausted { attempts } => {
                error!(attempts, "card code space exhausted")
            }
            CardError::PersistenceFailure(cause) => {
                error!(error = %cause, "failed to save card")
            }
        }
        AppError::Internal("Failed to save card. Please try again later.".to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCardResponse {
            message: "Card saved successfully!",
            code: code.to_string(),
        }),
    ))
}

pub async fn get_card_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CardRecord>> {
    let code = match CardCode::parse(&code) {
        Ok(code) => code,
        // a mistyped look-alike symbol can never match a saved card
        Err(_) if is_code_shaped(&code) => {
            return Err(AppError::NotFound("Card not found".to_string()))
        }
        Err(_) => return Err(AppError::BadRequest("Invalid code format".to_string())),
    };

    let record = state.cards().load(&code).await.map_err(|e| {
        error!(code = %code, error = %e, "failed to load card");
        AppError::Internal("Failed to fetch card. Please try again later.".to_string())
    })?;

    record
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
}

/// Six letters or digits, including symbols codes never use.
fn is_code_shaped(code: &str) -> bool {
    let code = code.trim();
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
