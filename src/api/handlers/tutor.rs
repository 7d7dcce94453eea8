use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::AskTutorRequest;
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;

pub async fn ask_tutor(
    State(state): State<Arc<AppState>>,
    AuthUser(_caller): AuthUser,
    Json(payload): Json<AskTutorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = payload.question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(AppError::Validation("Question is required".into()))?
        .to_string();

    let api_key = state.config.gemini_api_key.clone()
        .ok_or(AppError::Validation("AI tutor is not configured".into()))?;

    let answer = state.tutor_service.answer(&api_key, &question).await?;

    Ok(Json(json!({
        "success": true,
        "response": answer,
    })))
}
