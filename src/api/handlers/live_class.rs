use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AuthUser, InstructorUser};
use crate::api::dtos::{
    requests::{CreateLiveClassRequest, DeleteLiveClassRequest, UpdateLiveClassRequest},
    responses::LiveClassResponse,
};
use crate::domain::models::live_class::LiveClass;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;

fn parse_rfc3339(value: &str, field: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected RFC 3339 timestamp)", field)))
}

/// Expand each class's owning instructor into display fields with one
/// batched user lookup.
async fn expand_instructors(
    state: &AppState,
    classes: Vec<LiveClass>,
) -> Result<Vec<LiveClassResponse>, AppError> {
    let mut ids: Vec<String> = classes.iter().map(|c| c.instructor_id.clone()).collect();
    ids.sort();
    ids.dedup();

    let instructors = state.user_repo.find_by_ids(&ids).await?;
    let by_id: HashMap<String, _> = instructors.into_iter().map(|u| (u.id.clone(), u)).collect();

    Ok(classes
        .into_iter()
        .map(|class| {
            let instructor = by_id.get(&class.instructor_id);
            LiveClassResponse::from_class(class, instructor)
        })
        .collect())
}

pub async fn create_live_class(
    State(state): State<Arc<AppState>>,
    InstructorUser(caller): InstructorUser,
    Json(payload): Json<CreateLiveClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    let title = payload.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Validation("Title is required".into()))?
        .to_string();

    let start_raw = payload.start_time
        .ok_or(AppError::Validation("Start time is required".into()))?;
    let end_raw = payload.end_time
        .ok_or(AppError::Validation("End time is required".into()))?;

    let meeting_link = payload.meeting_link
        .filter(|l| !l.trim().is_empty())
        .ok_or(AppError::Validation("Meeting link is required".into()))?;

    let students = payload.students
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Validation("At least one student must be assigned".into()))?;

    let start_time = parse_rfc3339(&start_raw, "start_time")?;
    let end_time = parse_rfc3339(&end_raw, "end_time")?;

    if start_time >= end_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }

    // The owning instructor is always the authenticated caller; an
    // instructor id smuggled into the body is ignored.
    let class = LiveClass::new(
        title,
        payload.description,
        start_time,
        end_time,
        caller.id,
        meeting_link,
        &students,
    );
    let created = state.live_class_repo.create(&class).await?;

    info!("Created live class {} ({})", created.id, created.title);

    Ok((StatusCode::CREATED, Json(json!({
        "success": true,
        "message": "Live class created successfully",
        "data": LiveClassResponse::from_class(created, None),
    }))))
}

pub async fn get_upcoming_live_classes(
    State(state): State<Arc<AppState>>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let classes = state.live_class_repo
        .list_upcoming_for_student(&caller.id, Utc::now())
        .await?;

    let data = expand_instructors(&state, classes).await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

pub async fn get_teacher_live_classes(
    State(state): State<Arc<AppState>>,
    InstructorUser(caller): InstructorUser,
) -> Result<impl IntoResponse, AppError> {
    let classes = state.live_class_repo
        .list_upcoming_for_instructor(&caller.id, Utc::now())
        .await?;

    let data = expand_instructors(&state, classes).await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

pub async fn join_live_class(
    State(state): State<Arc<AppState>>,
    AuthUser(caller): AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let class_id = params.get("class_id")
        .ok_or(AppError::Validation("class_id is required in query parameters".into()))?;

    let class = state.live_class_repo.find_by_id(class_id).await?
        .ok_or(AppError::NotFound("Live class not found".into()))?;

    // The meeting link is only handed to the owning instructor or a
    // rostered student.
    if class.instructor_id != caller.id && !class.has_student(&caller.id) {
        return Err(AppError::Forbidden("You are not enrolled in this class".into()));
    }

    let instructor = state.user_repo.find_by_id(&class.instructor_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Live class fetched successfully",
        "data": LiveClassResponse::from_class(class, instructor.as_ref()),
    })))
}

pub async fn update_live_class(
    State(state): State<Arc<AppState>>,
    InstructorUser(caller): InstructorUser,
    Json(payload): Json<UpdateLiveClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    let class_id = payload.class_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Validation("class_id is required in body".into()))?;

    let mut class = state.live_class_repo.find_by_id(class_id).await?
        .ok_or(AppError::NotFound("Live class not found".into()))?;

    if class.instructor_id != caller.id {
        return Err(AppError::Forbidden("You are not authorized to update this class".into()));
    }

    if let Some(val) = payload.title {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Title cannot be empty".into()));
        }
        class.title = trimmed.to_string();
    }
    if let Some(val) = payload.description {
        class.description = if val.is_empty() { None } else { Some(val) };
    }
    if let Some(val) = payload.start_time {
        class.start_time = parse_rfc3339(&val, "start_time")?;
    }
    if let Some(val) = payload.end_time {
        class.end_time = parse_rfc3339(&val, "end_time")?;
    }
    if let Some(val) = payload.meeting_link {
        if val.trim().is_empty() {
            return Err(AppError::Validation("Meeting link cannot be empty".into()));
        }
        class.meeting_link = val;
    }
    if let Some(val) = payload.students {
        if val.is_empty() {
            return Err(AppError::Validation("At least one student must be assigned".into()));
        }
        class.set_students(&val);
    }

    // Whichever side of the window was patched, the effective combination
    // must still be a valid range.
    if class.start_time >= class.end_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }

    let updated = state.live_class_repo.update(&class).await?;
    info!("Updated live class {}", updated.id);

    Ok(Json(json!({
        "success": true,
        "message": "Live class updated successfully",
        "data": LiveClassResponse::from_class(updated, None),
    })))
}

pub async fn delete_live_class(
    State(state): State<Arc<AppState>>,
    InstructorUser(caller): InstructorUser,
    Json(payload): Json<DeleteLiveClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    let class_id = payload.class_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Validation("class_id is required".into()))?;

    let class = state.live_class_repo.find_by_id(class_id).await?
        .ok_or(AppError::NotFound("Live class not found".into()))?;

    if class.instructor_id != caller.id {
        return Err(AppError::Forbidden("You are not authorized to delete this class".into()));
    }

    state.live_class_repo.delete(&class.id).await?;
    info!("Deleted live class {}", class.id);

    Ok(Json(json!({
        "success": true,
        "message": "Live class deleted successfully",
    })))
}
