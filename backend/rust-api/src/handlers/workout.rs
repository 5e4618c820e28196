use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    handlers::error_status,
    models::workout::{SaveWorkoutProgressRequest, WorkoutProgressResponse},
    services::{profile_service::ProfileService, AppState},
};

/// GET /api/v1/profiles/{uid}/workout - Plan, generated once if absent
pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let service = ProfileService::new(state.mongo.clone());

    match service.workout_plan(&uid).await {
        Ok(plan) => Ok((StatusCode::OK, Json(plan))),
        Err(e) => {
            tracing::error!("Failed to load workout plan: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}

/// POST /api/v1/profiles/{uid}/workout/progress - Save checkboxes + streak
pub async fn save_progress(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    AppJson(req): AppJson<SaveWorkoutProgressRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    tracing::info!(
        "Saving workout progress for uid={}, day={}",
        uid,
        req.active_day_id
    );

    let service = ProfileService::new(state.mongo.clone());

    match service
        .save_workout_progress(&uid, &req.plan, &req.active_day_id, req.date.as_deref())
        .await
    {
        Ok((completed, workout_streak)) => Ok((
            StatusCode::OK,
            Json(WorkoutProgressResponse {
                completed,
                workout_streak,
            }),
        )),
        Err(e) => {
            tracing::error!("Failed to save workout progress: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}
