use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    handlers::error_status,
    models::profile::{CreateProfileRequest, RecentActivityQuery, UpdateThemeRequest},
    services::{profile_service::ProfileService, AppState},
};

/// POST /api/v1/profiles - Register a profile for an authenticated uid
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateProfileRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    tracing::info!("Creating profile for uid={}", req.uid);

    let service = ProfileService::new(state.mongo.clone());

    match service.create_profile(&req.uid, &req.email).await {
        Ok(profile) => Ok((StatusCode::CREATED, Json(profile))),
        Err(e) => {
            tracing::error!("Failed to create profile: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}

/// GET /api/v1/profiles/{uid} - Full profile snapshot
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let service = ProfileService::new(state.mongo.clone());

    match service.get_profile(&uid).await {
        Ok(profile) => Ok((StatusCode::OK, Json(profile))),
        Err(e) => Err((error_status(&e), e.to_string())),
    }
}

/// GET /api/v1/profiles/{uid}/activity/recent - Dashboard activity strip
pub async fn recent_activity(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Query(query): Query<RecentActivityQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let service = ProfileService::new(state.mongo.clone());
    let days = query.days.unwrap_or(7);

    match service
        .recent_activity(&uid, days, query.date.as_deref())
        .await
    {
        Ok(strip) => Ok((StatusCode::OK, Json(strip))),
        Err(e) => Err((error_status(&e), e.to_string())),
    }
}

/// PUT /api/v1/profiles/{uid}/theme - Settings page theme switch
pub async fn update_theme(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    AppJson(req): AppJson<UpdateThemeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let service = ProfileService::new(state.mongo.clone());

    match service.update_theme(&uid, &req.theme).await {
        Ok(()) => Ok((StatusCode::NO_CONTENT, ())),
        Err(e) => {
            tracing::error!("Failed to update theme: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}
