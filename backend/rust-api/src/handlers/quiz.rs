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
    models::quiz::{FinishQuizRequest, FinishQuizResponse},
    services::{profile_service::ProfileService, AppState},
};

/// GET /api/v1/profiles/{uid}/quiz - Questions for this session
pub async fn get_questions(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let service = ProfileService::new(state.mongo.clone());

    match service.quiz_questions(&uid).await {
        Ok(questions) => Ok((StatusCode::OK, Json(questions))),
        Err(e) => Err((error_status(&e), e.to_string())),
    }
}

/// POST /api/v1/profiles/{uid}/quiz/finish - Record the quiz outcome
pub async fn finish_quiz(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    AppJson(req): AppJson<FinishQuizRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    tracing::info!(
        "Finishing quiz for uid={}: {}/{}",
        uid,
        req.correct,
        req.total
    );

    let service = ProfileService::new(state.mongo.clone());

    match service
        .finish_quiz(&uid, req.correct, req.total, req.date.as_deref())
        .await
    {
        Ok((confidence_streak, score_percent)) => Ok((
            StatusCode::OK,
            Json(FinishQuizResponse {
                confidence_streak,
                score_percent,
            }),
        )),
        Err(e) => {
            tracing::error!("Failed to finish quiz: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}
