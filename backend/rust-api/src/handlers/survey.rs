use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    engine::survey::SURVEY_QUESTIONS,
    extractors::AppJson,
    handlers::error_status,
    models::survey::{SubmitSurveyRequest, SubmitSurveyResponse},
    services::{profile_service::ProfileService, AppState},
};

/// GET /api/v1/survey/questions - Static self-assessment catalog
pub async fn list_questions() -> impl IntoResponse {
    (StatusCode::OK, Json(&*SURVEY_QUESTIONS))
}

/// POST /api/v1/profiles/{uid}/survey - Submit survey answers
pub async fn submit_survey(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    AppJson(req): AppJson<SubmitSurveyRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!("Survey submission for uid={}", uid);

    let service = ProfileService::new(state.mongo.clone());

    match service.submit_survey(&uid, &req.answers).await {
        Ok(focus_areas) => {
            let focus_area_names = focus_areas.iter().map(|c| c.display_name()).collect();
            Ok((
                StatusCode::OK,
                Json(SubmitSurveyResponse {
                    focus_areas,
                    focus_area_names,
                    has_completed_survey: true,
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Failed to submit survey: {}", e);
            Err((error_status(&e), e.to_string()))
        }
    }
}
