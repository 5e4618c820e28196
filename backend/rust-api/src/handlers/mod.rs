use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use std::sync::Arc;

use crate::engine::EngineError;
use crate::metrics;
use crate::services::profile_service::DuplicateProfile;
use crate::services::AppState;

pub mod profiles;
pub mod quiz;
pub mod survey;
pub mod workout;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut status = "healthy";
    let mut dependencies = serde_json::Map::new();
    let mut all_healthy = true;

    // Check MongoDB
    let mongo_health = check_mongodb(&state).await;
    dependencies.insert("mongodb".to_string(), json!(mongo_health));
    if mongo_health.get("status").and_then(|v| v.as_str()) != Some("healthy") {
        all_healthy = false;
        status = "degraded";
    }

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "service": "confidenceboost-api",
            "version": env!("CARGO_PKG_VERSION"),
            "dependencies": dependencies
        })),
    )
}

async fn check_mongodb(state: &AppState) -> serde_json::Map<String, serde_json::Value> {
    let mut result = serde_json::Map::new();

    match tokio::time::timeout(
        std::time::Duration::from_secs(1),
        state.mongo.run_command(mongodb::bson::doc! { "ping": 1 }),
    )
    .await
    {
        Ok(Ok(_)) => {
            result.insert("status".to_string(), json!("healthy"));
            result.insert(
                "message".to_string(),
                json!("MongoDB connection successful"),
            );
        }
        Ok(Err(e)) => {
            result.insert("status".to_string(), json!("unhealthy"));
            result.insert("error".to_string(), json!(format!("MongoDB error: {}", e)));
        }
        Err(_) => {
            result.insert("status".to_string(), json!("unhealthy"));
            result.insert("error".to_string(), json!("MongoDB timeout after 1s"));
        }
    }

    result
}

pub async fn metrics_handler() -> impl IntoResponse {
    match metrics::render_metrics() {
        Ok(metrics_text) => (StatusCode::OK, metrics_text),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render metrics: {}", e),
        ),
    }
}

/// Metrics authentication middleware - protects /metrics endpoint with HTTP Basic Auth
pub async fn metrics_auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Get Authorization header
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's Basic auth
    if !auth_header.starts_with("Basic ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    // Decode base64 credentials
    let encoded = &auth_header[6..];
    let decoded = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let credentials = String::from_utf8(decoded).map_err(|_| StatusCode::UNAUTHORIZED)?;

    // Get expected credentials from environment variable
    // Format: username:password
    let expected = std::env::var("METRICS_AUTH").unwrap_or_else(|_| "admin:changeme".to_string());

    // Compare credentials
    if credentials != expected {
        return Err(StatusCode::UNAUTHORIZED);
    }

    // Credentials are valid, proceed with request
    Ok(next.run(request).await)
}

/// Maps a service error to an HTTP status, pulling the typed errors out
/// of the anyhow chain.
pub(crate) fn error_status(e: &anyhow::Error) -> StatusCode {
    if e.downcast_ref::<DuplicateProfile>().is_some() {
        return StatusCode::CONFLICT;
    }
    match e.downcast_ref::<EngineError>() {
        Some(EngineError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
        Some(EngineError::MissingProfile) => StatusCode::NOT_FOUND,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_client_statuses() {
        let invalid: anyhow::Error = EngineError::InvalidInput("bad".to_string()).into();
        assert_eq!(error_status(&invalid), StatusCode::BAD_REQUEST);

        let missing: anyhow::Error = EngineError::MissingProfile.into();
        assert_eq!(error_status(&missing), StatusCode::NOT_FOUND);

        let duplicate: anyhow::Error = DuplicateProfile("u1".to_string()).into();
        assert_eq!(error_status(&duplicate), StatusCode::CONFLICT);

        let other = anyhow::anyhow!("mongo went away");
        assert_eq!(error_status(&other), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn engine_errors_survive_a_context_chain() {
        let wrapped = anyhow::Error::from(EngineError::MissingProfile).context("loading profile");
        assert_eq!(error_status(&wrapped), StatusCode::NOT_FOUND);

        let duplicate =
            anyhow::Error::from(DuplicateProfile("u1".to_string())).context("creating profile");
        assert_eq!(error_status(&duplicate), StatusCode::CONFLICT);
    }
}
