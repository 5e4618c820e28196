use axum::Router;
use confidenceboost_api::{config::Config, create_router, services::AppState};
use std::sync::Arc;

/// Builds the app router without touching the database. The Mongo client
/// connects lazily, so endpoints that never reach the database (survey
/// catalog, metrics, routing behavior) are testable without one.
pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let config = Config::load().expect("Failed to load test configuration");

    let mongo_client = mongodb::Client::with_uri_str(&config.mongo_uri)
        .await
        .expect("Failed to create test MongoDB client");

    let app_state = Arc::new(
        AppState::new(config, mongo_client)
            .await
            .expect("Failed to initialize test app state"),
    );

    create_router(app_state)
}
