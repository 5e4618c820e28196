use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod engine;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use services::AppState;

/// CSP middleware adds Content-Security-Policy header to all responses
async fn csp_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; \
             connect-src 'self'",
        ),
    );
    response
}

pub fn create_router(app_state: std::sync::Arc<services::AppState>) -> Router {
    // CORS for the browser frontend. Authentication lives at the gateway
    // in front of this API, so only the basic methods/headers are opened.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any); // TODO: restrict to specific origins in production

    Router::new()
        // Public endpoints (no auth required)
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler)
                .layer(middleware::from_fn(handlers::metrics_auth_middleware)),
        )
        // Static survey catalog
        .route(
            "/api/v1/survey/questions",
            get(handlers::survey::list_questions),
        )
        // Profile + engine endpoints
        .route("/api/v1/profiles", post(handlers::profiles::create_profile))
        .nest("/api/v1/profiles/{uid}", profile_routes().layer(cors))
        .with_state(app_state)
        .layer(middleware::from_fn(csp_middleware)) // Apply CSP to all responses
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn profile_routes() -> Router<std::sync::Arc<services::AppState>> {
    Router::new()
        .route("/", get(handlers::profiles::get_profile))
        .route("/survey", post(handlers::survey::submit_survey))
        .route("/workout", get(handlers::workout::get_plan))
        .route(
            "/workout/progress",
            post(handlers::workout::save_progress),
        )
        .route("/quiz", get(handlers::quiz::get_questions))
        .route("/quiz/finish", post(handlers::quiz::finish_quiz))
        .route(
            "/activity/recent",
            get(handlers::profiles::recent_activity),
        )
        .route("/theme", put(handlers::profiles::update_theme))
}
