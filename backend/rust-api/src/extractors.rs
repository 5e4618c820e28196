use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// JSON body extractor whose rejection is itself JSON. The stock `Json`
/// extractor answers malformed bodies with plain text, which the browser
/// frontend cannot render in its toast component.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::warn!("rejected request body: {}", rejection);
                let body = json!({
                    "message": format!("Failed to parse JSON request body: {}", rejection),
                    "status": 400,
                });
                Err((StatusCode::BAD_REQUEST, Json(body)).into_response())
            }
        }
    }
}
