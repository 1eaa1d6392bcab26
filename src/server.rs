//! HTTP surface: `GET /` and `POST /process`

use crate::error::RelayError;
use crate::models::ExtractionRequest;
use crate::service::{ExtractionService, MISSING_TEXT_MESSAGE};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ExtractionService>,
}

impl AppState {
    pub fn new(service: ExtractionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/process", post(process))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "note": r#"POST JSON like {"text": "..."} to /process"#,
    }))
}

async fn process(
    State(state): State<AppState>,
    body: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let Json(request) = body.map_err(body_rejection_error)?;
    let extracted = state.service.process(request.text.as_deref()).await?;
    Ok(Json(extracted))
}

/// Every unusable body is a 400 with a `detail`, never axum's plain-text 415/422.
fn body_rejection_error(rejection: JsonRejection) -> RelayError {
    match rejection {
        // No body, or not declared as JSON: there is no `text` to read
        JsonRejection::MissingJsonContentType(_) => {
            RelayError::validation_error(MISSING_TEXT_MESSAGE)
        }
        other => RelayError::validation_error(format!(
            "Invalid request body: {}",
            other.body_text()
        )),
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
