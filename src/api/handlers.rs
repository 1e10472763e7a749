//! HTTP request handlers

use super::types::{ErrorResponse, InboundMessage, RepliesResponse, SessionView};
use super::AppState;
use crate::state_machine::UserId;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/messages", post(receive_message))
        .route("/api/sessions/:user_id", get(get_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Route one inbound message to the user's session and return its replies
async fn receive_message(
    State(state): State<AppState>,
    Json(msg): Json<InboundMessage>,
) -> Result<Json<RepliesResponse>, AppError> {
    let user_id = msg.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest("user_id is required".to_string()));
    }

    let request_id = Uuid::new_v4().to_string();
    tracing::debug!(request_id = %request_id, user_id = %user_id, "Inbound message");

    let replies = state
        .sessions
        .route(UserId::new(user_id), msg.text, msg.user_name)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(RepliesResponse { request_id, replies }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .session(&UserId::new(user_id.as_str()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("No session for {user_id}")))?;
    Ok(Json(session.into()))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticCatalog;
    use crate::runtime::testing::{MockRepository, RecordingMessenger};
    use crate::runtime::{BotServices, SessionManager};
    use crate::session_store::MemorySessionStore;
    use crate::state_machine::BotContext;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let services = BotServices {
            context: BotContext::new("tenant-1", "WhatsApp", Arc::new(StaticCatalog)),
            repository: Arc::new(MockRepository::new()),
            messenger: Arc::new(RecordingMessenger::new()),
            store: Arc::new(MemorySessionStore::new()),
        };
        let sessions = Arc::new(SessionManager::new(services, Duration::from_secs(3600)));
        create_router(AppState::new(sessions))
    }

    fn post_message(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn message_returns_replies_and_creates_session() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_message(&serde_json::json!({ "user_id": "u1", "text": "1" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(!body["replies"].as_array().unwrap().is_empty());

        let response = app
            .oneshot(Request::builder().uri("/api/sessions/u1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["language"], "english");
        assert_eq!(body["form_in_progress"], false);
    }

    #[tokio::test]
    async fn blank_user_id_is_rejected() {
        let response = app()
            .oneshot(post_message(&serde_json::json!({ "user_id": "  ", "text": "1" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/sessions/nobody").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
