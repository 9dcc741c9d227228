pub mod books;
pub mod loans;
pub mod users;

use crate::application::ServiceDependencies;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Error types
// ============================================================================

/// クエリパラメータ不正時のエラー型
#[derive(Debug)]
pub enum QueryError {
    BadRequest(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
