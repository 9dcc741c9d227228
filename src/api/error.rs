use crate::application::{ApplicationError, EntityKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApplicationError::NotFound { entity, .. } => {
                let error_type = match entity {
                    EntityKind::Book => "BOOK_NOT_FOUND",
                    EntityKind::User => "USER_NOT_FOUND",
                    EntityKind::Loan => "LOAN_NOT_FOUND",
                };
                (StatusCode::NOT_FOUND, error_type, self.0.to_string())
            }

            // 500 Internal Server Error - ストア障害
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApplicationError::Store(ref e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Failed to store entity".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
