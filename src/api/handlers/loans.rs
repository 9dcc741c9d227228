use crate::application::loan;
use crate::domain::{BookId, Loan, LoanId, LoanPatch, UserId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{AppState, QueryError};
use crate::api::{
    error::ApiError,
    types::{ListLoansQuery, LoanRequest, parse_date_filter},
};

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /api/loans - 貸出一覧
///
/// クエリパラメータ:
/// - loan_date: 貸出日の完全一致（YYYY-MM-DD）
/// - due_date: 返却期限の完全一致（loan_dateが指定されていない場合のみ）
pub async fn list_loans(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListLoansQuery>,
) -> Result<Json<Vec<Loan>>, QueryError> {
    let deps = &state.service_deps;

    let loans = match (&query.loan_date, &query.due_date) {
        (Some(value), _) => {
            let date = parse_date_filter("loan_date", value).map_err(QueryError::BadRequest)?;
            loan::get_loans_by_loan_date(deps, date).await
        }
        (None, Some(value)) => {
            let date = parse_date_filter("due_date", value).map_err(QueryError::BadRequest)?;
            loan::get_loans_by_due_date(deps, date).await
        }
        (None, None) => loan::get_all_loans(deps).await,
    };

    Ok(Json(loans))
}

/// GET /api/loans/active - 返却期限が今日より後の貸出
pub async fn list_active_loans(State(state): State<Arc<AppState>>) -> Json<Vec<Loan>> {
    Json(loan::get_active_loans(&state.service_deps).await)
}

/// GET /api/loans/overdue - 返却期限が今日より前の貸出
pub async fn list_overdue_loans(State(state): State<Arc<AppState>>) -> Json<Vec<Loan>> {
    Json(loan::get_overdue_loans(&state.service_deps).await)
}

/// GET /api/loans/user/:user_id - 利用者の貸出
///
/// 利用者が存在しない場合は404を返す。
pub async fn list_loans_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<Loan>>, ApiError> {
    let loans = loan::get_loans_by_user_id(&state.service_deps, UserId::new(user_id)).await?;
    Ok(Json(loans))
}

/// GET /api/loans/book/:book_id - 書籍の貸出
///
/// 書籍が存在しない場合は404を返す。
pub async fn list_loans_by_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<u64>,
) -> Result<Json<Vec<Loan>>, ApiError> {
    let loans = loan::get_loans_by_book_id(&state.service_deps, BookId::new(book_id)).await?;
    Ok(Json(loans))
}

/// GET /api/loans/:id
pub async fn get_loan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Loan>, ApiError> {
    let loan = loan::get_loan_by_id(&state.service_deps, LoanId::new(id)).await?;
    Ok(Json(loan))
}

// ============================================================================
// Command handlers (POST / PUT / PATCH / DELETE)
// ============================================================================

/// POST /api/loans - 貸出を登録
pub async fn create_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoanRequest>,
) -> Result<(StatusCode, Json<Loan>), ApiError> {
    let loan = loan::create_loan(&state.service_deps, req.into_loan()).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// PUT /api/loans/:id - 貸出を丸ごと置き換え
pub async fn replace_loan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<LoanRequest>,
) -> Result<Json<Loan>, ApiError> {
    let loan = loan::replace_loan(&state.service_deps, LoanId::new(id), req.into_loan()).await?;
    Ok(Json(loan))
}

/// PATCH /api/loans/:id - 指定フィールドのみ更新（返却期限の延長など）
pub async fn patch_loan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<LoanPatch>,
) -> Result<Json<Loan>, ApiError> {
    let loan = loan::merge_update_loan(&state.service_deps, LoanId::new(id), patch).await?;
    Ok(Json(loan))
}

/// DELETE /api/loans/:id
pub async fn delete_loan(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> StatusCode {
    loan::delete_loan(&state.service_deps, LoanId::new(id)).await;
    StatusCode::NO_CONTENT
}
