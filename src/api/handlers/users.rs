use crate::application::user;
use crate::domain::{User, UserId, UserPatch};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::AppState;
use crate::api::{
    error::ApiError,
    types::{ListUsersQuery, UserRequest},
};

/// GET /api/users - 利用者一覧
///
/// クエリパラメータ:
/// - name: 名前の部分一致
/// - status: ステータスの完全一致（nameが指定されていない場合のみ）
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListUsersQuery>,
) -> Json<Vec<User>> {
    let deps = &state.service_deps;

    let users = match (query.name, query.status) {
        (Some(name), _) => user::search_users_by_name(deps, &name).await,
        (None, Some(status)) => user::search_users_by_status(deps, &status).await,
        (None, None) => user::get_all_users(deps).await,
    };

    Json(users)
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<User>, ApiError> {
    let user = user::get_user_by_id(&state.service_deps, UserId::new(id)).await?;
    Ok(Json(user))
}

pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = user::get_user_by_email(&state.service_deps, &email).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = user::create_user(&state.service_deps, req.into_user()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn replace_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = user::replace_user(&state.service_deps, UserId::new(id), req.into_user()).await?;
    Ok(Json(user))
}

pub async fn patch_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let user = user::merge_update_user(&state.service_deps, UserId::new(id), patch).await?;
    Ok(Json(user))
}

pub async fn delete_user(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> StatusCode {
    user::delete_user(&state.service_deps, UserId::new(id)).await;
    StatusCode::NO_CONTENT
}
