use crate::application::{ApplicationError, EntityKind, LookupKey, Result, ServiceDependencies};
use crate::domain::{User, UserId, UserPatch};

pub async fn get_all_users(deps: &ServiceDependencies) -> Vec<User> {
    deps.user_repository.find_all().await
}

/// IDで利用者を取得する
///
/// # エラー
/// - NotFound: 該当する利用者が存在しない
pub async fn get_user_by_id(deps: &ServiceDependencies, id: UserId) -> Result<User> {
    deps.user_repository.find_by_id(id).await.ok_or_else(|| {
        tracing::warn!(%id, "user not found");
        ApplicationError::not_found(EntityKind::User, LookupKey::Id, id)
    })
}

/// メールアドレスで利用者を取得する
///
/// # エラー
/// - NotFound: メールアドレスが完全一致する利用者が存在しない
pub async fn get_user_by_email(deps: &ServiceDependencies, email: &str) -> Result<User> {
    deps.user_repository.find_by_email(email).await.ok_or_else(|| {
        tracing::warn!(email, "user not found");
        ApplicationError::not_found(EntityKind::User, LookupKey::Email, email)
    })
}

pub async fn search_users_by_name(deps: &ServiceDependencies, name: &str) -> Vec<User> {
    deps.user_repository.find_by_name(name).await
}

pub async fn search_users_by_status(deps: &ServiceDependencies, status: &str) -> Vec<User> {
    deps.user_repository.find_by_status(status).await
}

/// 利用者を登録する（重複チェックなし）
pub async fn create_user(deps: &ServiceDependencies, user: User) -> Result<User> {
    let saved = deps.user_repository.save(user).await?;
    tracing::debug!(id = ?saved.id, "user created");
    Ok(saved)
}

/// 利用者を丸ごと置き換える
///
/// # エラー
/// - NotFound: `id` の利用者が存在しない
pub async fn replace_user(deps: &ServiceDependencies, id: UserId, mut user: User) -> Result<User> {
    get_user_by_id(deps, id).await?;

    user.id = Some(id);
    let saved = deps.user_repository.save(user).await?;
    tracing::debug!(%id, "user replaced");
    Ok(saved)
}

/// 利用者を部分更新する
///
/// # エラー
/// - NotFound: `id` の利用者が存在しない
pub async fn merge_update_user(
    deps: &ServiceDependencies,
    id: UserId,
    patch: UserPatch,
) -> Result<User> {
    let existing = get_user_by_id(deps, id).await?;

    let saved = deps.user_repository.save(existing.apply_patch(patch)).await?;
    tracing::debug!(%id, "user merged");
    Ok(saved)
}

/// 利用者を削除する（存在しなくてもエラーにしない）
pub async fn delete_user(deps: &ServiceDependencies, id: UserId) {
    deps.user_repository.delete_by_id(id).await;
    tracing::debug!(%id, "user deleted");
}
