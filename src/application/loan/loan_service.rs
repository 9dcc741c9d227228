use crate::application::{
    ApplicationError, EntityKind, LookupKey, Result, ServiceDependencies, book, user,
};
use crate::domain::{BookId, Loan, LoanId, LoanPatch, UserId};
use chrono::NaiveDate;

pub async fn get_all_loans(deps: &ServiceDependencies) -> Vec<Loan> {
    deps.loan_repository.find_all().await
}

/// IDで貸出を取得する
///
/// # エラー
/// - NotFound: 該当する貸出が存在しない
pub async fn get_loan_by_id(deps: &ServiceDependencies, id: LoanId) -> Result<Loan> {
    deps.loan_repository.find_by_id(id).await.ok_or_else(|| {
        tracing::warn!(%id, "loan not found");
        ApplicationError::not_found(EntityKind::Loan, LookupKey::Id, id)
    })
}

/// 利用者の貸出を取得する
///
/// 現在の利用者を取得し、そのスナップショットと値が一致する貸出だけを返す。
/// 貸出作成後に利用者が更新されている場合、その貸出は含まれない。
///
/// # エラー
/// - NotFound: 利用者が存在しない
pub async fn get_loans_by_user_id(deps: &ServiceDependencies, user_id: UserId) -> Result<Vec<Loan>> {
    let user = user::get_user_by_id(deps, user_id).await?;
    Ok(deps.loan_repository.find_by_user(&user).await)
}

/// 書籍の貸出を取得する
///
/// 書籍スナップショットの値で比較する（`get_loans_by_user_id` と同じ規則）。
///
/// # エラー
/// - NotFound: 書籍が存在しない
pub async fn get_loans_by_book_id(deps: &ServiceDependencies, book_id: BookId) -> Result<Vec<Loan>> {
    let book = book::get_book_by_id(deps, book_id).await?;
    Ok(deps.loan_repository.find_by_book(&book).await)
}

pub async fn get_loans_by_loan_date(deps: &ServiceDependencies, loan_date: NaiveDate) -> Vec<Loan> {
    deps.loan_repository.find_by_loan_date(loan_date).await
}

pub async fn get_loans_by_due_date(deps: &ServiceDependencies, due_date: NaiveDate) -> Vec<Loan> {
    deps.loan_repository.find_by_due_date(due_date).await
}

/// 貸出を登録する
///
/// 書籍・利用者は渡された値がそのままスナップショットとして保存される。
/// 書籍・利用者の存在確認は行わない。
pub async fn create_loan(deps: &ServiceDependencies, loan: Loan) -> Result<Loan> {
    let saved = deps.loan_repository.save(loan).await?;
    tracing::debug!(id = ?saved.id, book = ?saved.book.id, user = ?saved.user.id, "loan created");
    Ok(saved)
}

/// 貸出を丸ごと置き換える
///
/// # エラー
/// - NotFound: `id` の貸出が存在しない
pub async fn replace_loan(deps: &ServiceDependencies, id: LoanId, mut loan: Loan) -> Result<Loan> {
    get_loan_by_id(deps, id).await?;

    loan.id = Some(id);
    let saved = deps.loan_repository.save(loan).await?;
    tracing::debug!(%id, "loan replaced");
    Ok(saved)
}

/// 貸出を部分更新する
///
/// # エラー
/// - NotFound: `id` の貸出が存在しない
pub async fn merge_update_loan(
    deps: &ServiceDependencies,
    id: LoanId,
    patch: LoanPatch,
) -> Result<Loan> {
    let existing = get_loan_by_id(deps, id).await?;

    let saved = deps.loan_repository.save(existing.apply_patch(patch)).await?;
    tracing::debug!(%id, "loan merged");
    Ok(saved)
}

/// 貸出を削除する（存在しなくてもエラーにしない）
pub async fn delete_loan(deps: &ServiceDependencies, id: LoanId) {
    deps.loan_repository.delete_by_id(id).await;
    tracing::debug!(%id, "loan deleted");
}
