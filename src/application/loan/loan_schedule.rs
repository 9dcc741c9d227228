use crate::application::ServiceDependencies;
use crate::domain::Loan;

/// 貸出中の貸出を取得する
///
/// 返却期限が今日より後の貸出を返す。今日の日付は呼び出しのたびに評価される。
pub async fn get_active_loans(deps: &ServiceDependencies) -> Vec<Loan> {
    deps.loan_repository.find_active().await
}

/// 延滞中の貸出を取得する
///
/// 返却期限が今日より前の貸出を返す。返却期限が今日の貸出はどちらにも含まれない。
pub async fn get_overdue_loans(deps: &ServiceDependencies) -> Vec<Loan> {
    let overdue = deps.loan_repository.find_overdue().await;
    tracing::debug!(count = overdue.len(), "overdue loans found");
    overdue
}
