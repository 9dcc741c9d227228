use crate::domain::{Book, Loan, LoanId, User, loan};
use crate::ports::StoreResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// 貸出ストアポート
///
/// 基本的なCRUDに加え、返却期限による貸出中・延滞の分類を提供する。
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn find_all(&self) -> Vec<Loan>;

    async fn find_by_id(&self, id: LoanId) -> Option<Loan>;

    /// 貸出を保存する（ID未設定なら採番、設定済みなら置き換え）
    async fn save(&self, loan: Loan) -> StoreResult<Loan>;

    async fn delete_by_id(&self, id: LoanId);

    /// 利用者スナップショットが値として一致する貸出を検索する
    ///
    /// IDだけでなく全フィールドを比較する。貸出作成後に利用者が更新されていれば一致しない。
    async fn find_by_user(&self, user: &User) -> Vec<Loan>;

    /// 書籍スナップショットが値として一致する貸出を検索する
    async fn find_by_book(&self, book: &Book) -> Vec<Loan>;

    /// 貸出日が一致する貸出を検索する
    async fn find_by_loan_date(&self, loan_date: NaiveDate) -> Vec<Loan>;

    /// 返却期限が一致する貸出を検索する
    async fn find_by_due_date(&self, due_date: NaiveDate) -> Vec<Loan>;

    /// 基準日時点で貸出中（返却期限 > 基準日）の貸出を検索する
    async fn find_active_as_of(&self, today: NaiveDate) -> Vec<Loan>;

    /// 基準日時点で延滞中（返却期限 < 基準日）の貸出を検索する
    async fn find_overdue_as_of(&self, today: NaiveDate) -> Vec<Loan>;

    /// 現在日付で貸出中の貸出を検索する
    async fn find_active(&self) -> Vec<Loan> {
        self.find_active_as_of(loan::today()).await
    }

    /// 現在日付で延滞中の貸出を検索する
    async fn find_overdue(&self) -> Vec<Loan> {
        self.find_overdue_as_of(loan::today()).await
    }
}
