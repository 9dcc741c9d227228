use crate::domain::{Book, Loan, LoanId, User};
use crate::ports::StoreResult;
use crate::ports::loan_repository::LoanRepository as LoanRepositoryTrait;
use async_trait::async_trait;
use chrono::NaiveDate;

use super::table::InMemoryTable;

/// LoanRepositoryのインメモリ実装
///
/// 貸出中・延滞の分類は保存時ではなく検索時に基準日と比較して判定する。
pub struct LoanRepository {
    loans: InMemoryTable<Loan>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self {
            loans: InMemoryTable::new(),
        }
    }
}

impl Default for LoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn find_all(&self) -> Vec<Loan> {
        self.loans.all()
    }

    async fn find_by_id(&self, id: LoanId) -> Option<Loan> {
        self.loans.get(id)
    }

    async fn save(&self, loan: Loan) -> StoreResult<Loan> {
        self.loans.upsert(loan)
    }

    async fn delete_by_id(&self, id: LoanId) {
        self.loans.remove(id);
    }

    async fn find_by_user(&self, user: &User) -> Vec<Loan> {
        self.loans.filter(|loan| loan.is_for_user(user))
    }

    async fn find_by_book(&self, book: &Book) -> Vec<Loan> {
        self.loans.filter(|loan| loan.is_for_book(book))
    }

    async fn find_by_loan_date(&self, loan_date: NaiveDate) -> Vec<Loan> {
        self.loans.filter(|loan| loan.loan_date == loan_date)
    }

    async fn find_by_due_date(&self, due_date: NaiveDate) -> Vec<Loan> {
        self.loans.filter(|loan| loan.due_date == due_date)
    }

    async fn find_active_as_of(&self, today: NaiveDate) -> Vec<Loan> {
        self.loans.filter(|loan| loan.is_active(today))
    }

    async fn find_overdue_as_of(&self, today: NaiveDate) -> Vec<Loan> {
        self.loans.filter(|loan| loan.is_overdue(today))
    }
}
