use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Book, Loan, User};

// ============================================================================
// Request bodies
// ============================================================================

/// 書籍の登録・置き換えリクエスト（POST /api/books, PUT /api/books/:id）
///
/// IDは受け付けない。登録時はストアが採番し、置き換え時はパスのIDが使われる。
#[derive(Debug, Clone, Deserialize)]
pub struct BookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub status: String,
}

impl BookRequest {
    pub fn into_book(self) -> Book {
        Book::new(self.isbn, self.title, self.author, self.status)
    }
}

/// 利用者の登録・置き換えリクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl UserRequest {
    pub fn into_user(self) -> User {
        User::new(self.name, self.email, self.status)
    }
}

/// 貸出の登録・置き換えリクエスト
///
/// 書籍と利用者はIDではなく値全体を受け取り、そのままスナップショットとして保存する。
#[derive(Debug, Clone, Deserialize)]
pub struct LoanRequest {
    pub book: Book,
    pub user: User,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl LoanRequest {
    pub fn into_loan(self) -> Loan {
        Loan::new(self.book, self.user, self.loan_date, self.due_date)
    }
}

// ============================================================================
// Query parameters
// ============================================================================

/// 書籍一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// タイトルの部分一致（authorより優先）
    pub title: Option<String>,
    /// 著者名の部分一致
    pub author: Option<String>,
}

/// 利用者一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// 名前の部分一致（statusより優先）
    pub name: Option<String>,
    /// ステータスの完全一致
    pub status: Option<String>,
}

/// 貸出一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListLoansQuery {
    /// 貸出日（YYYY-MM-DD）
    pub loan_date: Option<String>,
    /// 返却期限（YYYY-MM-DD）
    pub due_date: Option<String>,
}

/// 日付クエリパラメータのパースとバリデーション
pub fn parse_date_filter(name: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("{} must be a date in YYYY-MM-DD format: {}", name, value))
}

// ============================================================================
// Responses
// ============================================================================

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
