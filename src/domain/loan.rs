use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Book, Entity, LoanId, User};

/// 現在の日付（ローカルタイムゾーン）
///
/// 貸出中・延滞の判定は呼び出しのたびにこの値を評価し直す。キャッシュしない。
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// 貸出
// ============================================================================

/// 貸出
///
/// 書籍と利用者は作成時点の値のスナップショットとして保持する（IDによる参照ではない）。
/// 元の書籍・利用者が後から更新されても、保存済みの貸出には反映されない。
/// そのため `PartialEq` は全フィールドの値で比較する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: Option<LoanId>,
    pub book: Book,
    pub user: User,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Loan {
    /// ID未採番の貸出を作成する
    pub fn new(book: Book, user: User, loan_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            id: None,
            book,
            user,
            loan_date,
            due_date,
        }
    }

    /// 貸出中か（返却期限が基準日より後）
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.due_date > today
    }

    /// 延滞中か（返却期限が基準日より前）
    ///
    /// 返却期限が基準日と同じ日の貸出は、貸出中でも延滞でもない。
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }

    /// 指定した書籍スナップショットの貸出か
    pub fn is_for_book(&self, book: &Book) -> bool {
        self.book == *book
    }

    /// 指定した利用者スナップショットの貸出か
    pub fn is_for_user(&self, user: &User) -> bool {
        self.user == *user
    }

    /// 部分更新を適用する（IDは変更しない）
    pub fn apply_patch(self, patch: LoanPatch) -> Self {
        Self {
            id: self.id,
            book: patch.book.unwrap_or(self.book),
            user: patch.user.unwrap_or(self.user),
            loan_date: patch.loan_date.unwrap_or(self.loan_date),
            due_date: patch.due_date.unwrap_or(self.due_date),
        }
    }
}

impl Entity for Loan {
    type Id = LoanId;

    const KIND: &'static str = "loan";

    fn id(&self) -> Option<LoanId> {
        self.id
    }

    fn set_id(&mut self, id: LoanId) {
        self.id = Some(id);
    }
}

/// 貸出の部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPatch {
    pub book: Option<Book>,
    pub user: Option<User>,
    pub loan_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}
