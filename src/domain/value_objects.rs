use serde::{Deserialize, Serialize};
use std::fmt;

/// ストアが採番する連番ID
///
/// 各エンティティ種別ごとに1から始まり、削除後も再利用されない。
pub trait SequentialId: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// 連番からIDを生成する
    fn from_sequence(value: u64) -> Self;

    /// 連番の値
    fn sequence(&self) -> u64;
}

/// 書籍ID - 書籍ストアが採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(u64);

impl BookId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl SequentialId for BookId {
    fn from_sequence(value: u64) -> Self {
        Self(value)
    }

    fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 利用者ID - 利用者ストアが採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl SequentialId for UserId {
    fn from_sequence(value: u64) -> Self {
        Self(value)
    }

    fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 貸出ID - 貸出ストアが採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoanId(u64);

impl LoanId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl SequentialId for LoanId {
    fn from_sequence(value: u64) -> Self {
        Self(value)
    }

    fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ストアに保存されるエンティティ
///
/// IDが未設定（`None`）のまま保存されたエンティティにはストアが新しいIDを付与する。
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: SequentialId;

    /// ログやエラーメッセージで使う種別名
    const KIND: &'static str;

    fn id(&self) -> Option<Self::Id>;

    fn set_id(&mut self, id: Self::Id);
}
