use crate::ports::StoreError;
use std::fmt;
use thiserror::Error;

/// 検索対象のエンティティ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    User,
    Loan,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Book => "Book",
            EntityKind::User => "User",
            EntityKind::Loan => "Loan",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検索に使ったキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    Id,
    Isbn,
    Email,
}

impl LookupKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKey::Id => "ID",
            LookupKey::Isbn => "ISBN",
            LookupKey::Email => "email",
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// アプリケーション層のエラー
///
/// コア内では回復せず、そのままAPI層へ伝播する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// 該当するエンティティが存在しない
    #[error("{entity} not found with {key}: {value}")]
    NotFound {
        entity: EntityKind,
        key: LookupKey,
        value: String,
    },

    /// ストアでの保存に失敗した
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn not_found(entity: EntityKind, key: LookupKey, value: impl fmt::Display) -> Self {
        ApplicationError::NotFound {
            entity,
            key,
            value: value.to_string(),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ApplicationError>;
