use serde::{Deserialize, Serialize};

use super::{BookId, Entity};

/// 書籍
///
/// ISBNは一意であることを想定しているが、ストアでは強制しない。
/// ステータスは自由形式の文字列（例: "available", "loaned"）で、貸出状況とは連動しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<BookId>,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub status: String,
}

impl Book {
    /// ID未採番の書籍を作成する
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            status: status.into(),
        }
    }

    /// 部分更新を適用する
    ///
    /// パッチで指定されたフィールドのみを上書きし、IDは変更しない。
    pub fn apply_patch(self, patch: BookPatch) -> Self {
        Self {
            id: self.id,
            isbn: patch.isbn.unwrap_or(self.isbn),
            title: patch.title.unwrap_or(self.title),
            author: patch.author.unwrap_or(self.author),
            status: patch.status.unwrap_or(self.status),
        }
    }
}

impl Entity for Book {
    type Id = BookId;

    const KIND: &'static str = "book";

    fn id(&self) -> Option<BookId> {
        self.id
    }

    fn set_id(&mut self, id: BookId) {
        self.id = Some(id);
    }
}

/// 書籍の部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
}
