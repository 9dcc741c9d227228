use crate::domain::{Book, BookId};
use crate::ports::StoreResult;
use async_trait::async_trait;

/// 書籍ストアポート
///
/// 書籍の保存・取得・削除と、線形走査によるフィルタ検索を抽象化する。
/// 該当なしは空の結果で表す。失敗しうるのは採番を伴う保存のみ。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// すべての書籍を取得する
    ///
    /// 呼び出し側は順序に依存してはならない。
    async fn find_all(&self) -> Vec<Book>;

    async fn find_by_id(&self, id: BookId) -> Option<Book>;

    /// 書籍を保存する
    ///
    /// IDが未設定なら次の連番を採番して追加し、設定済みならそのキーの値を丸ごと置き換える。
    ///
    /// # エラー
    /// - IdsExhausted: 採番できるIDが残っていない
    async fn save(&self, book: Book) -> StoreResult<Book>;

    /// 書籍を削除する（存在しない場合は何もしない）
    async fn delete_by_id(&self, id: BookId);

    /// タイトルに部分文字列を含む書籍を検索する（大文字小文字を区別）
    async fn find_by_title(&self, title: &str) -> Vec<Book>;

    /// 著者名に部分文字列を含む書籍を検索する（大文字小文字を区別）
    async fn find_by_author(&self, author: &str) -> Vec<Book>;

    /// ISBNが完全一致する最初の書籍を取得する
    async fn find_by_isbn(&self, isbn: &str) -> Option<Book>;
}
