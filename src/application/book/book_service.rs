use crate::application::{ApplicationError, EntityKind, LookupKey, Result, ServiceDependencies};
use crate::domain::{Book, BookId, BookPatch};

/// すべての書籍を取得する
pub async fn get_all_books(deps: &ServiceDependencies) -> Vec<Book> {
    deps.book_repository.find_all().await
}

/// IDで書籍を取得する
///
/// # エラー
/// - NotFound: 該当する書籍が存在しない
pub async fn get_book_by_id(deps: &ServiceDependencies, id: BookId) -> Result<Book> {
    deps.book_repository.find_by_id(id).await.ok_or_else(|| {
        tracing::warn!(%id, "book not found");
        ApplicationError::not_found(EntityKind::Book, LookupKey::Id, id)
    })
}

/// ISBNで書籍を取得する
///
/// # エラー
/// - NotFound: ISBNが完全一致する書籍が存在しない
pub async fn get_book_by_isbn(deps: &ServiceDependencies, isbn: &str) -> Result<Book> {
    deps.book_repository.find_by_isbn(isbn).await.ok_or_else(|| {
        tracing::warn!(isbn, "book not found");
        ApplicationError::not_found(EntityKind::Book, LookupKey::Isbn, isbn)
    })
}

/// タイトルの部分一致で書籍を検索する
pub async fn search_books_by_title(deps: &ServiceDependencies, title: &str) -> Vec<Book> {
    deps.book_repository.find_by_title(title).await
}

/// 著者名の部分一致で書籍を検索する
pub async fn search_books_by_author(deps: &ServiceDependencies, author: &str) -> Vec<Book> {
    deps.book_repository.find_by_author(author).await
}

/// 書籍を登録する
///
/// 存在確認や重複検出は行わず、そのままストアに保存する。
/// IDが設定済みの書籍を渡した場合は、そのIDの書籍として上書き保存される。
pub async fn create_book(deps: &ServiceDependencies, book: Book) -> Result<Book> {
    let saved = deps.book_repository.save(book).await?;
    tracing::debug!(id = ?saved.id, "book created");
    Ok(saved)
}

/// 書籍を丸ごと置き換える
///
/// ペイロードのIDは無視され、`id` で上書きされる。
///
/// # エラー
/// - NotFound: `id` の書籍が存在しない（ストアは変更されない）
pub async fn replace_book(deps: &ServiceDependencies, id: BookId, mut book: Book) -> Result<Book> {
    // 1. 存在確認
    get_book_by_id(deps, id).await?;

    // 2. IDを固定して保存
    book.id = Some(id);
    let saved = deps.book_repository.save(book).await?;
    tracing::debug!(%id, "book replaced");
    Ok(saved)
}

/// 書籍を部分更新する
///
/// パッチで指定されたフィールドのみを既存の書籍に上書きする。
///
/// # エラー
/// - NotFound: `id` の書籍が存在しない（ストアは変更されない）
pub async fn merge_update_book(
    deps: &ServiceDependencies,
    id: BookId,
    patch: BookPatch,
) -> Result<Book> {
    // 1. 既存の書籍を取得
    let existing = get_book_by_id(deps, id).await?;

    // 2. パッチを適用して保存
    let saved = deps.book_repository.save(existing.apply_patch(patch)).await?;
    tracing::debug!(%id, "book merged");
    Ok(saved)
}

/// 書籍を削除する
///
/// 存在しないIDでもエラーにはならない。貸出に保存された書籍スナップショットは削除されない。
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) {
    deps.book_repository.delete_by_id(id).await;
    tracing::debug!(%id, "book deleted");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quijote() -> Book {
        Book::new("1234567890", "El Quijote", "Miguel de Cervantes", "available")
    }

    #[tokio::test]
    async fn test_get_book_by_id_not_found() {
        let deps = ServiceDependencies::in_memory();

        let err = get_book_by_id(&deps, BookId::new(999)).await.unwrap_err();

        assert_eq!(err.to_string(), "Book not found with ID: 999");
    }

    #[tokio::test]
    async fn test_get_book_by_isbn() {
        let deps = ServiceDependencies::in_memory();
        let saved = create_book(&deps, quijote()).await.unwrap();

        assert_eq!(get_book_by_isbn(&deps, "1234567890").await, Ok(saved));
        assert_eq!(
            get_book_by_isbn(&deps, "000").await,
            Err(ApplicationError::not_found(EntityKind::Book, LookupKey::Isbn, "000"))
        );
    }

    #[tokio::test]
    async fn test_replace_book_overwrites_every_field() {
        let deps = ServiceDependencies::in_memory();
        let saved = create_book(&deps, quijote()).await.unwrap();
        let id = saved.id.unwrap();

        // ペイロードのIDは無視される
        let payload = Book {
            id: Some(BookId::new(42)),
            ..Book::new("1111111111", "Don Quijote", "Cervantes", "loaned")
        };
        let replaced = replace_book(&deps, id, payload).await.unwrap();

        assert_eq!(replaced.id, Some(id));
        assert_eq!(replaced.title, "Don Quijote");
        assert_eq!(replaced.isbn, "1111111111");
        assert_eq!(get_all_books(&deps).await, vec![replaced]);
    }

    #[tokio::test]
    async fn test_replace_missing_book_leaves_store_untouched() {
        let deps = ServiceDependencies::in_memory();

        let result = replace_book(&deps, BookId::new(999), quijote()).await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        assert!(result.unwrap_err().to_string().contains("999"));
        assert!(get_all_books(&deps).await.is_empty());
    }

    #[tokio::test]
    async fn test_merge_update_book_keeps_unpatched_fields() {
        let deps = ServiceDependencies::in_memory();
        let saved = create_book(&deps, quijote()).await.unwrap();
        let id = saved.id.unwrap();

        let patch = BookPatch {
            status: Some("loaned".to_string()),
            ..Default::default()
        };
        let merged = merge_update_book(&deps, id, patch).await.unwrap();

        assert_eq!(merged.status, "loaned");
        assert_eq!(merged.title, saved.title);
        assert_eq!(merged.author, saved.author);
        assert_eq!(get_book_by_id(&deps, id).await, Ok(merged));
    }

    #[tokio::test]
    async fn test_merge_update_missing_book_fails() {
        let deps = ServiceDependencies::in_memory();

        let result = merge_update_book(&deps, BookId::new(5), BookPatch::default()).await;

        assert_eq!(
            result,
            Err(ApplicationError::not_found(EntityKind::Book, LookupKey::Id, 5))
        );
    }

    #[tokio::test]
    async fn test_delete_book_is_idempotent() {
        let deps = ServiceDependencies::in_memory();
        let saved = create_book(&deps, quijote()).await.unwrap();
        let id = saved.id.unwrap();

        delete_book(&deps, id).await;
        delete_book(&deps, id).await;

        assert!(get_book_by_id(&deps, id).await.is_err());
    }
}
