use crate::application::book;
use crate::domain::{Book, BookId, BookPatch};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::AppState;
use crate::api::{
    error::ApiError,
    types::{BookRequest, ListBooksQuery},
};

/// GET /api/books - 書籍一覧
///
/// クエリパラメータ:
/// - title: タイトルの部分一致
/// - author: 著者名の部分一致（titleが指定されていない場合のみ）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Json<Vec<Book>> {
    let deps = &state.service_deps;

    let books = match (query.title, query.author) {
        (Some(title), _) => book::search_books_by_title(deps, &title).await,
        (None, Some(author)) => book::search_books_by_author(deps, &author).await,
        (None, None) => book::get_all_books(deps).await,
    };

    Json(books)
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Book>, ApiError> {
    let book = book::get_book_by_id(&state.service_deps, BookId::new(id)).await?;
    Ok(Json(book))
}

/// GET /api/books/isbn/:isbn
pub async fn get_book_by_isbn(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = book::get_book_by_isbn(&state.service_deps, &isbn).await?;
    Ok(Json(book))
}

/// POST /api/books - 書籍を登録
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = book::create_book(&state.service_deps, req.into_book()).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/books/:id - 書籍を丸ごと置き換え
pub async fn replace_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<BookRequest>,
) -> Result<Json<Book>, ApiError> {
    let book = book::replace_book(&state.service_deps, BookId::new(id), req.into_book()).await?;
    Ok(Json(book))
}

/// PATCH /api/books/:id - 指定フィールドのみ更新
pub async fn patch_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let book = book::merge_update_book(&state.service_deps, BookId::new(id), patch).await?;
    Ok(Json(book))
}

/// DELETE /api/books/:id - 存在しなくても204を返す
pub async fn delete_book(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> StatusCode {
    book::delete_book(&state.service_deps, BookId::new(id)).await;
    StatusCode::NO_CONTENT
}
