use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, books, loans, users};

/// Creates the API router with book, user and loan endpoints
///
/// Books (`/api/books`):
/// - GET / (filters: title, author), POST /
/// - GET|PUT|PATCH|DELETE /:id
/// - GET /isbn/:isbn
///
/// Users (`/api/users`):
/// - GET / (filters: name, status), POST /
/// - GET|PUT|PATCH|DELETE /:id
/// - GET /email/:email
///
/// Loans (`/api/loans`):
/// - GET / (filters: loan_date, due_date), POST /
/// - GET /active, GET /overdue
/// - GET /user/:user_id, GET /book/:book_id
/// - GET|PUT|PATCH|DELETE /:id
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Books
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route(
            "/api/books/:id",
            get(books::get_book)
                .put(books::replace_book)
                .patch(books::patch_book)
                .delete(books::delete_book),
        )
        .route("/api/books/isbn/:isbn", get(books::get_book_by_isbn))
        // Users
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::replace_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .route("/api/users/email/:email", get(users::get_user_by_email))
        // Loans
        .route("/api/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/api/loans/active", get(loans::list_active_loans))
        .route("/api/loans/overdue", get(loans::list_overdue_loans))
        .route("/api/loans/user/:user_id", get(loans::list_loans_by_user))
        .route("/api/loans/book/:book_id", get(loans::list_loans_by_book))
        .route(
            "/api/loans/:id",
            get(loans::get_loan)
                .put(loans::replace_loan)
                .patch(loans::patch_loan)
                .delete(loans::delete_loan),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
