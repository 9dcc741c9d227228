mod book_service;

pub use book_service::{
    create_book, delete_book, get_all_books, get_book_by_id, get_book_by_isbn, merge_update_book,
    replace_book, search_books_by_author, search_books_by_title,
};
