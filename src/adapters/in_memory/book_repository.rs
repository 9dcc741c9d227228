use crate::domain::{Book, BookId};
use crate::ports::StoreResult;
use crate::ports::book_repository::BookRepository as BookRepositoryTrait;
use async_trait::async_trait;

use super::table::InMemoryTable;

/// BookRepositoryのインメモリ実装
pub struct BookRepository {
    books: InMemoryTable<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: InMemoryTable::new(),
        }
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self) -> Vec<Book> {
        self.books.all()
    }

    async fn find_by_id(&self, id: BookId) -> Option<Book> {
        self.books.get(id)
    }

    async fn save(&self, book: Book) -> StoreResult<Book> {
        self.books.upsert(book)
    }

    async fn delete_by_id(&self, id: BookId) {
        self.books.remove(id);
    }

    async fn find_by_title(&self, title: &str) -> Vec<Book> {
        self.books.filter(|book| book.title.contains(title))
    }

    async fn find_by_author(&self, author: &str) -> Vec<Book> {
        self.books.filter(|book| book.author.contains(author))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.find_first(|book| book.isbn == isbn)
    }
}
