pub mod book_repository;
pub mod loan_repository;
pub mod table;
pub mod user_repository;

pub use book_repository::BookRepository;
pub use loan_repository::LoanRepository;
pub use table::InMemoryTable;
pub use user_repository::UserRepository;
