pub mod book_repository;
pub mod error;
pub mod loan_repository;
pub mod user_repository;

pub use book_repository::*;
pub use error::{StoreError, StoreResult};
pub use loan_repository::*;
pub use user_repository::*;
