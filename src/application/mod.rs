pub mod book;
mod dependencies;
mod errors;
pub mod loan;
pub mod user;

pub use dependencies::ServiceDependencies;
pub use errors::{ApplicationError, EntityKind, LookupKey, Result};
