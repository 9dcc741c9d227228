pub mod book;
pub mod loan;
pub mod user;
pub mod value_objects;

pub use book::*;
pub use loan::{Loan, LoanPatch};
pub use user::*;
pub use value_objects::*;
