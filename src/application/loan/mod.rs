mod loan_schedule;
mod loan_service;

pub use loan_schedule::{get_active_loans, get_overdue_loans};
pub use loan_service::{
    create_loan, delete_loan, get_all_loans, get_loan_by_id, get_loans_by_book_id,
    get_loans_by_due_date, get_loans_by_loan_date, get_loans_by_user_id, merge_update_loan,
    replace_loan,
};
