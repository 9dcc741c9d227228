mod user_service;

pub use user_service::{
    create_user, delete_user, get_all_users, get_user_by_email, get_user_by_id, merge_update_user,
    replace_user, search_users_by_name, search_users_by_status,
};
