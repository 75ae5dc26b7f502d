pub mod fetch_current_user;
pub mod login_user;
