pub mod delete;
pub mod log_in;
pub mod picture;
pub mod recover_password;
pub mod reset_password;
pub mod sign_up;
pub mod update;
pub mod update_password;
