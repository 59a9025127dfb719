pub mod email;
pub mod profile_status;
pub mod user_password;
