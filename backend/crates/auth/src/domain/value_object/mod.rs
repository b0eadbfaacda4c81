pub mod phone;
pub mod public_id;
pub mod user_id;
pub mod user_password;
