pub mod auth_token;
pub mod user;

pub use auth_token::*;
pub use user::*;
