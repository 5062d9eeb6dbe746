//! Auth domain - username/password login and bearer tokens
//!
//! Responsibilities:
//! - Argon2 password hashing for API users
//! - One reusable opaque token per user (issued on first login)
//! - Resolving a bearer token back to its user

pub mod actions;
pub mod models;
pub mod password;

pub use actions::{login, LoginResult};
pub use models::{AuthToken, User};
