//! Auth domain actions - business logic functions called from HTTP handlers.

mod login;

pub use login::{login, LoginResult};
