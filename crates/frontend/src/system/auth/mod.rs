pub mod context;
pub mod validation;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated. Please login.")]
    NotAuthenticated,
}
