//! Authentication error types.

use thiserror::Error;

use stockroom_core::EmailError;

use crate::db::RepositoryError;

/// Errors from the administrator authentication service.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Login failed. Deliberately carries no detail: unknown email and
    /// wrong password must be indistinguishable to the caller.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A structurally invalid email was supplied to account creation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The supplied password does not meet the minimum length.
    #[error("password must be at least 8 characters")]
    WeakPassword,

    /// Password hashing or hash parsing failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
