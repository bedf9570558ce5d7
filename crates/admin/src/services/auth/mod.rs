//! Administrator authentication service.
//!
//! Email + password authentication with argon2 password hashing. Every
//! login failure surfaces as the same [`AdminAuthError::InvalidCredentials`]
//! so responses never reveal whether an email is registered.

mod error;

pub use error::AdminAuthError;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::password_hash::rand_core::OsRng;
use argon2::Argon2;
use sqlx::PgPool;

use stockroom_core::Email;

use crate::db::AdminUserRepository;
use crate::models::AdminUser;

/// Minimum accepted password length for new administrator accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Administrator authentication service.
pub struct AdminAuthService {
    users: AdminUserRepository,
}

impl AdminAuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self {
            users: AdminUserRepository::new(pool),
        }
    }

    /// Authenticate an administrator by email and password.
    ///
    /// Empty fields short-circuit without touching the store. An unknown
    /// email still pays for one hash verification so the two failure modes
    /// cost roughly the same.
    ///
    /// # Errors
    ///
    /// Returns [`AdminAuthError::InvalidCredentials`] for any failed login;
    /// [`AdminAuthError::Repository`] only for infrastructure failures.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminUser, AdminAuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AdminAuthError::InvalidCredentials);
        }

        // A structurally invalid email can't be registered, so it folds
        // into the same generic failure.
        let Ok(email) = Email::parse(email) else {
            return Err(AdminAuthError::InvalidCredentials);
        };

        match self.users.get_by_email(&email).await? {
            Some(user) => {
                if verify_password(password, &user.password_hash)? {
                    Ok(user)
                } else {
                    Err(AdminAuthError::InvalidCredentials)
                }
            }
            None => {
                // Burn a hash so unknown emails take as long as bad passwords
                let _ = hash_password(password);
                Err(AdminAuthError::InvalidCredentials)
            }
        }
    }

    /// Create a new administrator account.
    ///
    /// The password is hashed with argon2 before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`AdminAuthError::InvalidEmail`] or
    /// [`AdminAuthError::WeakPassword`] for bad input, and
    /// [`AdminAuthError::Repository`] with a conflict for duplicate emails.
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminUser, AdminAuthError> {
        let email = Email::parse(email)?;
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AdminAuthError::WeakPassword);
        }

        let password_hash = hash_password(password)?;
        Ok(self.users.create(&email, &password_hash).await?)
    }
}

/// Hash a password with argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns [`AdminAuthError::Hashing`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AdminAuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AdminAuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// # Errors
///
/// Returns [`AdminAuthError::Hashing`] if the stored hash cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AdminAuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AdminAuthError::Hashing(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hash = hash_password("hunter22").unwrap();
        assert_ne!(hash, "hunter22");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_is_an_error_not_a_match() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AdminAuthError::Hashing(_))));
    }
}
