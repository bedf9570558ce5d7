//! Administrator management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator with a generated password
//! stockroom-cli admin create -e admin@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use rand::distr::{Alphanumeric, SampleString};
use secrecy::SecretString;
use thiserror::Error;

use stockroom_admin::db;
use stockroom_admin::services::AdminAuthService;
use stockroom_core::AdminUserId;

/// Length of generated passwords.
const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Errors that can occur during administrator operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Account creation failed (bad email, weak password, duplicate).
    #[error(transparent)]
    Auth(#[from] stockroom_admin::services::AdminAuthError),
}

/// Create a new administrator account.
///
/// When no password is supplied, a random one is generated and printed
/// once; it is never stored in plaintext.
///
/// # Errors
///
/// Returns `AdminError` when the account cannot be created.
pub async fn create_user(email: &str, password: Option<String>) -> Result<AdminUserId, AdminError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (
            Alphanumeric.sample_string(&mut rand::rng(), GENERATED_PASSWORD_LENGTH),
            true,
        ),
    };

    tracing::info!("Creating administrator: {email}");
    let user = AdminAuthService::new(pool)
        .create_admin(email, &password)
        .await?;

    tracing::info!("Administrator created! ID: {}, Email: {}", user.id, user.email);
    if generated {
        // Printed once on purpose; only the argon2 hash is stored
        #[allow(clippy::print_stdout)]
        {
            println!("Generated password for {email}: {password}");
        }
    }

    Ok(user.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_passwords_are_alphanumeric_and_long_enough() {
        let password = Alphanumeric.sample_string(&mut rand::rng(), GENERATED_PASSWORD_LENGTH);
        assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
        assert!(password.chars().all(char::is_alphanumeric));
    }

    #[test]
    fn test_create_user_yields_a_core_admin_id() {
        // The command reports the new account by its typed database id
        fn returns_admin_id<F, Fut>(_: F)
        where
            F: Fn(&'static str, Option<String>) -> Fut,
            Fut: Future<Output = Result<AdminUserId, AdminError>>,
        {
        }
        returns_admin_id(create_user);
    }
}
