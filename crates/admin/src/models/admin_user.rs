//! Administrator domain types.

use chrono::{DateTime, Utc};

use stockroom_core::{AdminUserId, Email};

/// An administrator account (domain type).
///
/// The password hash is an argon2 PHC string; the plaintext password never
/// exists outside the login request handler.
#[derive(Clone)]
pub struct AdminUser {
    /// Unique administrator ID.
    pub id: AdminUserId,
    /// Email address used as the login key (unique).
    pub email: Email,
    /// Salted one-way password hash (PHC string format).
    pub password_hash: String,
    /// When the administrator was created.
    pub created_at: DateTime<Utc>,
    /// When the administrator was last updated.
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for AdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = AdminUser {
            id: AdminUserId::new(1),
            email: Email::parse("admin@example.com").expect("valid email"),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let debug_output = format!("{user:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("argon2id"));
    }
}
