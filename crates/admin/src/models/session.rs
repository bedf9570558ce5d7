//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use stockroom_core::{AdminUserId, Email};

/// Session-stored administrator identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Administrator's database ID.
    pub id: AdminUserId,
    /// Administrator's email address.
    pub email: Email,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in administrator.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
