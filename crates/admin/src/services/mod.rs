//! Business logic services.

pub mod assets;
pub mod auth;

pub use assets::{AssetClient, AssetError};
pub use auth::{AdminAuthError, AdminAuthService};
