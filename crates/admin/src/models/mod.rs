//! Domain models for the admin panel.

pub mod admin_user;
pub mod product;
pub mod session;

pub use admin_user::AdminUser;
pub use product::Product;
pub use session::CurrentAdmin;
pub use session::keys as session_keys;
