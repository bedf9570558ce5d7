//! HTTP middleware stack.
//!
//! # Middleware order (bottom to top in the Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! Authentication is enforced per-handler via the extractors in [`auth`],
//! not as a router layer, so public routes (login, health) need no
//! carve-outs.

pub mod auth;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
