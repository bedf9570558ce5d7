//! HTTP route handlers.
//!
//! # Route structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database ping)
//!
//! # Auth
//! GET  /auth/login              - Login page
//! POST /auth/login              - Sign in (JSON)
//! POST /auth/logout             - Sign out
//!
//! # Pages (session required)
//! GET  /                        - Dashboard (product table, search, stock chart)
//! GET  /products/new            - Create-product form
//! GET  /products/{id}/edit      - Edit-product form
//!
//! # JSON API (session required)
//! GET    /api/products          - List products, newest first
//! POST   /api/products          - Create product
//! GET    /api/products/{id}     - Fetch one product
//! PUT    /api/products/{id}     - Partial update
//! DELETE /api/products/{id}     - Delete product
//! POST   /api/upload            - Upload a product image
//! POST   /api/admins            - Create an administrator account
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod products;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Assemble the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        // Pages
        .route("/", get(dashboard::dashboard))
        .route("/products/new", get(products::new_page))
        .route("/products/{id}/edit", get(products::edit_page))
        // JSON API
        .nest("/api", api::routes())
}
