//! JSON API route handlers.
//!
//! Everything under `/api` requires an authenticated session and speaks
//! JSON in both directions. Unauthenticated requests get a bare 401.

pub mod admins;
pub mod products;
pub mod upload;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Assemble the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get_one)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/upload", post(upload::upload))
        .route("/admins", post(admins::create))
}
