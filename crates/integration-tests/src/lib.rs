//! Integration test helpers for Stockroom.
//!
//! The tests in `tests/` drive a running admin server over HTTP and are
//! `#[ignore]`-gated; they expect:
//!
//! - A migrated `PostgreSQL` database (`stockroom-cli migrate`)
//! - A seeded administrator (`stockroom-cli seed`)
//! - The admin server running (`cargo run -p stockroom-admin`)
//!
//! Run with: `cargo test -p stockroom-integration-tests -- --ignored`

use reqwest::Client;
use serde_json::json;

/// Base URL for the admin server (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Credentials of the seeded demo administrator.
#[must_use]
pub fn demo_credentials() -> (String, String) {
    let email =
        std::env::var("TEST_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password =
        std::env::var("TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "stockroom-demo".to_string());
    (email, password)
}

/// A cookie-holding client with no session.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn anonymous_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in as the seeded demo administrator and return the session-holding
/// client.
///
/// # Panics
///
/// Panics if the login request fails or is rejected.
pub async fn authenticated_client() -> Client {
    let client = anonymous_client();
    let (email, password) = demo_credentials();

    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(
        resp.status().is_success(),
        "login failed with status {}; did you run `stockroom-cli seed`?",
        resp.status()
    );

    client
}
