//! Integration tests for the image upload endpoint.
//!
//! Requires a running, migrated, seeded admin server; see the crate docs.
//! The happy path additionally needs real asset host credentials, so only
//! the local validation failures are covered here.

use reqwest::StatusCode;
use serde_json::json;

use stockroom_integration_tests::{admin_base_url, anonymous_client, authenticated_client};

#[tokio::test]
#[ignore = "Requires running admin server and seeded database"]
async fn test_upload_rejects_non_data_url() {
    let client = authenticated_client().await;

    let resp = client
        .post(format!("{}/api/upload", admin_base_url()))
        .json(&json!({ "image": "https://host/img.png" }))
        .send()
        .await
        .expect("upload request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded database"]
async fn test_upload_rejects_unsupported_image_type() {
    let client = authenticated_client().await;

    let resp = client
        .post(format!("{}/api/upload", admin_base_url()))
        .json(&json!({ "image": "data:image/gif;base64,AAAA" }))
        .send()
        .await
        .expect("upload request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded database"]
async fn test_upload_requires_a_session() {
    let client = anonymous_client();

    let resp = client
        .post(format!("{}/api/upload", admin_base_url()))
        .json(&json!({ "image": "data:image/png;base64,AAAA" }))
        .send()
        .await
        .expect("upload request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
