//! Image upload API handler.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;
use crate::state::AppState;

/// Upload request payload.
#[derive(Deserialize)]
pub struct UploadRequest {
    /// Base64 image data URL from the browser.
    pub image: String,
}

impl std::fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The payload is megabytes of base64; log its size instead
        f.debug_struct("UploadRequest")
            .field("image_len", &self.image.len())
            .finish()
    }
}

/// `POST /api/upload` - validate the image and forward it to the asset
/// host; returns the public URL to store on the product.
#[instrument(skip(state, payload))]
pub async fn upload(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let url = state.assets().upload(&payload.image).await?;

    tracing::info!(%url, "product image uploaded");
    Ok(Json(json!({ "url": url })))
}
