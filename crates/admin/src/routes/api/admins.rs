//! Administrator account API handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;
use crate::state::AppState;

/// Administrator creation payload.
#[derive(Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateAdminRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAdminRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// `POST /api/admins` - create an administrator account.
///
/// The password is hashed before storage; duplicate emails are a 409.
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let user = state
        .auth()
        .create_admin(&payload.email, &payload.password)
        .await?;

    tracing::info!(
        created_id = %user.id,
        created_by = %admin.id,
        "administrator account created"
    );
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": user.id,
            "email": user.email,
            "createdAt": user.created_at,
        })),
    ))
}
