//! Asset host client for product image uploads.
//!
//! Images arrive from the browser as base64 data URLs, get validated
//! locally (MIME type, decoded size), and are forwarded to the asset host
//! with a signed upload request. Only the resulting public URL is stored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use secrecy::ExposeSecret;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::config::AssetHostConfig;

/// Folder on the asset host that product images land in.
const UPLOAD_FOLDER: &str = "products";

/// Maximum accepted decoded image size (5 MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image MIME types.
const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg", "image/webp"];

/// Errors from image validation and upload.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The payload is not a well-formed base64 image data URL.
    #[error("image must be a base64 data URL")]
    InvalidDataUrl,

    /// The image MIME type is not accepted.
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    /// The decoded image exceeds the size limit.
    #[error("image exceeds the {max_mb} MB limit", max_mb = MAX_IMAGE_BYTES / (1024 * 1024))]
    TooLarge,

    /// The HTTP request to the asset host failed.
    #[error("asset host request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The asset host rejected the upload.
    #[error("asset host error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The asset host response carried no URL.
    #[error("asset host response missing secure_url")]
    MissingUrl,
}

impl AssetError {
    /// Whether the error is the client's fault (bad payload) as opposed to
    /// an upstream or transport failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDataUrl | Self::UnsupportedType(_) | Self::TooLarge
        )
    }
}

/// A validated image payload, still in data-URL form.
#[derive(Debug)]
pub struct ParsedImage<'a> {
    /// MIME type declared in the data URL.
    pub mime_type: &'a str,
    /// Decoded payload size in bytes.
    pub size_bytes: usize,
}

/// Validate an image data URL without uploading it.
///
/// Checks the `data:<mime>;base64,<payload>` shape, that the MIME type is
/// an accepted image format, and that the decoded payload is within the
/// size limit.
///
/// # Errors
///
/// Returns the corresponding [`AssetError`] client variant on failure.
pub fn parse_data_url(data_url: &str) -> Result<ParsedImage<'_>, AssetError> {
    let rest = data_url.strip_prefix("data:").ok_or(AssetError::InvalidDataUrl)?;
    let (mime_type, payload) = rest.split_once(";base64,").ok_or(AssetError::InvalidDataUrl)?;

    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(AssetError::UnsupportedType(mime_type.to_string()));
    }

    let decoded = BASE64
        .decode(payload)
        .map_err(|_| AssetError::InvalidDataUrl)?;
    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(AssetError::TooLarge);
    }

    Ok(ParsedImage {
        mime_type,
        size_bytes: decoded.len(),
    })
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Client for the asset host's signed upload endpoint.
#[derive(Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    config: AssetHostConfig,
}

impl AssetClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: AssetHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Upload a validated image data URL and return its public URL.
    ///
    /// The request is authenticated by signing the upload parameters with
    /// the account's API secret.
    ///
    /// # Errors
    ///
    /// Returns a client [`AssetError`] variant for bad payloads and a
    /// server variant when the asset host is unreachable or rejects the
    /// upload.
    pub async fn upload(&self, data_url: &str) -> Result<String, AssetError> {
        let image = parse_data_url(data_url)?;
        tracing::debug!(
            mime_type = image.mime_type,
            size_bytes = image.size_bytes,
            "uploading product image"
        );

        let timestamp = Utc::now().timestamp();
        // Signed parameters must be in alphabetical order, excluding
        // file/api_key, with the secret appended.
        let params = format!("folder={UPLOAD_FOLDER}&timestamp={timestamp}");
        let signature = sign(&params, self.config.api_secret.expose_secret());

        let form = [
            ("file", data_url.to_string()),
            ("folder", UPLOAD_FOLDER.to_string()),
            ("timestamp", timestamp.to_string()),
            ("api_key", self.config.api_key.clone()),
            ("signature", signature),
        ];

        let response = self
            .http
            .post(&self.config.upload_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body: UploadResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(AssetError::Provider {
                status: status.as_u16(),
                message: error.message,
            });
        }
        if !status.is_success() {
            return Err(AssetError::Provider {
                status: status.as_u16(),
                message: "upload rejected".to_string(),
            });
        }

        body.secure_url.ok_or(AssetError::MissingUrl)
    }
}

/// Sign upload parameters: hex-encoded SHA-1 of the parameter string with
/// the API secret appended.
fn sign(params: &str, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(params.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png_data_url(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(bytes))
    }

    #[test]
    fn test_accepts_valid_png_data_url() {
        let url = png_data_url(&[0x89, 0x50, 0x4e, 0x47]);
        let parsed = parse_data_url(&url).unwrap();
        assert_eq!(parsed.mime_type, "image/png");
        assert_eq!(parsed.size_bytes, 4);
    }

    #[test]
    fn test_accepts_every_allowed_mime_type() {
        for mime in ALLOWED_MIME_TYPES {
            let url = format!("data:{mime};base64,{}", BASE64.encode([1, 2, 3]));
            assert!(parse_data_url(&url).is_ok(), "{mime} should be accepted");
        }
    }

    #[test]
    fn test_rejects_missing_data_prefix() {
        let err = parse_data_url("https://host/img.png").unwrap_err();
        assert!(matches!(err, AssetError::InvalidDataUrl));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_rejects_unsupported_mime_type() {
        let url = format!("data:image/gif;base64,{}", BASE64.encode([1, 2, 3]));
        let err = parse_data_url(&url).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedType(_)));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let err = parse_data_url("data:image/png;base64,@@not-base64@@").unwrap_err();
        assert!(matches!(err, AssetError::InvalidDataUrl));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let url = png_data_url(&vec![0u8; MAX_IMAGE_BYTES + 1]);
        let err = parse_data_url(&url).unwrap_err();
        assert!(matches!(err, AssetError::TooLarge));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let url = png_data_url(&vec![0u8; MAX_IMAGE_BYTES]);
        assert!(parse_data_url(&url).is_ok());
    }

    #[test]
    fn test_signature_is_sha1_of_params_and_secret() {
        // sha1("abc")
        assert_eq!(sign("ab", "c"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_server_variants_are_not_client_errors() {
        let err = AssetError::Provider {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_client_error());
        assert!(!AssetError::MissingUrl.is_client_error());
    }
}
