//! Product payload validation.
//!
//! The validator is pure and runs on every entry point that can mutate a
//! product (create and update), so the acceptance rules cannot diverge
//! between paths. Violations are collected rather than short-circuited so
//! the form UI can show every failing field at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use stockroom_core::Price;

/// A single field-scoped validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// JSON field name the violation applies to.
    pub field: &'static str,
    /// Human-readable message, suitable for inline form display.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw product fields as submitted by the client.
///
/// Everything is optional at this level; which fields are required depends
/// on the operation (create requires all, update validates what is present).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub image_url: Option<String>,
}

/// A fully validated payload ready for insertion.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock: i32,
    pub image_url: String,
}

/// A validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
}

/// Validate a creation payload.
///
/// All fields are required, including `imageUrl` (the creation workflow
/// uploads the image before submitting the product).
///
/// # Errors
///
/// Returns every violation found, one entry per failing field.
pub fn validate_new(draft: &ProductDraft) -> Result<NewProduct, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = require(draft.name.as_deref(), "name", &mut errors).and_then(|n| {
        collect(check_name(n), &mut errors)
    });
    let description = require(draft.description.as_deref(), "description", &mut errors)
        .and_then(|d| collect(check_description(d), &mut errors));
    let price = require(draft.price, "price", &mut errors)
        .and_then(|p| collect(check_price(p), &mut errors));
    let stock = require(draft.stock, "stock", &mut errors)
        .and_then(|s| collect(check_stock(s), &mut errors));
    let image_url = require(draft.image_url.as_deref(), "imageUrl", &mut errors)
        .and_then(|u| collect(check_image_url(u), &mut errors));

    match (name, description, price, stock, image_url) {
        (Some(name), Some(description), Some(price), Some(stock), Some(image_url))
            if errors.is_empty() =>
        {
            Ok(NewProduct {
                name,
                description,
                price,
                stock,
                image_url,
            })
        }
        _ => Err(errors),
    }
}

/// Validate a partial update payload.
///
/// Only fields present in the draft are validated and replaced; the rules
/// for each field are identical to [`validate_new`].
///
/// # Errors
///
/// Returns every violation found among the provided fields.
pub fn validate_patch(draft: &ProductDraft) -> Result<ProductPatch, Vec<FieldError>> {
    let mut errors = Vec::new();

    let patch = ProductPatch {
        name: draft
            .name
            .as_deref()
            .and_then(|n| collect(check_name(n), &mut errors)),
        description: draft
            .description
            .as_deref()
            .and_then(|d| collect(check_description(d), &mut errors)),
        price: draft.price.and_then(|p| collect(check_price(p), &mut errors)),
        stock: draft.stock.and_then(|s| collect(check_stock(s), &mut errors)),
        image_url: draft
            .image_url
            .as_deref()
            .and_then(|u| collect(check_image_url(u), &mut errors)),
    };

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

// =============================================================================
// Per-field rules (shared between create and update)
// =============================================================================

fn check_name(name: &str) -> Result<String, FieldError> {
    let trimmed = name.trim();
    if trimmed.chars().count() < 3 {
        return Err(FieldError::new(
            "name",
            "name must be at least 3 characters",
        ));
    }
    Ok(trimmed.to_owned())
}

fn check_description(description: &str) -> Result<String, FieldError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("description", "description is required"));
    }
    Ok(trimmed.to_owned())
}

fn check_price(price: f64) -> Result<Price, FieldError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(FieldError::new("price", "price must be greater than zero"));
    }
    let amount = Decimal::try_from(price)
        .map_err(|_| FieldError::new("price", "price is out of range"))?
        .round_dp(2);
    Price::new(amount).map_err(|e| FieldError::new("price", e.to_string()))
}

fn check_stock(stock: f64) -> Result<i32, FieldError> {
    if !stock.is_finite() || stock.fract() != 0.0 {
        return Err(FieldError::new("stock", "stock must be an integer"));
    }
    if stock < 0.0 {
        return Err(FieldError::new("stock", "stock must not be negative"));
    }
    if stock > f64::from(i32::MAX) {
        return Err(FieldError::new("stock", "stock is out of range"));
    }
    // fract() == 0 and range checked above
    #[allow(clippy::cast_possible_truncation)]
    let stock = stock as i32;
    Ok(stock)
}

fn check_image_url(image_url: &str) -> Result<String, FieldError> {
    let parsed = Url::parse(image_url)
        .map_err(|_| FieldError::new("imageUrl", "imageUrl must be a valid URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FieldError::new(
            "imageUrl",
            "imageUrl must be an http(s) URL",
        ));
    }
    Ok(image_url.to_owned())
}

// =============================================================================
// Collection helpers
// =============================================================================

fn require<T>(value: Option<T>, field: &'static str, errors: &mut Vec<FieldError>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
    value
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Mug".to_string()),
            description: Some("Ceramic mug".to_string()),
            price: Some(9.99),
            stock: Some(50.0),
            image_url: Some("https://host/img.png".to_string()),
        }
    }

    fn field_names(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_create_payload() {
        let product = validate_new(&full_draft()).unwrap();
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price.to_string(), "9.99");
        assert_eq!(product.stock, 50);
    }

    #[test]
    fn test_name_too_short_rejected() {
        let draft = ProductDraft {
            name: Some("ab".to_string()),
            ..full_draft()
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["name"]);
    }

    #[test]
    fn test_name_trimmed_before_length_check() {
        let draft = ProductDraft {
            name: Some("  ab   ".to_string()),
            ..full_draft()
        };
        assert!(validate_new(&draft).is_err());

        let draft = ProductDraft {
            name: Some("  abc  ".to_string()),
            ..full_draft()
        };
        assert_eq!(validate_new(&draft).unwrap().name, "abc");
    }

    #[test]
    fn test_empty_description_rejected() {
        let draft = ProductDraft {
            description: Some("   ".to_string()),
            ..full_draft()
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["description"]);
    }

    #[test]
    fn test_zero_and_negative_price_rejected() {
        for bad in [0.0, -5.0] {
            let draft = ProductDraft {
                price: Some(bad),
                ..full_draft()
            };
            let errors = validate_new(&draft).unwrap_err();
            assert_eq!(field_names(&errors), vec!["price"]);
        }
    }

    #[test]
    fn test_negative_stock_rejected() {
        let draft = ProductDraft {
            stock: Some(-1.0),
            ..full_draft()
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["stock"]);
    }

    #[test]
    fn test_fractional_stock_rejected() {
        let draft = ProductDraft {
            stock: Some(2.5),
            ..full_draft()
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["stock"]);
    }

    #[test]
    fn test_malformed_image_url_rejected() {
        let draft = ProductDraft {
            image_url: Some("not a url".to_string()),
            ..full_draft()
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["imageUrl"]);
    }

    #[test]
    fn test_non_http_image_url_rejected() {
        let draft = ProductDraft {
            image_url: Some("ftp://host/img.png".to_string()),
            ..full_draft()
        };
        assert!(validate_new(&draft).is_err());
    }

    #[test]
    fn test_all_violations_collected() {
        let draft = ProductDraft {
            name: Some("ab".to_string()),
            description: Some(String::new()),
            price: Some(-1.0),
            stock: Some(-3.0),
            image_url: Some("nope".to_string()),
        };
        let errors = validate_new(&draft).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            field_names(&errors),
            vec!["name", "description", "price", "stock", "imageUrl"]
        );
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let errors = validate_new(&ProductDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.message.ends_with("is required")));
    }

    #[test]
    fn test_patch_validates_only_provided_fields() {
        let draft = ProductDraft {
            stock: Some(0.0),
            ..ProductDraft::default()
        };
        let patch = validate_patch(&draft).unwrap();
        assert_eq!(patch.stock, Some(0));
        assert!(patch.name.is_none());
        assert!(patch.price.is_none());
    }

    #[test]
    fn test_patch_rejects_invalid_provided_fields() {
        let draft = ProductDraft {
            price: Some(0.0),
            stock: Some(1.5),
            ..ProductDraft::default()
        };
        let errors = validate_patch(&draft).unwrap_err();
        assert_eq!(field_names(&errors), vec!["price", "stock"]);
    }

    #[test]
    fn test_empty_patch_is_allowed() {
        let patch = validate_patch(&ProductDraft::default()).unwrap();
        assert!(patch.name.is_none() && patch.description.is_none());
        assert!(patch.price.is_none() && patch.stock.is_none() && patch.image_url.is_none());
    }

    #[test]
    fn test_create_and_patch_share_rules() {
        // Same invalid price must fail identically through both entry points
        let draft = ProductDraft {
            price: Some(-5.0),
            ..full_draft()
        };
        let create_err = validate_new(&draft).unwrap_err();
        let patch_err = validate_patch(&ProductDraft {
            price: Some(-5.0),
            ..ProductDraft::default()
        })
        .unwrap_err();
        assert_eq!(create_err.first().unwrap(), patch_err.first().unwrap());
    }

    #[test]
    fn test_price_draft_deserializes_camel_case() {
        let draft: ProductDraft = serde_json::from_str(
            r#"{"name":"Mug","description":"Ceramic mug","price":9.99,"stock":50,"imageUrl":"https://host/img.png"}"#,
        )
        .unwrap();
        assert!(validate_new(&draft).is_ok());
    }
}
