//! Product form page handlers.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;
use tracing::instrument;
use uuid::Uuid;

use stockroom_core::ProductId;

use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::Product;
use crate::state::AppState;

/// Existing product values prefilled into the edit form.
#[derive(Debug, Clone)]
pub struct ProductFormValues {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i32,
    pub image_url: String,
}

impl From<&Product> for ProductFormValues {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Create/edit product form template.
///
/// `product` is `None` for the create form.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub admin_email: String,
    pub product: Option<ProductFormValues>,
}

/// Create-product form page.
#[instrument(skip(admin))]
pub async fn new_page(RequireAdminAuth(admin): RequireAdminAuth) -> Html<String> {
    let template = ProductFormTemplate {
        admin_email: admin.email.to_string(),
        product: None,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Edit-product form page. 404 when the product does not exist.
#[instrument(skip(admin, state))]
pub async fn edit_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let product = state.products().get(ProductId::new(id)).await?;

    let template = ProductFormTemplate {
        admin_email: admin.email.to_string(),
        product: Some(ProductFormValues::from(&product)),
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    })))
}
