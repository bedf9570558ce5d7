//! Dashboard route handler.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::Product;
use crate::search::filter_products;
use crate::state::AppState;

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Search term; filters the product table.
    pub q: Option<String>,
}

/// Product row view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i32,
    pub image_url: Option<String>,
    /// Bar width for the stock chart, 0-100.
    pub stock_pct: u32,
}

impl ProductView {
    #[allow(clippy::cast_possible_truncation)] // ratio is capped at 100
    fn from_product(product: &Product, max_stock: i32) -> Self {
        // Bars are proportional to the largest stock level on the page
        let stock_pct = if max_stock > 0 {
            (u64::from(product.stock.unsigned_abs()) * 100
                / u64::from(max_stock.unsigned_abs())) as u32
        } else {
            0
        };

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            image_url: product.image_url.clone(),
            stock_pct,
        }
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub products: Vec<ProductView>,
    pub search_term: String,
    pub total_count: usize,
}

/// Dashboard page handler: product table, search, and stock chart.
#[instrument(skip(admin, state))]
pub async fn dashboard(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let listing = state.products().list_all().await?;
    let total_count = listing.len();

    let search_term = query.q.unwrap_or_default();
    let filtered = filter_products(listing, &search_term);

    let max_stock = filtered.iter().map(|p| p.stock).max().unwrap_or(0);
    let products = filtered
        .iter()
        .map(|p| ProductView::from_product(p, max_stock))
        .collect();

    let template = DashboardTemplate {
        admin_email: admin.email.to_string(),
        products,
        search_term,
        total_count,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use stockroom_core::{Price, ProductId};

    use super::*;

    fn product(stock: i32) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price: Price::new("9.99".parse().unwrap()).unwrap(),
            stock,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stock_bars_scale_to_largest() {
        let view = ProductView::from_product(&product(25), 50);
        assert_eq!(view.stock_pct, 50);

        let view = ProductView::from_product(&product(50), 50);
        assert_eq!(view.stock_pct, 100);
    }

    #[test]
    fn test_zero_stock_catalog_has_empty_bars() {
        let view = ProductView::from_product(&product(0), 0);
        assert_eq!(view.stock_pct, 0);
    }

    #[test]
    fn test_price_keeps_its_decimal_form() {
        let view = ProductView::from_product(&product(1), 1);
        assert_eq!(view.price, "9.99");
    }
}
