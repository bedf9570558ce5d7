//! Seed the database with demo data.
//!
//! Creates a demo administrator and a handful of sample products so a fresh
//! install has something to look at. Safe to re-run: an existing demo admin
//! is left alone and duplicate products are simply added again.

use secrecy::SecretString;
use tracing::{info, warn};

use stockroom_admin::db::{self, ProductRepository, RepositoryError};
use stockroom_admin::services::{AdminAuthError, AdminAuthService};
use stockroom_admin::validation::{ProductDraft, validate_new};

/// Demo administrator credentials.
const DEMO_ADMIN_EMAIL: &str = "admin@example.com";
const DEMO_ADMIN_PASSWORD: &str = "stockroom-demo";

/// Seed a demo administrator and sample products.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    // Demo administrator
    match AdminAuthService::new(pool.clone())
        .create_admin(DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD)
        .await
    {
        Ok(user) => {
            info!("Created demo administrator: {}", user.email);
            warn!("Demo password is '{DEMO_ADMIN_PASSWORD}' - change it before exposing this install");
        }
        Err(AdminAuthError::Repository(RepositoryError::Conflict(_))) => {
            info!("Demo administrator already exists, skipping");
        }
        Err(e) => return Err(e.into()),
    }

    // Sample products
    let products = ProductRepository::new(pool);
    for draft in sample_products() {
        let new = validate_new(&draft)
            .map_err(|errors| format!("invalid sample product: {errors:?}"))?;
        let product = products.create(&new).await?;
        info!("Created product: {} ({})", product.name, product.id);
    }

    info!("Seed complete!");
    Ok(())
}

fn sample_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: Some("Ceramic Mug".to_string()),
            description: Some("Stoneware mug with a matte glaze, 350 ml.".to_string()),
            price: Some(12.50),
            stock: Some(120.0),
            image_url: Some("https://placehold.co/600x400/png?text=Mug".to_string()),
        },
        ProductDraft {
            name: Some("Canvas Tote".to_string()),
            description: Some("Heavyweight cotton tote bag with interior pocket.".to_string()),
            price: Some(19.99),
            stock: Some(45.0),
            image_url: Some("https://placehold.co/600x400/png?text=Tote".to_string()),
        },
        ProductDraft {
            name: Some("Enamel Pin".to_string()),
            description: Some("Hard enamel pin with rubber clutch backing.".to_string()),
            price: Some(6.00),
            stock: Some(300.0),
            image_url: Some("https://placehold.co/600x400/png?text=Pin".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_pass_validation() {
        for draft in sample_products() {
            assert!(validate_new(&draft).is_ok());
        }
    }
}
