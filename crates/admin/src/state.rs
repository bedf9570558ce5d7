//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::ProductRepository;
use crate::services::{AdminAuthService, AssetClient};

/// Application state shared across all handlers.
///
/// Cheap to clone; the inner state lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    assets: AssetClient,
}

impl AppState {
    /// Build the shared state from config and an established pool.
    #[must_use]
    pub fn new(config: &AdminConfig, pool: PgPool) -> Self {
        let assets = AssetClient::new(config.assets.clone());
        Self {
            inner: Arc::new(AppStateInner { pool, assets }),
        }
    }

    /// The process-wide database pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// The asset host upload client.
    #[must_use]
    pub fn assets(&self) -> &AssetClient {
        &self.inner.assets
    }

    /// Product repository bound to the shared pool.
    #[must_use]
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.inner.pool.clone())
    }

    /// Authentication service bound to the shared pool.
    #[must_use]
    pub fn auth(&self) -> AdminAuthService {
        AdminAuthService::new(self.inner.pool.clone())
    }
}
