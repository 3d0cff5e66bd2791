//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;
use blog_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::database::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Wrap an already constructed store.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Build the application state, opening the database when configured.
    ///
    /// Falls back to the in-memory store when no database is configured or
    /// the connection fails.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostStore> = match db_config {
            Some(config) => match PostgresPostStore::open(config).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostStore::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostStore> = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!(store = posts.backend(), "Application state initialized");

        Self::with_store(posts)
    }
}
