//! Application state - shared across all handlers.

use std::sync::Arc;

use blogengine_core::ports::{CategoryRepository, PostRepository};
use blogengine_infra::InMemoryStore;
use blogengine_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blogengine_infra::DatabaseConnections;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub posts: Arc<dyn PostRepository>,
    /// Name of the storage backend, reported by the health check.
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            categories: Arc::new(connections.category_repository()),
                            posts: Arc::new(connections.post_repository()),
                            backend: "postgres",
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
        }

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(&InMemoryStore::new())
    }

    /// State backed by an in-memory store.
    pub fn in_memory(store: &InMemoryStore) -> Self {
        Self {
            categories: Arc::new(store.categories()),
            posts: Arc::new(store.posts()),
            backend: "memory",
        }
    }
}
