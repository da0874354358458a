use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use super::config::DatabaseConfig;
use super::postgres_repo::{PostgresCategoryRepository, PostgresPostRepository};

/// Connection pool for the blog database.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }

    pub fn category_repository(&self) -> PostgresCategoryRepository {
        PostgresCategoryRepository::new(self.main.clone())
    }

    pub fn post_repository(&self) -> PostgresPostRepository {
        PostgresPostRepository::new(self.main.clone())
    }
}
