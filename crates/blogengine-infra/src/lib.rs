//! # Blogengine Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blogengine-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

pub use database::{InMemoryCategoryRepository, InMemoryPostRepository, InMemoryStore};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};
