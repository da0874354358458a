use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    ///
    /// Runs [`Record::prepare_for_save`](crate::domain::Record::prepare_for_save)
    /// first and returns the record as stored.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Category repository.
///
/// Deleting a category clears the category of every post that referenced it.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// Find the category with exactly this slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;

    /// All categories, ordered by name.
    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;
}

/// Post repository. Every listing is newest first.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose category is `category_id`.
    async fn filter_by_category(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError>;
}
