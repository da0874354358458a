//! In-memory repositories - used when no database is configured and in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogengine_core::domain::{Category, Post, Record};
use blogengine_core::error::RepoError;
use blogengine_core::ports::{BaseRepository, CategoryRepository, PostRepository};

#[derive(Default)]
struct Tables {
    categories: HashMap<Uuid, Category>,
    posts: HashMap<Uuid, Post>,
}

/// Both tables behind a single async RwLock.
///
/// One lock covers the cross-table rules: a post may only reference an
/// existing category, and deleting a category clears it from its posts.
/// Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            tables: Arc::clone(&self.tables),
        }
    }
}

/// Category view over an [`InMemoryStore`].
pub struct InMemoryCategoryRepository {
    tables: Arc<RwLock<Tables>>,
}

/// Post view over an [`InMemoryStore`].
pub struct InMemoryPostRepository {
    tables: Arc<RwLock<Tables>>,
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    posts
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn save(&self, mut category: Category) -> Result<Category, RepoError> {
        category.prepare_for_save()?;

        let mut tables = self.tables.write().await;
        let taken = tables
            .categories
            .values()
            .any(|other| other.id != category.id && other.slug == category.slug);
        if taken {
            return Err(RepoError::Constraint(format!(
                "category slug '{}' already exists",
                category.slug
            )));
        }

        tracing::debug!(category_id = %category.id, slug = %category.slug, "Saving category");
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let mut cleared = 0usize;
        for post in tables.posts.values_mut() {
            if post.category_id == Some(id) {
                post.category_id = None;
                cleared += 1;
            }
        }
        tracing::debug!(category_id = %id, cleared, "Deleted category");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        post.prepare_for_save()?;

        let mut tables = self.tables.write().await;
        let taken = tables
            .posts
            .values()
            .any(|other| other.id != post.id && other.slug == post.slug);
        if taken {
            return Err(RepoError::Constraint(format!(
                "post slug '{}' already exists",
                post.slug
            )));
        }
        if let Some(category_id) = post.category_id {
            if !tables.categories.contains_key(&category_id) {
                return Err(RepoError::Constraint(format!(
                    "category {category_id} does not exist"
                )));
            }
        }

        tracing::debug!(post_id = %post.id, slug = %post.slug, "Saving post");
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        match tables.posts.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.values().find(|post| post.slug == slug).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.posts.values().cloned().collect()))
    }

    async fn filter_by_category(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let tables = self.tables.read().await;
        let posts = tables
            .posts
            .values()
            .filter(|post| post.category_id == Some(category_id))
            .cloned()
            .collect();
        Ok(newest_first(posts))
    }
}
