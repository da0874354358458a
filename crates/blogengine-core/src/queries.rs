//! Read-side lookups composed from the repository ports.

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::{CategoryRepository, PostRepository};

/// Posts filed under the category with `slug`, newest first.
///
/// An unknown slug is not an error: it yields an empty list, so listing
/// pages render "no posts" rather than a failure.
pub async fn posts_in_category(
    categories: &dyn CategoryRepository,
    posts: &dyn PostRepository,
    slug: &str,
) -> Result<Vec<Post>, RepoError> {
    match categories.find_by_slug(slug).await? {
        Some(category) => posts.filter_by_category(category.id).await,
        None => Ok(Vec::new()),
    }
}

/// Resolve a `/<year>/<month>/<slug>/` permalink.
pub async fn post_by_permalink(
    posts: &dyn PostRepository,
    year: i32,
    month: u32,
    slug: &str,
) -> Result<Option<Post>, RepoError> {
    let post = posts.find_by_slug(slug).await?;
    Ok(post.filter(|post| post.matches_permalink(year, month, slug)))
}
