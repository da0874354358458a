//! Category handlers.

use actix_web::{HttpResponse, web};

use blogengine_core::domain::Category;
use blogengine_core::queries::posts_in_category;
use blogengine_shared::ApiResponse;
use blogengine_shared::dto::{CategoryPostsResponse, CategoryResponse};

use super::posts::post_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn category_response(category: &Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id.to_string(),
        name: category.name.clone(),
        description: category.description.clone(),
        slug: category.slug.clone(),
        permalink: category.absolute_url(),
    }
}

/// GET /categories
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.find_all().await?;
    let body: Vec<CategoryResponse> = categories.iter().map(category_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /category/{slug}
///
/// An unknown slug renders an empty listing, never a 404.
pub async fn posts(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = slug.into_inner();
    let posts = posts_in_category(state.categories.as_ref(), state.posts.as_ref(), &slug).await?;
    tracing::debug!(%slug, count = posts.len(), "Category listing");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CategoryPostsResponse {
        posts: posts.iter().map(post_response).collect(),
        slug,
    })))
}
