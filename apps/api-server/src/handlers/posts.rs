//! Post listing and permalink handlers.

use actix_web::{HttpResponse, web};

use blogengine_core::domain::Post;
use blogengine_core::queries::post_by_permalink;
use blogengine_shared::ApiResponse;
use blogengine_shared::dto::PostResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        pub_date: post.pub_date.to_rfc3339(),
        text: post.text.clone(),
        slug: post.slug.clone(),
        author_id: post.author_id.to_string(),
        site_id: post.site_id.to_string(),
        category_id: post.category_id.map(|id| id.to_string()),
        permalink: post.absolute_url(),
    }
}

/// GET / - every post, newest first.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /{year}/{month}/{slug}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, String)>,
) -> AppResult<HttpResponse> {
    let (year, month, slug) = path.into_inner();
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    let post = post_by_permalink(state.posts.as_ref(), year, month, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post at /{year}/{month}/{slug}/")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}
