//! HTTP handlers and route configuration.
//!
//! Public routes mirror the entity permalinks, so `Post::absolute_url` and
//! `Category::absolute_url` resolve against this server. Responses are JSON;
//! rendering the Markdown bodies is left to the client.

mod categories;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health::health_check))
        .route("/", web::get().to(posts::index))
        .route("/categories", web::get().to(categories::list))
        .route("/category/{slug}", web::get().to(categories::posts))
        .route("/{year}/{month}/{slug}", web::get().to(posts::detail));
}
