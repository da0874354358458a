//! Data Transfer Objects - response types for the blog API.

use serde::{Deserialize, Serialize};

/// A post as exposed to listing and detail views.
///
/// `text` is the raw Markdown; rendering is left to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub pub_date: String,
    pub text: String,
    pub slug: String,
    pub author_id: String,
    pub site_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub permalink: String,
}

/// A category with its listing URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub permalink: String,
}

/// Result of a category listing. `posts` is empty for an unknown slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPostsResponse {
    pub slug: String,
    pub posts: Vec<PostResponse>,
}
