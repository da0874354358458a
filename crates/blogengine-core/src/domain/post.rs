use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MAX_TITLE_LEN, Record, require_text, validate_slug};
use crate::error::DomainError;

/// Post entity - a single blog article.
///
/// Unlike [`Category`](super::Category), a post never derives its slug; the
/// caller always supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub pub_date: DateTime<Utc>,
    /// Markdown source, rendered by the presentation layer.
    pub text: String,
    pub slug: String,
    pub author_id: Uuid,
    pub site_id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

impl Post {
    /// Create a new uncategorised post.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        slug: impl Into<String>,
        pub_date: DateTime<Utc>,
        author_id: Uuid,
        site_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            pub_date,
            text: text.into(),
            slug: slug.into(),
            author_id,
            site_id,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Permalink of the form `/<year>/<month>/<slug>/`.
    ///
    /// The month is not zero-padded.
    pub fn absolute_url(&self) -> String {
        format!(
            "/{}/{}/{}/",
            self.pub_date.year(),
            self.pub_date.month(),
            self.slug
        )
    }

    /// Whether this post lives at `/<year>/<month>/<slug>/`.
    pub fn matches_permalink(&self, year: i32, month: u32, slug: &str) -> bool {
        self.pub_date.year() == year && self.pub_date.month() == month && self.slug == slug
    }
}

impl Record for Post {
    fn prepare_for_save(&mut self) -> Result<(), DomainError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        validate_slug(&self.slug)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
