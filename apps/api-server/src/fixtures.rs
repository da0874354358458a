//! JSON fixtures loaded into the repositories at startup.
//!
//! ```json
//! {
//!   "categories": [{ "id": "…", "name": "Python", "description": "…" }],
//!   "posts": [{ "id": "…", "title": "…", "pub_date": "2013-12-28T10:00:00Z", … }]
//! }
//! ```
//!
//! Categories are saved before posts so post references resolve. Records go
//! through the normal repository `save`, which derives blank category slugs.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use blogengine_core::domain::{Category, Post};
use blogengine_core::error::RepoError;
use blogengine_core::ports::BaseRepository;

use crate::state::AppState;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures from {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid fixture file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to store fixture {record:?}: {source}")]
    Store { record: String, source: RepoError },
}

#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Fixtures {
    pub async fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Save every fixture record. Returns `(categories, posts)` counts.
    pub async fn apply(self, state: &AppState) -> Result<(usize, usize), FixtureError> {
        let (mut categories, mut posts) = (0, 0);

        for category in self.categories {
            let record = category.name.clone();
            state
                .categories
                .save(category)
                .await
                .map_err(|source| FixtureError::Store { record, source })?;
            categories += 1;
        }

        for post in self.posts {
            let record = post.slug.clone();
            state
                .posts
                .save(post)
                .await
                .map_err(|source| FixtureError::Store { record, source })?;
            posts += 1;
        }

        tracing::info!(categories, posts, "Fixtures loaded");
        Ok((categories, posts))
    }
}
