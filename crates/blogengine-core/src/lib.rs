//! # Blogengine Core
//!
//! The domain layer of the blog engine: posts, categories, slugs and the
//! repository ports storage backends implement.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod queries;

pub use error::{DomainError, RepoError};
