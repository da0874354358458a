//! Domain entities - the core business objects.

mod category;
mod post;
mod slug;

use crate::error::DomainError;

pub use category::Category;
pub use post::Post;
pub use self::slug::{MAX_SLUG_LEN, slugify, validate_slug};

/// Maximum length of a category name or post title.
pub const MAX_TITLE_LEN: usize = 200;

/// A record owned by the storage layer.
///
/// Repositories call [`Record::prepare_for_save`] before every write, so
/// nothing reaches storage without passing it.
pub trait Record {
    /// Fill derived fields and validate the record.
    fn prepare_for_save(&mut self) -> Result<(), DomainError>;
}

fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    require_present(field, value)?;
    if value.chars().count() > max {
        return Err(DomainError::TooLong { field, max });
    }
    Ok(())
}
