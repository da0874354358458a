use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MAX_TITLE_LEN, Record, require_present, require_text, slugify, validate_slug};
use crate::error::DomainError;

/// Category entity - a named grouping of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Blank until the first save, which derives it from `name`.
    #[serde(default)]
    pub slug: String,
}

impl Category {
    /// Create a new category with a blank slug.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            slug: String::new(),
        }
    }

    /// Use an explicit slug instead of deriving one from the name.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Derive the slug from the name if it is blank. A set slug is never
    /// touched, so renaming a category keeps its URL.
    ///
    /// The derived slug is not shortened; one over [`MAX_SLUG_LEN`] fails
    /// validation on save.
    ///
    /// [`MAX_SLUG_LEN`]: super::MAX_SLUG_LEN
    pub fn ensure_slug(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.name);
        }
    }

    /// Path of the category's post listing.
    pub fn absolute_url(&self) -> String {
        format!("/category/{}", self.slug)
    }
}

impl Record for Category {
    fn prepare_for_save(&mut self) -> Result<(), DomainError> {
        require_text("name", &self.name, MAX_TITLE_LEN)?;
        require_present("description", &self.description)?;
        self.ensure_slug();
        validate_slug(&self.slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_SLUG_LEN;

    #[test]
    fn blank_slug_is_derived_on_save() {
        let mut category = Category::new("Python", "All things Python");
        category.prepare_for_save().unwrap();
        assert_eq!(category.slug, "python");
        assert_eq!(category.absolute_url(), "/category/python");
    }

    #[test]
    fn whitespace_slug_counts_as_blank() {
        let mut category = Category::new("Web Development", "Sites and services").with_slug("   ");
        category.prepare_for_save().unwrap();
        assert_eq!(category.slug, "web-development");
    }

    #[test]
    fn explicit_slug_is_kept() {
        let mut category = Category::new("Python", "All things Python").with_slug("py");
        category.prepare_for_save().unwrap();
        assert_eq!(category.slug, "py");
    }

    #[test]
    fn renaming_does_not_rederive_slug() {
        let mut category = Category::new("Python", "All things Python");
        category.prepare_for_save().unwrap();
        category.name = "Python 3".to_string();
        category.prepare_for_save().unwrap();
        assert_eq!(category.slug, "python");
    }

    #[test]
    fn name_is_required() {
        let mut category = Category::new("  ", "desc");
        assert_eq!(
            category.prepare_for_save(),
            Err(DomainError::MissingField { field: "name" })
        );
    }

    #[test]
    fn description_is_required() {
        let mut category = Category::new("Python", "");
        assert_eq!(
            category.prepare_for_save(),
            Err(DomainError::MissingField {
                field: "description"
            })
        );

        let mut category = Category::new("Python", " \n ");
        assert_eq!(
            category.prepare_for_save(),
            Err(DomainError::MissingField {
                field: "description"
            })
        );
    }

    #[test]
    fn derived_slug_equals_slugify() {
        let name = "Crème Brûlée, Again!";
        let mut category = Category::new(name, "Servers");
        category.prepare_for_save().unwrap();
        assert_eq!(category.slug, slugify(name));
    }

    #[test]
    fn derived_slug_over_limit_is_rejected() {
        let name = "An Introduction To Writing Asynchronous Web Services";
        assert!(slugify(name).len() > MAX_SLUG_LEN);

        let mut category = Category::new(name, "Async Rust");
        assert_eq!(
            category.prepare_for_save(),
            Err(DomainError::TooLong {
                field: "slug",
                max: MAX_SLUG_LEN
            })
        );
    }

    #[test]
    fn name_without_slug_characters_is_rejected() {
        let mut category = Category::new("!!!", "Shouting");
        assert_eq!(
            category.prepare_for_save(),
            Err(DomainError::MissingField { field: "slug" })
        );
    }

    #[test]
    fn deserializes_without_slug() {
        let category: Category = serde_json::from_str(
            r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"Rust","description":"Crabs"}"#,
        )
        .unwrap();
        assert_eq!(category.slug, "");
        assert_eq!(category.to_string(), "Rust");
    }
}
