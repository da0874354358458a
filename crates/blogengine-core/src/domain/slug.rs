//! Slug helpers.

use crate::error::DomainError;

/// Maximum stored slug length, shared by categories and posts.
pub const MAX_SLUG_LEN: usize = 40;

/// Derive a URL-safe slug from a human-readable name.
///
/// Non-ASCII characters are transliterated to ASCII, the result is lowercased
/// and every run of whitespace or punctuation becomes a single hyphen. Leading
/// and trailing hyphens are dropped, so the output is its own slug:
///
/// ```
/// use blogengine_core::domain::slugify;
///
/// assert_eq!(slugify("Crème Brûlée, Again!"), "creme-brulee-again");
/// assert_eq!(slugify(&slugify("Crème Brûlée")), slugify("Crème Brûlée"));
/// ```
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}

/// Check a stored slug: non-empty, bounded, `[-a-zA-Z0-9_]` only.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() {
        return Err(DomainError::MissingField { field: "slug" });
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(DomainError::TooLong {
            field: "slug",
            max: MAX_SLUG_LEN,
        });
    }
    let well_formed = slug
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !well_formed {
        return Err(DomainError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Python"), "python");
        assert_eq!(slugify("Django Tips & Tricks"), "django-tips-tricks");
        assert_eq!(slugify("  lots   of -- space  "), "lots-of-space");
    }

    #[test]
    fn slugify_transliterates_non_ascii() {
        assert_eq!(slugify("Héllo Wörld"), "hello-world");
        assert!(slugify("Ünïcödé Straße").is_ascii());
    }

    #[test]
    fn slugify_is_idempotent() {
        for name in [
            "My First Post",
            "Crème Brûlée",
            "--already-a-slug--",
            "C++ & Rust: 2015 edition",
            "snake_case_name",
        ] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn validate_slug_rejects_bad_input() {
        assert!(validate_slug("my-first_post-2").is_ok());
        assert_eq!(
            validate_slug(""),
            Err(DomainError::MissingField { field: "slug" })
        );
        assert!(matches!(
            validate_slug("has space"),
            Err(DomainError::InvalidSlug(_))
        ));
        assert!(matches!(
            validate_slug(&"a".repeat(MAX_SLUG_LEN + 1)),
            Err(DomainError::TooLong { .. })
        ));
    }
}
