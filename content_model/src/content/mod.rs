//! Content definitions - the base shape shared by every storable entity.

mod article;
mod product;

pub use article::*;
pub use product::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for all content entities.
///
/// Backed by a string so callers can supply their own ids (slugs, external
/// keys) while `new()` mints a random UUID-based one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    /// Create a new random content ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a content entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    /// Being written; not visible to readers.
    #[default]
    Draft,
    /// Live and visible.
    Published,
    /// Retired from publication but kept for reference.
    Archived,
}

impl ContentStatus {
    /// String form matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }

    /// Check whether the content is live.
    pub fn is_published(&self) -> bool {
        matches!(self, ContentStatus::Published)
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The base shape every storable entity provides.
///
/// `id` and `created_at` are fixed at construction; `updated_at` is refreshed
/// by the store on every update. Partial updates go through the associated
/// [`Content::Patch`] type, which deliberately has no `id`, `created_at`, or
/// `updated_at` fields, so none of them can be overridden by a patch.
pub trait Content {
    /// Typed partial-update shape for this entity.
    type Patch;

    /// Unique identifier, immutable after creation.
    fn id(&self) -> &ContentId;

    /// When this entity was created.
    fn created_at(&self) -> DateTime<Utc>;

    /// When this entity was last updated.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Current lifecycle status.
    fn status(&self) -> ContentStatus;

    /// Produce a new snapshot with the patch's fields applied over this one.
    ///
    /// Shallow merge: a field present in the patch replaces the whole field.
    /// `id` and `created_at` always carry over from `self`.
    fn merged(&self, patch: Self::Patch) -> Self;

    /// Refresh the `updated_at` timestamp.
    fn touch(&mut self, at: DateTime<Utc>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_id_generation() {
        let a = ContentId::new();
        let b = ContentId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_content_id_from_str() {
        let id = ContentId::from("article-1");
        assert_eq!(id.as_str(), "article-1");
        assert_eq!(id.to_string(), "article-1");
    }

    #[test]
    fn test_content_id_equality() {
        let a = ContentId::from("same");
        let b = ContentId::from("same");
        assert_eq!(a, b);
    }

    #[test]
    fn test_status_default_is_draft() {
        assert_eq!(ContentStatus::default(), ContentStatus::Draft);
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(ContentStatus::Draft.as_str(), "draft");
        assert_eq!(ContentStatus::Published.as_str(), "published");
        assert_eq!(ContentStatus::Archived.as_str(), "archived");
    }

    #[test]
    fn test_status_is_published() {
        assert!(ContentStatus::Published.is_published());
        assert!(!ContentStatus::Draft.is_published());
        assert!(!ContentStatus::Archived.is_published());
    }
}
