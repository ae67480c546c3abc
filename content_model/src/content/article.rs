//! Article definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Content, ContentId, ContentStatus};

/// A long-form editorial entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ContentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ContentStatus,

    pub title: String,
    pub content: String,
    pub author_id: String,
    pub tags: Vec<String>,

    /// Free-form extension data (editor metadata, SEO fields, etc.).
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Article {
    /// Create a new draft article with the given title and body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ContentId::new(),
            created_at: now,
            updated_at: now,
            status: ContentStatus::Draft,
            title: title.into(),
            content: content.into(),
            author_id: String::new(),
            tags: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Set an explicit ID (e.g. a slug) instead of the generated one.
    pub fn with_id(mut self, id: impl Into<ContentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the lifecycle status.
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    /// Add a tag to this article.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags to this article.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Check if this article carries a specific tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Content for Article {
    type Patch = ArticlePatch;

    fn id(&self) -> &ContentId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn status(&self) -> ContentStatus {
        self.status
    }

    fn merged(&self, patch: ArticlePatch) -> Self {
        Self {
            id: self.id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            status: patch.status.unwrap_or(self.status),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            author_id: patch.author_id.unwrap_or_else(|| self.author_id.clone()),
            tags: patch.tags.unwrap_or_else(|| self.tags.clone()),
            metadata: patch.metadata.unwrap_or_else(|| self.metadata.clone()),
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Partial update for an [`Article`]. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ContentStatus>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl ArticlePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replace the author.
    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Replace the tag list.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the lifecycle status.
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
