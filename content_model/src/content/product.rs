//! Product definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Content, ContentId, ContentStatus};

/// A catalog entry for a sellable item.
///
/// `price` and `stock` are signed on purpose: out-of-range values are a
/// validation outcome, not a construction error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ContentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ContentStatus,

    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub categories: Vec<String>,

    /// Free-form extension data (supplier references, shop-specific fields).
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Product {
    /// Create a new draft product with the given name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: ContentId::new(),
            created_at: now,
            updated_at: now,
            status: ContentStatus::Draft,
            name: name.into(),
            description: String::new(),
            price,
            stock: 0,
            categories: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Set an explicit ID (e.g. an SKU) instead of the generated one.
    pub fn with_id(mut self, id: impl Into<ContentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the lifecycle status.
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the units in stock.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Add a category to this product.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Check whether any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Content for Product {
    type Patch = ProductPatch;

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

    fn merged(&self, patch: ProductPatch) -> Self {
        Self {
            id: self.id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            status: patch.status.unwrap_or(self.status),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
            stock: patch.stock.unwrap_or(self.stock),
            categories: patch.categories.unwrap_or_else(|| self.categories.clone()),
            metadata: patch.metadata.unwrap_or_else(|| self.metadata.clone()),
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Partial update for a [`Product`]. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub categories: Option<Vec<String>>,
    pub status: Option<ContentStatus>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl ProductPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Replace the units in stock.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Replace the lifecycle status.
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
