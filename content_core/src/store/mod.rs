//! Content store - keyed lifecycle management for one entity type.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use content_model::{Content, ContentId};

/// In-memory store holding the latest snapshot per content ID.
///
/// Each store instance is scoped to exactly one entity type; storing several
/// entity types means several independent stores. Returned snapshots are
/// immutable: there is no mutable accessor, and every change goes through
/// [`ContentStore::update`], which writes a fresh snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore<T> {
    entries: HashMap<ContentId, T>,
}

impl<T> Default for ContentStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Content> ContentStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity under its own ID and return the stored snapshot.
    ///
    /// An existing snapshot at the same ID is silently replaced; callers that
    /// need uniqueness should check [`ContentStore::contains`] first.
    pub fn create(&mut self, content: T) -> &T {
        let id = content.id().clone();
        match self.entries.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(content);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(content),
        }
    }

    /// Get the current snapshot for an ID.
    pub fn read(&self, id: &ContentId) -> Option<&T> {
        self.entries.get(id)
    }

    /// Apply a partial update to the entity at `id`.
    ///
    /// Returns `None` without creating an entry when the ID is missing
    /// (update is never upsert). Otherwise the new snapshot is the shallow
    /// merge of the current snapshot and the patch, with `updated_at` set to
    /// now; the patch type cannot carry `id`, `created_at`, or `updated_at`.
    pub fn update(&mut self, id: &ContentId, patch: T::Patch) -> Option<&T> {
        let slot = self.entries.get_mut(id)?;
        let mut next = slot.merged(patch);
        next.touch(Utc::now());
        *slot = next;
        Some(&*slot)
    }

    /// Remove the entity at `id`, reporting whether an entry was removed.
    ///
    /// Idempotent: deleting a missing ID returns `false`.
    pub fn delete(&mut self, id: &ContentId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Check whether an entry exists for `id`.
    pub fn contains(&self, id: &ContentId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Iterate over all stored IDs.
    pub fn ids(&self) -> impl Iterator<Item = &ContentId> {
        self.entries.keys()
    }

    /// Find snapshots matching a predicate.
    pub fn find<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.entries.values().filter(|c| predicate(c)).collect()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
