//! Versioning - immutable version wrapper for external change tracking.
//!
//! Version numbers are caller-managed: the store never reads or writes them.
//! Wrapping is a pure projection over a snapshot, so versioning stays an
//! optional read-side concern decoupled from the mutation path.

use serde::{Deserialize, Serialize};

/// A content snapshot tagged with an integer version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub content: T,
    pub version: u32,
}

impl<T> Versioned<T> {
    /// Wrap a snapshot as version 1.
    pub fn initial(content: T) -> Self {
        Self {
            content,
            version: 1,
        }
    }

    /// Produce the successor: the given snapshot at `version + 1`.
    pub fn revise(self, content: T) -> Self {
        Self {
            content,
            version: self.version + 1,
        }
    }

    /// The wrapped snapshot.
    pub fn as_content(&self) -> &T {
        &self.content
    }

    /// The version number.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Unwrap, discarding the version.
    pub fn into_inner(self) -> T {
        self.content
    }
}

impl<T> AsRef<T> for Versioned<T> {
    fn as_ref(&self) -> &T {
        &self.content
    }
}
