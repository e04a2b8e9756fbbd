//! Trait definitions for external interactions
//!
//! Infrastructure implementations live in other crates.

use crate::{ReframeId, SavedReframe};

/// Trait for storing and retrieving saved reframes
///
/// Implemented by the infrastructure layer (reframe-store). The list is
/// append-only: records are created and deleted, never edited.
pub trait ReframeStore {
    /// Error type for store operations
    type Error;

    /// Save a reframe; identical text already on the list is a duplicate
    fn save_reframe(&mut self, reframe: SavedReframe) -> Result<ReframeId, Self::Error>;

    /// Get a reframe by ID
    fn get_reframe(&self, id: ReframeId) -> Result<Option<SavedReframe>, Self::Error>;

    /// List reframes matching criteria, oldest first
    fn list_reframes(&self, query: &ReframeQuery) -> Result<Vec<SavedReframe>, Self::Error>;

    /// Delete a reframe; returns `false` if it did not exist
    fn delete_reframe(&mut self, id: ReframeId) -> Result<bool, Self::Error>;
}

/// Query criteria for listing saved reframes
#[derive(Debug, Clone, Default)]
pub struct ReframeQuery {
    /// Case-insensitive substring filter on the text
    pub contains: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}
