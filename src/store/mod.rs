//! # Persistence Layer
//!
//! The seam between the HTTP surface and the hosted store. The trait covers
//! exactly the collaborator contract the API needs: insert-with-return,
//! ordered select, single-row select, filtered update-with-return, and
//! filtered delete. No retries, caching, or transactions live here.

pub mod error;
pub mod memory;
pub mod supabase;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;

use crate::model::{ItemFields, ShoppingListItem};

/// Abstract store interface for the shopping list collection.
///
/// Implementations must be thread-safe (Send + Sync); one instance is
/// created at startup and shared for the process lifetime.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert one row and return the inserted row(s).
    async fn insert(&self, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>>;

    /// Fetch all rows ordered ascending by expiry date.
    async fn list(&self) -> StoreResult<Vec<ShoppingListItem>>;

    /// Fetch the single row whose id matches; zero or multiple matches
    /// are an error.
    async fn get(&self, id: i64) -> StoreResult<ShoppingListItem>;

    /// Overwrite every writable field of the matching row(s) and return
    /// them. Zero matched rows is not an error.
    ///
    /// The id is passed through as the raw path string; the store decides
    /// how (or whether) to coerce it.
    async fn update(&self, id: &str, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>>;

    /// Delete the matching row(s). Zero matched rows is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
