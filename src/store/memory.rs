//! # In-Memory Store
//!
//! In-process implementation of [`ItemStore`] for tests and local
//! development. Mirrors the hosted store's observable semantics: sequential
//! id assignment, ascending expiry-date ordering with nulls last, errors on
//! non-single single-row reads, and silent success for zero-row updates and
//! deletes.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{ItemFields, ShoppingListItem};

use super::error::{StoreError, StoreResult};
use super::ItemStore;

/// In-memory implementation of [`ItemStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<ShoppingListItem>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Coerce a raw path id the way a numeric id column would.
    fn parse_id(id: &str) -> StoreResult<i64> {
        id.trim().parse().map_err(|_| {
            StoreError::Backend(format!("invalid input syntax for type bigint: \"{}\"", id))
        })
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn insert(&self, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = ShoppingListItem::from_fields(id, fields);

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        rows.push(item.clone());

        Ok(vec![item])
    }

    async fn list(&self) -> StoreResult<Vec<ShoppingListItem>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;

        let mut items = rows.clone();
        // ISO date strings order lexicographically; nulls sort last, as the
        // hosted store does for ascending order.
        items.sort_by(|a, b| match (&a.expiry_date, &b.expiry_date) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        Ok(items)
    }

    async fn get(&self, id: i64) -> StoreResult<ShoppingListItem> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;

        let mut matches = rows.iter().filter(|r| r.id == id);
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.clone()),
            _ => Err(StoreError::NotSingleRow),
        }
    }

    async fn update(&self, id: &str, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>> {
        let id = Self::parse_id(id)?;

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;

        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|r| r.id == id) {
            *row = ShoppingListItem::from_fields(row.id, fields.clone());
            updated.push(row.clone());
        }

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let id = Self::parse_id(id)?;

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        rows.retain(|r| r.id != id);

        Ok(())
    }
}
