use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{NewShow, Show, ShowFields};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}

struct Table {
    rows: Vec<Show>,
    next_id: u64,
}

/// In-memory mock store over named collections.
///
/// Rows live in insertion order and ids are assigned sequentially starting
/// at 1. Clone-friendly via Arc; one lock guards each full read/mutate step.
#[derive(Clone)]
pub struct MockStore {
    collections: Arc<RwLock<HashMap<String, Table>>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Create a store with an empty `shows` collection.
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Create a store pre-populated with the sample shows the demo server
    /// starts with.
    pub fn seeded() -> Self {
        Self::with_rows(vec![
            Show {
                id: 1,
                name: "Game of Thrones".to_string(),
                episodes_seen: 0,
            },
            Show {
                id: 2,
                name: "Naruto".to_string(),
                episodes_seen: 220,
            },
            Show {
                id: 3,
                name: "Black Mirror".to_string(),
                episodes_seen: 3,
            },
        ])
    }

    fn with_rows(rows: Vec<Show>) -> Self {
        let next_id = rows.iter().map(|show| show.id).max().unwrap_or(0) + 1;

        let mut collections = HashMap::new();
        collections.insert("shows".to_string(), Table { rows, next_id });

        Self {
            collections: Arc::new(RwLock::new(collections)),
        }
    }

    /// All rows of a collection, in insertion order.
    pub async fn get(&self, collection: &str) -> Result<Vec<Show>, StoreError> {
        let collections = self.collections.read().await;
        let table = collections
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        Ok(table.rows.clone())
    }

    /// Row with the given id, if any.
    pub async fn get_by_id(&self, collection: &str, id: u64) -> Result<Option<Show>, StoreError> {
        let collections = self.collections.read().await;
        let table = collections
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        Ok(table.rows.iter().find(|show| show.id == id).cloned())
    }

    /// Insert a new row, assigning the next id.
    pub async fn create(&self, collection: &str, fields: NewShow) -> Result<Show, StoreError> {
        let mut collections = self.collections.write().await;
        let table = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        let show = Show {
            id: table.next_id,
            name: fields.name,
            episodes_seen: fields.episodes_seen,
        };
        table.next_id += 1;
        table.rows.push(show.clone());

        Ok(show)
    }

    /// Apply a partial patch to the row with the given id. Only supplied
    /// fields change; returns the updated row, or None if the id is unknown.
    pub async fn update_by_id(
        &self,
        collection: &str,
        id: u64,
        patch: &ShowFields,
    ) -> Result<Option<Show>, StoreError> {
        let mut collections = self.collections.write().await;
        let table = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        match table.rows.iter_mut().find(|show| show.id == id) {
            Some(show) => {
                if let Some(name) = &patch.name {
                    show.name = name.clone();
                }
                if let Some(episodes_seen) = patch.episodes_seen {
                    show.episodes_seen = episodes_seen;
                }
                Ok(Some(show.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove the row with the given id; reports whether a row existed.
    pub async fn delete_by_id(&self, collection: &str, id: u64) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let table = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        let before = table.rows.len();
        table.rows.retain(|show| show.id != id);

        Ok(table.rows.len() < before)
    }
}
