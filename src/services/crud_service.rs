use anyhow::Result;
use async_trait::async_trait;

use crate::db::MockStore;
use crate::models::{NewShow, Show, ShowFields};

/// CRUD operations trait for store-backed collections
#[async_trait]
pub trait CrudService {
    /// Create a new record, letting the store assign its id
    async fn create(&self, fields: NewShow) -> Result<Show>;

    /// Read a record by its id
    async fn read_by_id(&self, id: u64) -> Result<Option<Show>>;

    /// Read all records in the collection
    async fn read_many(&self) -> Result<Vec<Show>>;

    /// Apply a partial patch to a record by its id
    async fn update(&self, id: u64, patch: &ShowFields) -> Result<Option<Show>>;

    /// Delete a record by its id
    async fn delete(&self, id: u64) -> Result<bool>;
}

/// Mock-store CRUD implementation for the show collection
pub struct ShowCrudService {
    store: MockStore,
}

impl ShowCrudService {
    pub fn new(store: MockStore) -> Self {
        Self { store }
    }

    /// Find shows with at least `min` episodes seen
    pub async fn find_min_episodes(&self, min: i64) -> Result<Vec<Show>> {
        let shows = self.store.get("shows").await?;

        Ok(shows
            .into_iter()
            .filter(|show| show.episodes_seen >= min)
            .collect())
    }
}

#[async_trait]
impl CrudService for ShowCrudService {
    async fn create(&self, fields: NewShow) -> Result<Show> {
        let show = self.store.create("shows", fields).await?;

        Ok(show)
    }

    async fn read_by_id(&self, id: u64) -> Result<Option<Show>> {
        let show = self.store.get_by_id("shows", id).await?;

        Ok(show)
    }

    async fn read_many(&self) -> Result<Vec<Show>> {
        let shows = self.store.get("shows").await?;

        Ok(shows)
    }

    async fn update(&self, id: u64, patch: &ShowFields) -> Result<Option<Show>> {
        let show = self.store.update_by_id("shows", id, patch).await?;

        Ok(show)
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let deleted = self.store.delete_by_id("shows", id).await?;

        Ok(deleted)
    }
}
