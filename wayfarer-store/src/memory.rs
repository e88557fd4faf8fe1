//! In-memory adapters: a shared-map visited store and a catalog source
//! over a prebuilt catalog value.

use async_trait::async_trait;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use wayfarer_core::{Catalog, CatalogSource, VisitedState, VisitedStore};

/// Visited store backed by a process-local map. Clones share the same
/// underlying map, so one instance can serve several engine handles.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saves: Arc<Mutex<HashMap<String, VisitedState>>>,
}

/// The only way a [`MemoryStore`] operation can fail.
#[derive(Debug, Error)]
#[error("memory store lock poisoned")]
pub struct PoisonedStore;

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a persisted state, mostly for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing lock is poisoned.
    pub fn user_count(&self) -> Result<usize, PoisonedStore> {
        Ok(self.saves.lock().map_err(|_| PoisonedStore)?.len())
    }
}

#[async_trait]
impl VisitedStore for MemoryStore {
    type Error = PoisonedStore;

    async fn load_visited(&self, user_key: &str) -> Result<Option<VisitedState>, Self::Error> {
        let saves = self.saves.lock().map_err(|_| PoisonedStore)?;
        Ok(saves.get(user_key).cloned())
    }

    async fn save_visited(&self, user_key: &str, state: &VisitedState) -> Result<(), Self::Error> {
        let mut saves = self.saves.lock().map_err(|_| PoisonedStore)?;
        log::debug!("saving visited state for {user_key} ({} regions)", state.len());
        saves.insert(user_key.to_string(), state.clone());
        Ok(())
    }

    async fn delete_visited(&self, user_key: &str) -> Result<(), Self::Error> {
        let mut saves = self.saves.lock().map_err(|_| PoisonedStore)?;
        saves.remove(user_key);
        Ok(())
    }
}

/// Catalog source over a prebuilt catalog value; every fetch hands out
/// a fresh clone, one snapshot per session.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    /// Wrap an already-built catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    type Error = Infallible;

    async fn fetch_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(self.catalog.clone())
    }
}
