//! Wayfarer Core
//!
//! Platform-agnostic visited-state logic for the Wayfarer travel
//! tracker. This crate owns the data model and the reconcile /
//! aggregate / mutate pipeline without any UI, network, or database
//! dependencies; catalog fetching and persistence are injected through
//! the [`CatalogSource`] and [`VisitedStore`] traits.

pub mod catalog;
pub mod error;
pub mod reconcile;
pub mod session;
pub mod stats;
pub mod visited;

// Re-export commonly used types
pub use catalog::{Attraction, AttractionId, Catalog, FALLBACK_CATEGORY, Region, RegionId};
pub use error::TripError;
pub use reconcile::reconcile;
pub use session::TripSession;
pub use stats::{ProgressSnapshot, RegionStatus, aggregate, classify_region};
pub use visited::{VisitedIds, VisitedState};

use async_trait::async_trait;

/// Trait for fetching the canonical catalog.
/// Platform-specific implementations should provide this.
///
/// A failed fetch means "catalog unavailable", never "catalog is
/// empty"; the engine refuses to reconcile without a catalog so valid
/// visited ids are never pruned against nothing.
#[async_trait]
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the current full region-to-attractions mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be fetched.
    async fn fetch_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Trait for persisting per-user visited state.
/// Platform-specific implementations should provide this.
#[async_trait]
pub trait VisitedStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the raw persisted state for a user, or `None` when the
    /// user has no record yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be read.
    async fn load_visited(&self, user_key: &str) -> Result<Option<VisitedState>, Self::Error>;

    /// Durably store the given state, fully replacing the user's
    /// region-keyed mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be stored.
    async fn save_visited(&self, user_key: &str, state: &VisitedState)
    -> Result<(), Self::Error>;

    /// Remove the user's persisted state entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be removed.
    async fn delete_visited(&self, user_key: &str) -> Result<(), Self::Error>;
}

/// Engine tying a catalog source and a visited store together into the
/// load-reconcile-edit-save cycle.
pub struct TripEngine<C, S>
where
    C: CatalogSource,
    S: VisitedStore,
{
    catalog_source: C,
    store: S,
}

impl<C, S> TripEngine<C, S>
where
    C: CatalogSource,
    S: VisitedStore,
{
    /// Create an engine from the provided catalog source and store.
    pub const fn new(catalog_source: C, store: S) -> Self {
        Self {
            catalog_source,
            store,
        }
    }

    /// Open a session for a user: fetch a catalog snapshot, load the
    /// raw visited state (absent means empty), and reconcile the pair.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::CatalogUnavailable`] when the catalog
    /// fetch fails (no reconciliation is attempted in that case) and
    /// [`TripError::Load`] when the persisted state cannot be read.
    pub async fn load_session(&self, user_key: &str) -> Result<TripSession, TripError> {
        let catalog = self
            .catalog_source
            .fetch_catalog()
            .await
            .map_err(|e| TripError::CatalogUnavailable(e.into()))?;
        let raw = self
            .store
            .load_visited(user_key)
            .await
            .map_err(|e| TripError::Load(e.into()))?
            .unwrap_or_default();
        Ok(TripSession::new(catalog, &raw))
    }

    /// Persist a session's current visited state, replacing the user's
    /// stored document. The session itself is untouched, so a failed
    /// save leaves the caller with the last known-good value.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Persistence`] if the store rejects the
    /// write.
    pub async fn save_session(
        &self,
        user_key: &str,
        session: &TripSession,
    ) -> Result<(), TripError> {
        self.store
            .save_visited(user_key, session.visited())
            .await
            .map_err(|e| TripError::Persistence(e.into()))
    }

    /// Remove a user's persisted visited state.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Persistence`] if the store rejects the
    /// removal.
    pub async fn delete_visited(&self, user_key: &str) -> Result<(), TripError> {
        self.store
            .delete_visited(user_key)
            .await
            .map_err(|e| TripError::Persistence(e.into()))
    }
}
