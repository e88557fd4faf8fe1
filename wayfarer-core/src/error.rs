//! Error taxonomy for the engine boundary.
//!
//! The pure functions in this crate are total and never fail; errors
//! only arise where the engine talks to a catalog source or a visited
//! store, and each adapter's concrete error is erased into `anyhow`
//! at that seam.

use thiserror::Error;

/// Failure at one of the engine's two asynchronous boundaries.
#[derive(Debug, Error)]
pub enum TripError {
    /// The catalog fetch failed. Reconciliation must not run in this
    /// case: substituting an empty catalog would prune every visited
    /// id the user has.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] anyhow::Error),

    /// Loading the persisted visited state failed.
    #[error("failed to load visited state: {0}")]
    Load(#[source] anyhow::Error),

    /// Persisting the visited state failed. The in-memory session is
    /// left untouched, so the caller still holds the last known-good
    /// value.
    #[error("failed to persist visited state: {0}")]
    Persistence(#[source] anyhow::Error),
}
