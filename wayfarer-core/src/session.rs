//! High-level session binding one catalog snapshot to one visited state.

use crate::catalog::{AttractionId, Catalog};
use crate::reconcile::reconcile;
use crate::stats::{ProgressSnapshot, RegionStatus, aggregate, classify_region};
use crate::visited::VisitedState;

/// A consistent `(catalog, visited)` pair for one user and one fetch
/// cycle.
///
/// The constructor reconciles the raw persisted state against the
/// catalog, and every edit goes through the copy-on-write mutators, so
/// the pair can never mix ids from different catalog generations. A new
/// catalog fetch means a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSession {
    catalog: Catalog,
    visited: VisitedState,
}

impl TripSession {
    /// Build a session from a catalog snapshot and the raw visited
    /// state loaded from persistence, cleaning the latter against the
    /// former.
    #[must_use]
    pub fn new(catalog: Catalog, raw_visited: &VisitedState) -> Self {
        let visited = reconcile(raw_visited, &catalog);
        Self { catalog, visited }
    }

    /// The catalog snapshot this session was opened against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current, reconciled visited state. This is the value to
    /// persist after edits.
    #[must_use]
    pub fn visited(&self) -> &VisitedState {
        &self.visited
    }

    /// Toggle one attraction's visited flag.
    pub fn toggle_attraction(&mut self, region_id: &str, attraction_id: &str) {
        self.visited = self.visited.toggle_attraction(region_id, attraction_id);
    }

    /// Replace a region's selection wholesale; empty un-acknowledges.
    pub fn set_region_selection(&mut self, region_id: &str, selected: &[AttractionId]) {
        self.visited = self.visited.set_region_selection(region_id, selected);
    }

    /// Flip the acknowledged flag of an attraction-less region.
    pub fn toggle_region_acknowledged(&mut self, region_id: &str) {
        self.visited = self.visited.toggle_region_acknowledged(region_id);
    }

    /// Current progress counters for this pair.
    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        aggregate(&self.visited, &self.catalog)
    }

    /// Completion classification of one region.
    #[must_use]
    pub fn region_status(&self, region_id: &str) -> RegionStatus {
        classify_region(&self.visited, &self.catalog, region_id)
    }

    /// Tear the session apart into its catalog and visited halves.
    #[must_use]
    pub fn into_parts(self) -> (Catalog, VisitedState) {
        (self.catalog, self.visited)
    }
}
