//! Reconciliation of persisted visited state against a live catalog.
//!
//! Attractions get deleted or renamed between sessions, so a persisted
//! state may reference ids the catalog no longer contains. Reconciling
//! prunes those dangling references and collapses duplicates without
//! ever adding or removing region keys.

use crate::catalog::Catalog;
use crate::visited::{VisitedIds, VisitedState};
use std::collections::{BTreeMap, HashSet};

/// Clean a raw visited state against the given catalog snapshot.
///
/// For every region key in `raw`, the id list is filtered down to ids
/// present in the catalog's list for that region (none, when the
/// catalog does not know the region) and deduplicated keeping the first
/// occurrence. Lists that come out empty stay in the result with their
/// key: an emptied region still reads as acknowledged, which is what a
/// zero-attraction region that was marked visited relies on.
///
/// Pure and total: unknown regions and malformed ids are filtered, not
/// reported. Idempotent by construction.
#[must_use]
pub fn reconcile(raw: &VisitedState, catalog: &Catalog) -> VisitedState {
    let mut regions = BTreeMap::new();
    for (region_id, ids) in raw.iter() {
        let valid: HashSet<&str> = catalog
            .attractions(region_id)
            .iter()
            .map(|attraction| attraction.id.as_str())
            .collect();
        let mut seen = HashSet::new();
        let kept: VisitedIds = ids
            .iter()
            .filter(|id| valid.contains(id.as_str()) && seen.insert(id.as_str()))
            .cloned()
            .collect();
        regions.insert(region_id.clone(), kept);
    }
    VisitedState::from_map(regions)
}
