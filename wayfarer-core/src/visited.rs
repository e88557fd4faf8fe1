//! Per-user visited state and its copy-on-write mutators.
//!
//! `VisitedState` maps region ids to the attraction ids the user has
//! marked visited in that region. A region key present with an empty
//! list means the region was acknowledged despite having no catalog
//! attractions; an absent key means the region is untouched. Every
//! mutator returns a new value, so callers can treat prior states as
//! immutable snapshots suitable for diffing or rollback.

use crate::catalog::{AttractionId, RegionId};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::collections::BTreeMap;

/// Visited attraction ids within one region. Small in practice, so
/// short lists stay inline without allocating.
pub type VisitedIds = SmallVec<[AttractionId; 4]>;

/// A user's visited attractions, keyed by region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VisitedState {
    regions: BTreeMap<RegionId, VisitedIds>,
}

impl VisitedState {
    /// Create an empty state, the value used for users with no
    /// persisted record yet.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }

    pub(crate) fn from_map(regions: BTreeMap<RegionId, VisitedIds>) -> Self {
        Self { regions }
    }

    /// Decode a persisted visited document leniently: a non-object
    /// document yields the empty state, a non-array value under a
    /// region key is coerced to an empty list (the key is kept), and
    /// non-string list elements are skipped.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut regions = BTreeMap::new();
        if let Some(map) = value.as_object() {
            for (region_id, entry) in map {
                let ids = match entry {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(serde_json::Value::as_str)
                        .map(str::to_string)
                        .collect(),
                    _ => VisitedIds::new(),
                };
                regions.insert(region_id.clone(), ids);
            }
        }
        Self { regions }
    }

    /// Parse a persisted visited document from JSON text, applying the
    /// same lenient coercions as [`VisitedState::from_value`].
    ///
    /// # Errors
    ///
    /// Returns an error only when the text is not valid JSON at all.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Number of region keys present in the state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no region has been touched at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Whether the region key is present, including the empty-list
    /// "acknowledged" form.
    #[must_use]
    pub fn contains_region(&self, region_id: &str) -> bool {
        self.regions.contains_key(region_id)
    }

    /// Visited ids recorded for a region, or an empty slice when the
    /// region key is absent.
    #[must_use]
    pub fn ids_in(&self, region_id: &str) -> &[AttractionId] {
        self.regions
            .get(region_id)
            .map_or(&[], |ids| ids.as_slice())
    }

    /// Whether a specific attraction is marked visited.
    #[must_use]
    pub fn is_visited(&self, region_id: &str, attraction_id: &str) -> bool {
        self.ids_in(region_id).iter().any(|id| id == attraction_id)
    }

    /// Iterator over `(region_id, ids)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, &[AttractionId])> {
        self.regions.iter().map(|(id, ids)| (id, ids.as_slice()))
    }

    /// Toggle one attraction's visited flag.
    ///
    /// Removing the last id of a region drops the region key entirely:
    /// toggling off the final attraction un-acknowledges the region,
    /// unlike reconciliation, which keeps emptied keys.
    #[must_use]
    pub fn toggle_attraction(&self, region_id: &str, attraction_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(ids) = next.regions.get_mut(region_id) {
            if let Some(position) = ids.iter().position(|id| id == attraction_id) {
                ids.remove(position);
                if ids.is_empty() {
                    next.regions.remove(region_id);
                }
            } else {
                ids.push(attraction_id.to_string());
            }
        } else {
            next.regions
                .insert(region_id.to_string(), smallvec![attraction_id.to_string()]);
        }
        next
    }

    /// Replace a region's selection wholesale. An empty selection
    /// deletes the region key: saving "nothing selected" is the
    /// user-facing way to un-acknowledge a region.
    #[must_use]
    pub fn set_region_selection(&self, region_id: &str, selected: &[AttractionId]) -> Self {
        let mut next = self.clone();
        if selected.is_empty() {
            next.regions.remove(region_id);
        } else {
            next.regions
                .insert(region_id.to_string(), selected.iter().cloned().collect());
        }
        next
    }

    /// Flip the acknowledged flag of a zero-attraction region: absent
    /// becomes present-with-empty-list, present is removed.
    #[must_use]
    pub fn toggle_region_acknowledged(&self, region_id: &str) -> Self {
        let mut next = self.clone();
        if next.regions.remove(region_id).is_none() {
            next.regions
                .insert(region_id.to_string(), VisitedIds::new());
        }
        next
    }
}
