//! Canonical attraction catalog, keyed by region.
//!
//! The catalog is externally sourced and read-only to the core: it is
//! rebuilt wholesale on every fetch and never mutated between fetches.
//! Regions exist as first-class keys even when they have no attractions,
//! so progress aggregation can classify every region, including the
//! attraction-less ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of an administrative region (e.g. `"ANT"`).
pub type RegionId = String;

/// Identifier of an attraction, unique within its region's list.
pub type AttractionId = String;

/// Category bucket for attractions that carry no category of their own.
pub const FALLBACK_CATEGORY: &str = "Other";

/// A single tourist attraction belonging to one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: AttractionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub region_id: RegionId,
}

/// A region entry: display name plus its ordered attraction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

/// The full region-to-attractions mapping for one fetch cycle.
///
/// Invariant: every attraction stored under a region key carries that
/// region's id in its `region_id` field. [`Catalog::from_attractions`]
/// establishes this by grouping on `region_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog {
    regions: BTreeMap<RegionId, Region>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }

    /// Load a catalog from its canonical JSON document, a map of region
    /// ids to `{ name, attractions }` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a catalog from a flat attraction collection, grouping by
    /// each attraction's `region_id` in encounter order.
    ///
    /// `region_names` seeds the region set, so regions without any
    /// attractions still appear as keys. Attractions referencing a
    /// region absent from `region_names` create that region on demand
    /// with the bare id as its display name.
    #[must_use]
    pub fn from_attractions(
        region_names: impl IntoIterator<Item = (RegionId, String)>,
        attractions: impl IntoIterator<Item = Attraction>,
    ) -> Self {
        let mut regions: BTreeMap<RegionId, Region> = region_names
            .into_iter()
            .map(|(id, name)| {
                (
                    id,
                    Region {
                        name,
                        attractions: Vec::new(),
                    },
                )
            })
            .collect();
        for attraction in attractions {
            regions
                .entry(attraction.region_id.clone())
                .or_insert_with(|| Region {
                    name: attraction.region_id.clone(),
                    attractions: Vec::new(),
                })
                .attractions
                .push(attraction);
        }
        Self { regions }
    }

    /// Number of regions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog has no regions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Whether the region exists in the catalog.
    #[must_use]
    pub fn contains_region(&self, region_id: &str) -> bool {
        self.regions.contains_key(region_id)
    }

    /// The ordered attraction list for a region, or an empty slice when
    /// the region is unknown. Callers never need to distinguish "region
    /// absent" from "region without attractions" here; classification
    /// does that against [`Catalog::contains_region`].
    #[must_use]
    pub fn attractions(&self, region_id: &str) -> &[Attraction] {
        self.regions
            .get(region_id)
            .map_or(&[], |region| region.attractions.as_slice())
    }

    /// Whether `attraction_id` exists in the region's attraction list.
    #[must_use]
    pub fn has_attraction(&self, region_id: &str, attraction_id: &str) -> bool {
        self.attractions(region_id)
            .iter()
            .any(|attraction| attraction.id == attraction_id)
    }

    /// Iterator over all region ids in key order.
    pub fn region_ids(&self) -> impl Iterator<Item = &RegionId> {
        self.regions.keys()
    }

    /// Iterator over `(region_id, region)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, &Region)> {
        self.regions.iter()
    }

    /// Human-readable label for a region: `"Antioquia (ANT)"`, or the
    /// bare id when the region is not in the catalog.
    #[must_use]
    pub fn display_name(&self, region_id: &str) -> String {
        self.regions.get(region_id).map_or_else(
            || region_id.to_string(),
            |region| format!("{} ({region_id})", region.name),
        )
    }

    /// Group a region's attractions by category, preserving list order
    /// within each bucket. Attractions without a category land in
    /// [`FALLBACK_CATEGORY`].
    #[must_use]
    pub fn attractions_by_category(&self, region_id: &str) -> BTreeMap<&str, Vec<&Attraction>> {
        let mut grouped: BTreeMap<&str, Vec<&Attraction>> = BTreeMap::new();
        for attraction in self.attractions(region_id) {
            let category = if attraction.category.is_empty() {
                FALLBACK_CATEGORY
            } else {
                attraction.category.as_str()
            };
            grouped.entry(category).or_default().push(attraction);
        }
        grouped
    }
}
