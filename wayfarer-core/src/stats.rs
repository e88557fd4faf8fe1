//! Progress aggregation over a reconciled visited state.
//!
//! Classification and tallying run over the catalog's region keys, not
//! the visited state's, so regions the user never touched are counted
//! as unvisited rather than ignored.

use crate::catalog::Catalog;
use crate::visited::VisitedState;
use serde::{Deserialize, Serialize};

/// Completion classification of a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionStatus {
    /// Region key absent from the visited state.
    Unvisited,
    /// Some, but not all, of the region's attractions are visited.
    Partial,
    /// Every attraction visited, or an attraction-less region that was
    /// acknowledged.
    Completed,
}

/// Derived progress counters for one `(visited, catalog)` pair.
/// Recomputed on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressSnapshot {
    pub completed_regions: usize,
    pub partial_regions: usize,
    pub unvisited_regions: usize,
    /// Overall progress in whole percent, with partial regions worth
    /// half credit. Product-defined weighting; keep it exact.
    pub progress_percent: u8,
}

impl ProgressSnapshot {
    /// Regions with any recorded progress, the "12 / 33 regions
    /// visited" headline number.
    #[must_use]
    pub const fn visited_regions(&self) -> usize {
        self.completed_regions + self.partial_regions
    }

    /// Total regions the snapshot was computed over.
    #[must_use]
    pub const fn total_regions(&self) -> usize {
        self.completed_regions + self.partial_regions + self.unvisited_regions
    }
}

/// Classify one region against an already-reconciled visited state.
///
/// Regions the catalog does not know classify as unvisited even when
/// an orphaned key for them survives in the visited state; only
/// catalog membership can make a region completable.
#[must_use]
pub fn classify_region(
    visited: &VisitedState,
    catalog: &Catalog,
    region_id: &str,
) -> RegionStatus {
    if !catalog.contains_region(region_id) || !visited.contains_region(region_id) {
        return RegionStatus::Unvisited;
    }
    let total = catalog.attractions(region_id).len();
    if total == 0 {
        // Attraction-less regions are trivially complete once acknowledged.
        return RegionStatus::Completed;
    }
    if visited.ids_in(region_id).len() == total {
        RegionStatus::Completed
    } else {
        RegionStatus::Partial
    }
}

/// Aggregate per-region classifications into a [`ProgressSnapshot`].
///
/// Expects `visited` to be reconciled against `catalog`; counts from a
/// stale pair are meaningless. The percentage rounds half-up and an
/// empty catalog reports zero percent.
#[must_use]
pub fn aggregate(visited: &VisitedState, catalog: &Catalog) -> ProgressSnapshot {
    let total_regions = catalog.len();
    let mut completed = 0usize;
    let mut partial = 0usize;
    for region_id in catalog.region_ids() {
        match classify_region(visited, catalog, region_id) {
            RegionStatus::Completed => completed += 1,
            RegionStatus::Partial => partial += 1,
            RegionStatus::Unvisited => {}
        }
    }

    let progress_percent = if total_regions == 0 {
        0
    } else {
        let weighted = completed as f64 + partial as f64 * 0.5;
        ((weighted / total_regions as f64) * 100.0).round() as u8
    };

    ProgressSnapshot {
        completed_regions: completed,
        partial_regions: partial,
        unvisited_regions: total_regions - completed - partial,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Attraction;

    fn catalog(regions: &[(&str, usize)]) -> Catalog {
        let mut attractions = Vec::new();
        for (region_id, count) in regions {
            for n in 0..*count {
                attractions.push(Attraction {
                    id: format!("{}-{n}", region_id.to_lowercase()),
                    name: format!("{region_id} attraction {n}"),
                    description: String::new(),
                    image: String::new(),
                    category: String::new(),
                    region_id: (*region_id).to_string(),
                });
            }
        }
        let names = regions
            .iter()
            .map(|(id, _)| ((*id).to_string(), (*id).to_string()));
        Catalog::from_attractions(names, attractions)
    }

    #[test]
    fn untouched_region_is_unvisited_regardless_of_size() {
        let catalog = catalog(&[("ANT", 2), ("BOY", 0)]);
        let visited = VisitedState::empty();
        assert_eq!(
            classify_region(&visited, &catalog, "ANT"),
            RegionStatus::Unvisited
        );
        assert_eq!(
            classify_region(&visited, &catalog, "BOY"),
            RegionStatus::Unvisited
        );
    }

    #[test]
    fn region_unknown_to_the_catalog_is_unvisited() {
        let catalog = catalog(&[("ANT", 2)]);
        // An orphaned key, e.g. left over from a region deleted from
        // the catalog, must not read as a trivially completed region.
        let orphaned = VisitedState::from_value(&serde_json::json!({ "XXX": [] }));
        assert_eq!(
            classify_region(&orphaned, &catalog, "XXX"),
            RegionStatus::Unvisited
        );
    }

    #[test]
    fn acknowledged_empty_region_is_completed() {
        let catalog = catalog(&[("BOY", 0)]);
        let visited = VisitedState::empty().toggle_region_acknowledged("BOY");
        assert_eq!(
            classify_region(&visited, &catalog, "BOY"),
            RegionStatus::Completed
        );
    }

    #[test]
    fn partial_covers_empty_through_almost_full() {
        let catalog = catalog(&[("ANT", 3)]);
        let acknowledged = VisitedState::from_value(&serde_json::json!({ "ANT": [] }));
        assert_eq!(
            classify_region(&acknowledged, &catalog, "ANT"),
            RegionStatus::Partial
        );

        let two_of_three = VisitedState::empty()
            .toggle_attraction("ANT", "ant-0")
            .toggle_attraction("ANT", "ant-2");
        assert_eq!(
            classify_region(&two_of_three, &catalog, "ANT"),
            RegionStatus::Partial
        );
    }

    #[test]
    fn full_region_is_completed() {
        let catalog = catalog(&[("ANT", 2)]);
        let visited = VisitedState::empty()
            .toggle_attraction("ANT", "ant-0")
            .toggle_attraction("ANT", "ant-1");
        assert_eq!(
            classify_region(&visited, &catalog, "ANT"),
            RegionStatus::Completed
        );
    }

    #[test]
    fn tallies_always_sum_to_region_count() {
        let catalog = catalog(&[("ANT", 2), ("BOY", 0), ("CUN", 3), ("MAG", 1)]);
        let visited = VisitedState::empty()
            .toggle_attraction("ANT", "ant-0")
            .toggle_region_acknowledged("BOY")
            .toggle_attraction("MAG", "mag-0");
        let snapshot = aggregate(&visited, &catalog);
        assert_eq!(snapshot.total_regions(), 4);
        assert_eq!(snapshot.completed_regions, 2);
        assert_eq!(snapshot.partial_regions, 1);
        assert_eq!(snapshot.unvisited_regions, 1);
        assert_eq!(snapshot.visited_regions(), 3);
    }

    #[test]
    fn percent_rounds_half_up() {
        // 1 completed of 8 regions = 12.5% -> 13
        let catalog = catalog(&[
            ("A", 1),
            ("B", 1),
            ("C", 1),
            ("D", 1),
            ("E", 1),
            ("F", 1),
            ("G", 1),
            ("H", 1),
        ]);
        let visited = VisitedState::empty().toggle_attraction("A", "a-0");
        assert_eq!(aggregate(&visited, &catalog).progress_percent, 13);
    }

    #[test]
    fn empty_catalog_reports_zero_percent() {
        let snapshot = aggregate(&VisitedState::empty(), &Catalog::empty());
        assert_eq!(snapshot.progress_percent, 0);
        assert_eq!(snapshot.total_regions(), 0);
    }

    #[test]
    fn fully_completed_map_reports_one_hundred() {
        let catalog = catalog(&[("ANT", 1), ("BOY", 0)]);
        let visited = VisitedState::empty()
            .toggle_attraction("ANT", "ant-0")
            .toggle_region_acknowledged("BOY");
        assert_eq!(aggregate(&visited, &catalog).progress_percent, 100);
    }
}
