//! Structural properties of reconciliation and the mutators, checked
//! over a grid of generated visited states rather than hand-picked
//! cases.

use wayfarer_core::{Attraction, Catalog, VisitedState, aggregate, reconcile};

fn catalog() -> Catalog {
    let mut attractions = Vec::new();
    for (region_id, count) in [("ANT", 3), ("CUN", 2), ("MAG", 1)] {
        for n in 0..count {
            attractions.push(Attraction {
                id: format!("{}-{n}", region_id.to_lowercase()),
                name: format!("{region_id} {n}"),
                description: String::new(),
                image: String::new(),
                category: String::new(),
                region_id: region_id.to_string(),
            });
        }
    }
    let names = [
        ("ANT".to_string(), "Antioquia".to_string()),
        ("BOY".to_string(), "Boyacá".to_string()),
        ("CUN".to_string(), "Cundinamarca".to_string()),
        ("MAG".to_string(), "Magdalena".to_string()),
    ];
    Catalog::from_attractions(names, attractions)
}

/// A spread of raw states: clean, duplicated, dangling, malformed, and
/// referencing regions the catalog has never heard of.
fn raw_states() -> Vec<VisitedState> {
    [
        serde_json::json!({}),
        serde_json::json!({ "ANT": ["ant-0"] }),
        serde_json::json!({ "ANT": ["ant-0", "ant-0", "ant-2"], "BOY": [] }),
        serde_json::json!({ "ANT": ["nope", "ant-1", "nope"], "CUN": ["cun-1", "cun-0"] }),
        serde_json::json!({ "XXX": ["ghost"], "MAG": ["mag-0", "mag-0"] }),
        serde_json::json!({ "ANT": "corrupted", "CUN": [1, "cun-0", null] }),
        serde_json::json!({ "ANT": ["ant-0", "ant-1", "ant-2"], "BOY": [], "CUN": ["cun-0", "cun-1"], "MAG": ["mag-0"] }),
    ]
    .iter()
    .map(VisitedState::from_value)
    .collect()
}

#[test]
fn reconcile_is_idempotent_for_every_state() {
    let catalog = catalog();
    for raw in raw_states() {
        let once = reconcile(&raw, &catalog);
        assert_eq!(reconcile(&once, &catalog), once, "raw state: {raw:?}");
    }
}

#[test]
fn reconciled_ids_always_exist_in_the_catalog() {
    let catalog = catalog();
    for raw in raw_states() {
        let cleaned = reconcile(&raw, &catalog);
        for (region_id, ids) in cleaned.iter() {
            for id in ids {
                assert!(
                    catalog.has_attraction(region_id, id),
                    "{id} not in {region_id}"
                );
            }
        }
    }
}

#[test]
fn reconciled_lists_never_contain_duplicates() {
    let catalog = catalog();
    for raw in raw_states() {
        let cleaned = reconcile(&raw, &catalog);
        for (region_id, ids) in cleaned.iter() {
            let mut sorted: Vec<_> = ids.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), ids.len(), "duplicates in {region_id}");
        }
    }
}

#[test]
fn reconcile_preserves_the_key_set() {
    let catalog = catalog();
    for raw in raw_states() {
        let cleaned = reconcile(&raw, &catalog);
        let raw_keys: Vec<_> = raw.iter().map(|(id, _)| id.clone()).collect();
        let cleaned_keys: Vec<_> = cleaned.iter().map(|(id, _)| id.clone()).collect();
        assert_eq!(cleaned_keys, raw_keys);
    }
}

#[test]
fn aggregate_tallies_sum_to_catalog_size_for_every_state() {
    let catalog = catalog();
    for raw in raw_states() {
        let snapshot = aggregate(&reconcile(&raw, &catalog), &catalog);
        assert_eq!(snapshot.total_regions(), catalog.len());
        assert!(snapshot.progress_percent <= 100);
    }
}

#[test]
fn toggle_round_trip_restores_the_original_state() {
    let catalog = catalog();
    for raw in raw_states() {
        let base = reconcile(&raw, &catalog);
        if base.is_visited("CUN", "cun-1") {
            continue;
        }
        let round_tripped = base
            .toggle_attraction("CUN", "cun-1")
            .toggle_attraction("CUN", "cun-1");
        assert_eq!(round_tripped, base);
    }
}
