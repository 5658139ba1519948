//! Query and lookup tests.

use crate::common::*;

fn names(animals: &[Animal]) -> Vec<&str> {
    animals.iter().map(|a| a.name.as_str()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn empty_criteria_returns_collection_unchanged() {
    let t = TestStore::new();
    assert_eq!(t.store.query(&Criteria::new()), zoo());
}

#[test]
fn every_requested_trait_must_be_present() {
    let t = TestStore::new();
    let hits = t
        .store
        .query(&Criteria::new().with_traits(["brave", "loyal"]));
    assert_eq!(names(&hits), vec!["Mo"]);
}

#[test]
fn diet_and_trait_combine() {
    let t = TestStore::new();
    let hits = t
        .store
        .query(&Criteria::new().with_diet("herbivore").with_trait("curious"));
    assert_eq!(names(&hits), vec!["Jameson", "Mo"]);
}

#[test]
fn criteria_from_json_object() {
    let t = TestStore::new();
    let criteria: Criteria = serde_json::from_value(json!({
        "species": "bear",
        "personalityTraits": "brave",
        "unknown": 1
    }))
    .unwrap();
    assert_eq!(names(&t.store.query(&criteria)), vec!["Noel"]);
}

#[test]
fn free_function_filter_matches_store_query() {
    let records = zoo();
    let criteria = Criteria::new().with_species("bear");
    let direct: Vec<Animal> = filter(&criteria, &records).into_iter().cloned().collect();

    let t = TestStore::new();
    assert_eq!(direct, t.store.query(&criteria));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn lookup_by_id() {
    let t = TestStore::new();
    assert_eq!(t.store.get("2").unwrap().name, "Jameson");
    assert!(t.store.get("20").is_none());
}

#[test]
fn lookup_is_exact_string_match() {
    let records = zoo();
    assert!(find_by_id("02", &records).is_none());
    assert!(find_by_id(" 2", &records).is_none());
    assert!(find_by_id("2", &[]).is_none());
}
