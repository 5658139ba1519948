//! Creation tests.

use crate::common::*;

#[test]
fn create_assigns_next_index_and_appends() {
    let t = TestStore::new();
    let created = t.store.create(rex()).unwrap();

    assert_eq!(created.id, "5");
    assert_eq!(t.store.len(), 6);

    let mut expected = rex();
    expected["id"] = json!("5");
    assert_eq!(serde_json::to_value(t.store.all().last().unwrap()).unwrap(), expected);
}

#[test]
fn sequential_creates_get_dense_ids() {
    let store = RecordStore::ephemeral().unwrap();
    let ids: Vec<String> = (0..3).map(|_| store.create(rex()).unwrap().id).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn create_keeps_extra_fields() {
    let t = TestStore::new();
    let mut candidate = rex();
    candidate["favoriteFood"] = json!("bones");

    let created = t.store.create(candidate).unwrap();
    assert_eq!(created.extra.get("favoriteFood"), Some(&json!("bones")));
    assert_eq!(
        t.on_disk().last().unwrap().extra.get("favoriteFood"),
        Some(&json!("bones"))
    );
}

#[test]
fn every_valid_candidate_is_created() {
    let t = TestStore::new();
    let mut candidate = rex();
    candidate["personalityTraits"] = json!([1, null]);
    assert!(validate(&candidate));

    let created = t.store.create(candidate).unwrap();
    assert_eq!(created.id, "5");
    assert_eq!(created.personality_traits, vec![json!(1), json!(null)]);
    assert_eq!(t.on_disk().last(), Some(&created));
    assert_eq!(t.reopen().get("5"), Some(created));
}

#[test]
fn invalid_candidates_change_nothing() {
    let t = TestStore::new();
    let before = t.store.all();

    let mut missing_diet = rex();
    missing_diet.as_object_mut().unwrap().remove("diet");
    let mut string_traits = rex();
    string_traits["personalityTraits"] = json!("loyal");
    let mut empty_name = rex();
    empty_name["name"] = json!("");

    for candidate in [missing_diet, string_traits, empty_name, json!(null)] {
        let err = t.store.create(candidate).unwrap_err();
        assert!(err.is_validation(), "unexpected error: {err}");
    }

    assert_eq!(t.store.all(), before);
    assert_eq!(t.on_disk(), before);
}

#[test]
fn validate_truth_table() {
    assert!(validate(&rex()));
    for key in ["name", "species", "diet", "personalityTraits"] {
        let mut candidate = rex();
        candidate.as_object_mut().unwrap().remove(key);
        assert!(!validate(&candidate), "accepted without {key}");
    }
}
