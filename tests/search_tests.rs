//! Behavioural tests for the search index over the hospital categories.

use medisearch::models::{FieldValue, Record};
use medisearch::provider::hospital_categories;
use medisearch::provider::seed::seed_records;
use medisearch::search::{Filters, SearchError, SearchIndex};

fn seeded_index() -> SearchIndex {
    let mut index = SearchIndex::new(hospital_categories()).expect("valid categories");
    let names: Vec<String> = index.categories().map(ToString::to_string).collect();
    for name in names {
        index
            .replace_records(&name, seed_records(&name))
            .expect("seed records are valid");
    }
    index
}

fn two_patient_index() -> SearchIndex {
    let mut index = SearchIndex::new(hospital_categories()).unwrap();
    index
        .replace_records(
            "patients",
            vec![
                Record::new()
                    .with("id", 1)
                    .with("name", "John Doe")
                    .with("status", "Admitted")
                    .with("ward", "Cardiology"),
                Record::new()
                    .with("id", 2)
                    .with("name", "Jane Smith")
                    .with("status", "Discharged")
                    .with("ward", "Orthopedics"),
            ],
        )
        .unwrap();
    index
}

fn filters(pairs: &[(&str, &str)]) -> Filters {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn end_to_end_example() {
    let mut index = two_patient_index();

    let results = index.search_global("doe");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "John Doe");
    assert_eq!(results[0].kind, "patient");
    assert_eq!(results[0].subtitle, "Patient ID: 1 | Admitted");
    assert_eq!(results[0].link, "/patients/1");

    let discharged = index
        .search_category("patients", "", &filters(&[("status", "Discharged")]))
        .unwrap();
    assert_eq!(discharged.len(), 1);
    assert_eq!(discharged[0].id(), Some(&FieldValue::Integer(2)));
}

#[test]
fn every_field_substring_is_found_globally() {
    let mut index = seeded_index();

    let records: Vec<(String, Record)> = hospital_categories()
        .into_iter()
        .flat_map(|spec| {
            seed_records(&spec.name)
                .into_iter()
                .map(move |r| (spec.kind.clone(), r))
        })
        .collect();

    for (kind, record) in records {
        for (_, value) in record.iter() {
            let Some(text) = value.canonical() else {
                continue;
            };
            let needle: String = text.chars().take(4).collect::<String>().to_uppercase();
            let results = index.search_global(&needle);
            assert!(
                results.iter().any(|r| r.kind == kind && r.record == record),
                "'{needle}' did not find {kind} {:?}",
                record.id()
            );
        }
    }
}

#[test]
fn blank_global_query_returns_nothing_and_keeps_history() {
    let mut index = seeded_index();
    index.search_global("amox");

    assert!(index.search_global("").is_empty());
    assert!(index.search_global("  \t ").is_empty());
    assert_eq!(index.history(), vec!["amox"]);
}

#[test]
fn blank_category_query_returns_everything() {
    let index = seeded_index();
    let all = index
        .search_category("medications", "", &Filters::new())
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn global_results_follow_declared_category_order() {
    let mut index = seeded_index();
    // Every seeded category has at least one value containing "o"
    let results = index.search_global("o");
    let kinds: Vec<&str> = results.iter().map(|r| r.kind.as_str()).collect();

    let mut seen = kinds.clone();
    seen.dedup();
    assert_eq!(seen, vec!["patient", "medication", "resource", "staff"]);

    let patient_ids: Vec<_> = results
        .iter()
        .filter(|r| r.kind == "patient")
        .map(|r| r.record.id().cloned())
        .collect();
    assert_eq!(
        patient_ids,
        vec![Some(FieldValue::Integer(1)), Some(FieldValue::Integer(2))]
    );
}

#[test]
fn history_moves_reissued_term_to_front() {
    let mut index = seeded_index();
    index.search_global("a");
    index.search_global("b");
    index.search_global("a");

    assert_eq!(index.history(), vec!["a", "b"]);
}

#[test]
fn history_evicts_oldest_after_five() {
    let mut index = seeded_index();
    for term in ["john", "jane", "mri", "ct", "sarah", "michael"] {
        index.search_global(term);
    }

    let history = index.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], "michael");
    assert!(!history.contains(&"john".to_string()));
}

#[test]
fn history_records_queries_without_matches() {
    let mut index = seeded_index();
    assert!(index.search_global("zzz").is_empty());
    assert_eq!(index.history(), vec!["zzz"]);
}

#[test]
fn category_search_never_touches_history() {
    let index = seeded_index();
    index
        .search_category("staff", "cardio", &Filters::new())
        .unwrap();
    assert!(index.history().is_empty());
}

#[test]
fn manual_history_and_clear() {
    let mut index = seeded_index();
    index.record_history("ward 4");
    index.record_history("   ");
    assert_eq!(index.history(), vec!["ward 4"]);

    index.clear_history();
    assert!(index.history().is_empty());
}

#[test]
fn filter_values_are_distinct_in_first_seen_order() {
    let mut index = SearchIndex::new(hospital_categories()).unwrap();
    index
        .replace_records(
            "patients",
            ["Admitted", "Discharged", "Admitted"]
                .iter()
                .enumerate()
                .map(|(i, status)| {
                    Record::new()
                        .with("id", i64::try_from(i).unwrap())
                        .with("status", *status)
                })
                .collect(),
        )
        .unwrap();

    let values = index.filter_values("patients", "status").unwrap();
    assert_eq!(
        values,
        vec![FieldValue::from("Admitted"), FieldValue::from("Discharged")]
    );
}

#[test]
fn filter_fields_per_category() {
    let index = seeded_index();
    assert_eq!(
        index.filter_fields("patients").unwrap(),
        ["status", "ward", "gender"]
    );
    assert_eq!(
        index.filter_fields("staff").unwrap(),
        ["role", "department", "status"]
    );
}

#[test]
fn unknown_category_is_rejected() {
    let mut index = seeded_index();

    assert_eq!(
        index
            .search_category("bogus", "x", &Filters::new())
            .unwrap_err(),
        SearchError::UnknownCategory("bogus".to_string())
    );
    assert!(matches!(
        index.filter_fields("bogus"),
        Err(SearchError::UnknownCategory(_))
    ));
    assert!(matches!(
        index.filter_values("bogus", "status"),
        Err(SearchError::UnknownCategory(_))
    ));
    assert!(matches!(
        index.replace_records("bogus", Vec::new()),
        Err(SearchError::UnknownCategory(_))
    ));
}

#[test]
fn filters_are_a_conjunction() {
    let mut index = SearchIndex::new(hospital_categories()).unwrap();
    index
        .replace_records(
            "patients",
            vec![
                Record::new()
                    .with("id", 1)
                    .with("status", "Admitted")
                    .with("ward", "Cardiology"),
                Record::new()
                    .with("id", 2)
                    .with("status", "Admitted")
                    .with("ward", "Orthopedics"),
                Record::new()
                    .with("id", 3)
                    .with("status", "Discharged")
                    .with("ward", "Cardiology"),
            ],
        )
        .unwrap();

    let both = index
        .search_category(
            "patients",
            "",
            &filters(&[("status", "Admitted"), ("ward", "Cardiology")]),
        )
        .unwrap();

    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id(), Some(&FieldValue::Integer(1)));
}

#[test]
fn empty_filter_values_are_ignored() {
    let index = two_patient_index();
    let results = index
        .search_category("patients", "", &filters(&[("status", ""), ("ward", "")]))
        .unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn query_and_filters_combine() {
    let index = seeded_index();
    let results = index
        .search_category("medications", "TABLETS", &filters(&[("status", "Low Stock")]))
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_value("name"), "Ibuprofen");
}

#[test]
fn numeric_fields_match_and_filter_by_canonical_form() {
    let mut index = seeded_index();
    let results = index.search_global("1000");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Ibuprofen");

    let filtered = index
        .search_category("medications", "", &filters(&[("quantity", "500")]))
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].display_value("name"), "Amoxicillin");
}
