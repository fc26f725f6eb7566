mod common;

use common::{seeded_store, ymd};
use judge_lookup::{ImportLookup, LookupSettings};

fn ids(people: &[judge_lookup::domain::model::Person]) -> Vec<i64> {
    people.iter().map(|p| p.id).collect()
}

/// Stands in for the external name splitter: "A, B and C" -> ["A", "B", "C"].
fn split_names(judge_str: &str) -> Vec<String> {
    judge_str
        .split(',')
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("per curiam"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_scotus_panel_on_date() {
    let lookup = ImportLookup::new(seeded_store());

    assert_eq!(ids(&lookup.get_scotus_judges(ymd(1820, 1, 1)).unwrap()), vec![1, 2]);
    assert_eq!(ids(&lookup.get_scotus_judges(ymd(1935, 1, 1)).unwrap()), vec![7, 9]);
    assert_eq!(ids(&lookup.get_scotus_judges(ymd(2006, 1, 30)).unwrap()), vec![5, 6]);
}

#[test]
fn test_scotus_excludes_end_on_the_date() {
    let lookup = ImportLookup::new(seeded_store());

    // Marshall's termination and death fall on this date
    assert_eq!(ids(&lookup.get_scotus_judges(ymd(1835, 7, 6)).unwrap()), vec![2]);
    // O'Connor retired this day
    assert_eq!(ids(&lookup.get_scotus_judges(ymd(2006, 1, 31)).unwrap()), vec![6]);
}

#[test]
fn test_scotus_excludes_deceased_with_open_position() {
    let lookup = ImportLookup::new(seeded_store());

    // Cardozo's position has no end date but he died in 1938
    assert_eq!(ids(&lookup.get_scotus_judges(ymd(1940, 1, 1)).unwrap()), vec![7]);
}

#[test]
fn test_scotus_requires_start_before_date() {
    let lookup = ImportLookup::new(seeded_store());

    assert!(lookup.get_scotus_judges(ymd(1981, 9, 25)).unwrap().is_empty());
}

#[test]
fn test_sitting_judges_on_configured_court() {
    let settings = LookupSettings {
        supreme_court_id: "ca2".to_string(),
        ..LookupSettings::default()
    };
    let lookup = ImportLookup::with_settings(seeded_store(), settings);

    assert_eq!(ids(&lookup.get_scotus_judges(ymd(1930, 1, 1)).unwrap()), vec![3, 4]);
}

#[test]
fn test_candidate_judges_empty_string_is_none() {
    let lookup = ImportLookup::new(seeded_store());

    let result = lookup
        .get_candidate_judges(&split_names, "", "scotus", Some(ymd(1820, 1, 1)))
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_candidate_judges_unparseable_is_empty() {
    let lookup = ImportLookup::new(seeded_store());

    let result = lookup
        .get_candidate_judges(&split_names, "PER CURIAM", "scotus", Some(ymd(1820, 1, 1)))
        .unwrap();
    assert_eq!(result, Some(Vec::new()));
}

#[test]
fn test_candidate_judges_resolves_each_name() {
    let lookup = ImportLookup::new(seeded_store());

    let judges = lookup
        .get_candidate_judges(
            &split_names,
            "Marshall, Story and Taney",
            "scotus",
            Some(ymd(1820, 1, 1)),
        )
        .unwrap()
        .unwrap();

    assert_eq!(ids(&judges), vec![1, 2]);
}

#[test]
fn test_candidate_judges_drops_ambiguous_names() {
    let lookup = ImportLookup::new(seeded_store());

    // Without a date both Hands on ca2 match and neither is returned
    let judges = lookup
        .get_candidate_judges(&split_names, "Hand", "ca2", None)
        .unwrap()
        .unwrap();
    assert!(judges.is_empty());

    let judges = lookup
        .get_candidate_judges(&split_names, "Hand", "ca2", Some(ymd(1925, 6, 1)))
        .unwrap()
        .unwrap();
    assert_eq!(ids(&judges), vec![3]);
}
