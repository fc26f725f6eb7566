#![allow(dead_code)]

use chrono::NaiveDate;
use judge_lookup::domain::model::{Citation, Cluster, Court, Docket, Opinion, Person, Position};
use judge_lookup::SqliteStore;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct Tenure {
    pub court: &'static str,
    pub start: Option<NaiveDate>,
    pub termination: Option<NaiveDate>,
    pub retirement: Option<NaiveDate>,
}

pub fn tenure(
    court: &'static str,
    start: Option<NaiveDate>,
    termination: Option<NaiveDate>,
    retirement: Option<NaiveDate>,
) -> Tenure {
    Tenure {
        court,
        start,
        termination,
        retirement,
    }
}

pub fn add_person(
    store: &SqliteStore,
    id: i64,
    first: &str,
    last: &str,
    date_dod: Option<NaiveDate>,
    tenures: Vec<Tenure>,
) {
    let positions = tenures
        .into_iter()
        .enumerate()
        .map(|(i, t)| Position {
            id: id * 100 + i as i64,
            person_id: id,
            court_id: Some(t.court.to_string()),
            date_start: t.start,
            date_termination: t.termination,
            date_retirement: t.retirement,
        })
        .collect();

    store
        .insert_person(&Person {
            id,
            name_first: first.to_string(),
            name_last: last.to_string(),
            date_dod,
            positions,
        })
        .unwrap();
}

/// Courts, judges and a handful of cases:
///
/// | id | judge              | court  | tenure                       | died       |
/// |----|--------------------|--------|------------------------------|------------|
/// | 1  | John Marshall      | scotus | 1801-02-04 .. 1835-07-06 (T) | 1835-07-06 |
/// | 2  | Joseph Story       | scotus | 1812-02-03 .. 1845-09-10 (T) | 1845-09-10 |
/// | 3  | Learned Hand       | ca2    | 1924-12-20 .. open (R 1951)  | 1961-08-18 |
/// | 4  | Augustus Hand      | ca2    | 1927-06-01 .. 1954-10-28 (T) | 1954-10-28 |
/// | 5  | Sandra O'Connor    | scotus | 1981-09-25 .. 2006-01-31 (T,R)| 2023-12-01|
/// | 6  | John Roberts       | scotus | 2005-09-29 .. open           |            |
/// | 7  | Owen Roberts       | scotus | 1930-06-02 .. 1945-07-31 (T,R)| 1955-05-17|
/// | 8  | Brevard Hand       | alsd   | 1971-11-01 .. open           | 2008-12-02 |
/// | 9  | Benjamin Cardozo   | scotus | 1932-03-14 .. open           | 1938-07-09 |
pub fn seeded_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().expect("in-memory db");
    store.create_schema().expect("schema");

    for (id, start) in [
        ("scotus", Some(ymd(1789, 9, 24))),
        ("ca2", Some(ymd(1891, 6, 16))),
        ("ala", Some(ymd(1819, 12, 14))),
        ("alsd", Some(ymd(1824, 3, 10))),
        ("nyappdiv", None),
    ] {
        store
            .insert_court(&Court {
                id: id.to_string(),
                start_date: start,
            })
            .unwrap();
    }

    add_person(
        &store,
        1,
        "John",
        "Marshall",
        Some(ymd(1835, 7, 6)),
        vec![tenure("scotus", Some(ymd(1801, 2, 4)), Some(ymd(1835, 7, 6)), None)],
    );
    add_person(
        &store,
        2,
        "Joseph",
        "Story",
        Some(ymd(1845, 9, 10)),
        vec![tenure("scotus", Some(ymd(1812, 2, 3)), Some(ymd(1845, 9, 10)), None)],
    );
    add_person(
        &store,
        3,
        "Learned",
        "Hand",
        Some(ymd(1961, 8, 18)),
        vec![tenure("ca2", Some(ymd(1924, 12, 20)), None, Some(ymd(1951, 6, 1)))],
    );
    add_person(
        &store,
        4,
        "Augustus",
        "Hand",
        Some(ymd(1954, 10, 28)),
        vec![tenure("ca2", Some(ymd(1927, 6, 1)), Some(ymd(1954, 10, 28)), None)],
    );
    add_person(
        &store,
        5,
        "Sandra",
        "O'Connor",
        Some(ymd(2023, 12, 1)),
        vec![tenure(
            "scotus",
            Some(ymd(1981, 9, 25)),
            Some(ymd(2006, 1, 31)),
            Some(ymd(2006, 1, 31)),
        )],
    );
    add_person(
        &store,
        6,
        "John",
        "Roberts",
        None,
        vec![tenure("scotus", Some(ymd(2005, 9, 29)), None, None)],
    );
    add_person(
        &store,
        7,
        "Owen",
        "Roberts",
        Some(ymd(1955, 5, 17)),
        vec![tenure(
            "scotus",
            Some(ymd(1930, 6, 2)),
            Some(ymd(1945, 7, 31)),
            Some(ymd(1945, 7, 31)),
        )],
    );
    add_person(
        &store,
        8,
        "Brevard",
        "Hand",
        Some(ymd(2008, 12, 2)),
        vec![tenure("alsd", Some(ymd(1971, 11, 1)), None, None)],
    );
    add_person(
        &store,
        9,
        "Benjamin",
        "Cardozo",
        Some(ymd(1938, 7, 9)),
        vec![tenure("scotus", Some(ymd(1932, 3, 14)), None, None)],
    );

    seed_cases(&store);
    store
}

/// Dockets, clusters, citations and opinions.
///
/// - scotus: 1803-02-24 (cited), 1819-03-06 (cited)
/// - ca2: 1925-01-01 with source "Z" (uncited)
/// - ala: 1850-01-01 (cited), 1840-05-05 (uncited), 1900-01-01 with source "z" (uncited)
/// - alsd, nyappdiv: no cases
fn seed_cases(store: &SqliteStore) {
    for (id, court) in [(1, "scotus"), (2, "ca2"), (3, "ala")] {
        store
            .insert_docket(&Docket {
                id,
                court_id: court.to_string(),
            })
            .unwrap();
    }

    let clusters = [
        (1, 1, ymd(1803, 2, 24), "C"),
        (2, 1, ymd(1819, 3, 6), "C"),
        (3, 2, ymd(1925, 1, 1), "Z"),
        (4, 3, ymd(1850, 1, 1), "CR"),
        (5, 3, ymd(1840, 5, 5), "R"),
        (6, 3, ymd(1900, 1, 1), "z"),
    ];
    for (id, docket_id, date_filed, source) in clusters {
        store
            .insert_cluster(&Cluster {
                id,
                docket_id,
                date_filed: Some(date_filed),
                source: source.to_string(),
            })
            .unwrap();
    }

    for (id, cluster_id) in [(1, 1), (2, 2), (3, 4)] {
        store.insert_citation(&Citation { id, cluster_id }).unwrap();
    }

    let opinions = [
        (1, 1, Some("/data/scotus/marbury.xml")),
        (2, 2, Some("")),
        (3, 3, None),
        (4, 4, Some("/data/ala/1850.xml")),
        (5, 5, Some("/data/ala/1850.xml")),
    ];
    for (id, cluster_id, local_path) in opinions {
        store
            .insert_opinion(&Opinion {
                id,
                cluster_id,
                local_path: local_path.map(str::to_string),
            })
            .unwrap();
    }
}
