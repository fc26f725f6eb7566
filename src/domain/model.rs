use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name_first: String,
    pub name_last: String,
    pub date_dod: Option<NaiveDate>,
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// A tenure on one court. Null bounds mean the tenure is open on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub person_id: i64,
    pub court_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_termination: Option<NaiveDate>,
    pub date_retirement: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docket {
    pub id: i64,
    pub court_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: i64,
    pub docket_id: i64,
    pub date_filed: Option<NaiveDate>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    pub id: i64,
    pub cluster_id: i64,
    pub local_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: i64,
    pub cluster_id: i64,
}

/// Court id → date. Ordered so reports render deterministically.
pub type CourtDates = BTreeMap<String, Option<NaiveDate>>;

/// Previously imported opinion paths.
pub type PathSet = BTreeSet<String>;
