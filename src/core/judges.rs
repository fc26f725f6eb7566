use crate::core::settings::LookupSettings;
use crate::domain::filters::{self, PersonFilter};
use crate::domain::model::Person;
use crate::domain::ports::{NameParser, RecordStore};
use crate::utils::error::{LookupError, Result};
use chrono::NaiveDate;

/// What is known about a judge when trying to pin down a single person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    pub name_last: String,
    pub court_id: String,
    pub name_first: Option<String>,
    pub case_date: Option<NaiveDate>,
    /// Fail with `AmbiguousJudge` instead of returning `None` when several people remain.
    pub raise_mult: bool,
    /// Fail with `NoMatchingJudge` instead of returning `None` when nobody matches.
    pub raise_zero: bool,
}

impl PersonQuery {
    pub fn new(name_last: impl Into<String>, court_id: impl Into<String>) -> Self {
        Self {
            name_last: name_last.into(),
            court_id: court_id.into(),
            name_first: None,
            case_date: None,
            raise_mult: false,
            raise_zero: false,
        }
    }

    pub fn with_first_name(mut self, name_first: impl Into<String>) -> Self {
        self.name_first = Some(name_first.into());
        self
    }

    pub fn with_case_date(mut self, case_date: Option<NaiveDate>) -> Self {
        self.case_date = case_date;
        self
    }

    pub fn raise_mult(mut self, raise: bool) -> Self {
        self.raise_mult = raise;
        self
    }

    pub fn raise_zero(mut self, raise: bool) -> Self {
        self.raise_zero = raise;
        self
    }
}

/// Filter groups applied cumulatively: name and court, then the tenure window
/// around the case date, then the first name.
pub fn filter_stages(query: &PersonQuery, date_window_years: u32) -> Vec<Vec<PersonFilter>> {
    let mut stages = vec![vec![
        PersonFilter::LastName(query.name_last.clone()),
        PersonFilter::Court(query.court_id.clone()),
    ]];

    if let Some(case_date) = query.case_date {
        stages.push(filters::active_around(case_date, date_window_years));
    }

    if let Some(name_first) = &query.name_first {
        stages.push(vec![PersonFilter::FirstName(name_first.clone())]);
    }

    stages
}

/// Uniquely identifies a judge by name and metadata.
///
/// Returns as soon as a stage narrows the candidates to one person. Zero matches
/// and leftover ambiguity return `None` unless the query asks to raise.
pub fn find_person<S: RecordStore>(
    store: &S,
    settings: &LookupSettings,
    query: &PersonQuery,
) -> Result<Option<Person>> {
    let mut applied: Vec<PersonFilter> = Vec::new();
    let mut candidates: Vec<Person> = Vec::new();

    for (stage, stage_filters) in filter_stages(query, settings.date_window_years)
        .into_iter()
        .enumerate()
    {
        applied.extend(stage_filters);
        candidates = store.filter_people(&applied)?;

        tracing::debug!(
            "find_person stage {} for '{}' in {}: {} candidate(s)",
            stage + 1,
            query.name_last,
            query.court_id,
            candidates.len()
        );

        match candidates.len() {
            0 => {
                tracing::warn!(
                    "Unable to find judge with lname {} in court {}",
                    query.name_last,
                    query.court_id
                );
                if query.raise_zero {
                    return Err(LookupError::NoMatchingJudge {
                        name_last: query.name_last.clone(),
                        court_id: query.court_id.clone(),
                    });
                }
                return Ok(None);
            }
            1 => return Ok(candidates.pop()),
            _ => {}
        }
    }

    if query.raise_mult {
        return Err(LookupError::AmbiguousJudge {
            name_last: query.name_last.clone(),
            court_id: query.court_id.clone(),
            options: candidates.into_iter().map(|c| c.name_first).collect(),
        });
    }

    tracing::debug!(
        "'{}' in {} is still ambiguous after all filters",
        query.name_last,
        query.court_id
    );
    Ok(None)
}

/// Resolves every name the parser finds in `judge_str`, keeping the ones that
/// identify exactly one person.
///
/// `None` for an empty string, an empty list when the parser finds no names.
pub fn get_candidate_judges<S: RecordStore, P: NameParser>(
    store: &S,
    settings: &LookupSettings,
    parser: &P,
    judge_str: &str,
    court_id: &str,
    event_date: Option<NaiveDate>,
) -> Result<Option<Vec<Person>>> {
    if judge_str.is_empty() {
        return Ok(None);
    }

    let names = parser.judge_names(judge_str);
    if names.is_empty() {
        tracing::debug!("No judge names found in '{}'", judge_str);
        return Ok(Some(Vec::new()));
    }

    let mut judges = Vec::with_capacity(names.len());
    for name in names {
        let query = PersonQuery::new(name, court_id).with_case_date(event_date);
        if let Some(person) = find_person(store, settings, &query)? {
            judges.push(person);
        }
    }

    Ok(Some(judges))
}

/// The supreme court panel sitting on `date`.
pub fn get_scotus_judges<S: RecordStore>(
    store: &S,
    settings: &LookupSettings,
    date: NaiveDate,
) -> Result<Vec<Person>> {
    store.filter_people(&filters::sitting_on(&settings.supreme_court_id, date))
}
