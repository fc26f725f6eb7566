use crate::domain::filters::PersonFilter;
use crate::domain::model::{CourtDates, PathSet, Person};
use crate::utils::error::Result;

/// Read-only queries over the records database.
pub trait RecordStore {
    /// Distinct people matching every filter, ordered by id, positions loaded.
    fn filter_people(&self, filters: &[PersonFilter]) -> Result<Vec<Person>>;

    /// Earliest filing date per court, skipping courts that have any cluster
    /// whose source contains `excluded_source`. An empty tag excludes nothing.
    fn min_filed_dates(&self, excluded_source: &str) -> Result<CourtDates>;

    /// Earliest filing date among clusters without citations, per court.
    /// Courts without any cases map to `None`.
    fn min_uncited_dates(&self) -> Result<CourtDates>;

    /// Founding date of every court.
    fn court_start_dates(&self) -> Result<CourtDates>;

    /// Non-empty `local_path` values recorded on opinions.
    fn opinion_paths(&self) -> Result<PathSet>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn filter_people(&self, filters: &[PersonFilter]) -> Result<Vec<Person>> {
        (**self).filter_people(filters)
    }

    fn min_filed_dates(&self, excluded_source: &str) -> Result<CourtDates> {
        (**self).min_filed_dates(excluded_source)
    }

    fn min_uncited_dates(&self) -> Result<CourtDates> {
        (**self).min_uncited_dates()
    }

    fn court_start_dates(&self) -> Result<CourtDates> {
        (**self).court_start_dates()
    }

    fn opinion_paths(&self) -> Result<PathSet> {
        (**self).opinion_paths()
    }
}

/// Splits a free-text judge string ("Smith, Jones and Doe, JJ.") into
/// candidate last names, in order.
pub trait NameParser {
    fn judge_names(&self, judge_str: &str) -> Vec<String>;
}

impl<F> NameParser for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn judge_names(&self, judge_str: &str) -> Vec<String> {
        self(judge_str)
    }
}

pub trait ConfigProvider {
    fn database_path(&self) -> Option<&str>;
    fn supreme_court_id(&self) -> &str;
    fn excluded_source(&self) -> &str;
    fn date_window_years(&self) -> u32;
}
