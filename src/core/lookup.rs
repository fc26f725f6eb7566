use crate::core::judges::{self, PersonQuery};
use crate::core::reports;
use crate::core::settings::LookupSettings;
use crate::domain::model::{CourtDates, PathSet, Person};
use crate::domain::ports::{NameParser, RecordStore};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// A records store bound to the settings every lookup shares.
pub struct ImportLookup<S: RecordStore> {
    store: S,
    settings: LookupSettings,
}

impl<S: RecordStore> ImportLookup<S> {
    pub fn new(store: S) -> Self {
        Self::with_settings(store, LookupSettings::default())
    }

    pub fn with_settings(store: S, settings: LookupSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    pub fn find_person(&self, query: &PersonQuery) -> Result<Option<Person>> {
        judges::find_person(&self.store, &self.settings, query)
    }

    pub fn get_candidate_judges<P: NameParser>(
        &self,
        parser: &P,
        judge_str: &str,
        court_id: &str,
        event_date: Option<NaiveDate>,
    ) -> Result<Option<Vec<Person>>> {
        judges::get_candidate_judges(
            &self.store,
            &self.settings,
            parser,
            judge_str,
            court_id,
            event_date,
        )
    }

    pub fn get_scotus_judges(&self, date: NaiveDate) -> Result<Vec<Person>> {
        judges::get_scotus_judges(&self.store, &self.settings, date)
    }

    pub fn get_min_dates(&self) -> Result<CourtDates> {
        reports::get_min_dates(&self.store, &self.settings)
    }

    pub fn get_min_nocite(&self) -> Result<CourtDates> {
        reports::get_min_nocite(&self.store)
    }

    pub fn get_courtdates(&self) -> Result<CourtDates> {
        reports::get_courtdates(&self.store)
    }

    pub fn get_path_list(&self) -> Result<PathSet> {
        reports::get_path_list(&self.store)
    }
}
