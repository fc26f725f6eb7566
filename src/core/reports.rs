use crate::core::settings::LookupSettings;
use crate::domain::model::{CourtDates, PathSet};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;

/// Court id → earliest filing date, skipping courts with excluded-source clusters.
pub fn get_min_dates<S: RecordStore>(store: &S, settings: &LookupSettings) -> Result<CourtDates> {
    let dates = store.min_filed_dates(&settings.excluded_source)?;
    tracing::debug!(
        "Loaded earliest filing dates for {} courts (excluding source '{}')",
        dates.len(),
        settings.excluded_source
    );
    Ok(dates)
}

/// Court id → earliest filing date among cases with no citation.
pub fn get_min_nocite<S: RecordStore>(store: &S) -> Result<CourtDates> {
    let dates = store.min_uncited_dates()?;
    tracing::debug!("Loaded earliest uncited dates for {} courts", dates.len());
    Ok(dates)
}

/// Court id → founding date.
pub fn get_courtdates<S: RecordStore>(store: &S) -> Result<CourtDates> {
    store.court_start_dates()
}

/// Every local path already imported, so later batch runs can skip them.
pub fn get_path_list<S: RecordStore>(store: &S) -> Result<PathSet> {
    let mut paths = store.opinion_paths()?;
    // 空字串代表未匯入
    paths.remove("");
    tracing::debug!("{} previously imported paths", paths.len());
    Ok(paths)
}
