use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUPREME_COURT_ID: &str = "scotus";
pub const DEFAULT_EXCLUDED_SOURCE: &str = "Z";
pub const DEFAULT_DATE_WINDOW_YEARS: u32 = 1;

/// Knobs shared by the lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSettings {
    pub supreme_court_id: String,
    /// Clusters whose source contains this tag disqualify their court from min-date reports.
    /// Empty means no court is excluded.
    pub excluded_source: String,
    /// Half-width of the tenure window used when a case date is known.
    pub date_window_years: u32,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            supreme_court_id: DEFAULT_SUPREME_COURT_ID.to_string(),
            excluded_source: DEFAULT_EXCLUDED_SOURCE.to_string(),
            date_window_years: DEFAULT_DATE_WINDOW_YEARS,
        }
    }
}

impl LookupSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            supreme_court_id: config.supreme_court_id().to_string(),
            excluded_source: config.excluded_source().to_string(),
            date_window_years: config.date_window_years(),
        }
    }
}
