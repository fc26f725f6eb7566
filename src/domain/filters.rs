use chrono::{Months, NaiveDate};

/// A predicate over people and the positions they hold.
///
/// Within one query every position predicate applies to the same position row,
/// so `Court("ca9")` together with `StartedBefore { .. }` means "a ca9 tenure that
/// started before", not "some tenure on ca9 and some other tenure that started before".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    /// Case-insensitive exact match on the last name.
    LastName(String),
    /// Case-insensitive exact match on the first name.
    FirstName(String),
    /// Position held on the court.
    Court(String),
    /// Position started strictly before `date`; `or_unknown` also accepts a null start.
    StartedBefore { date: NaiveDate, or_unknown: bool },
    /// Position terminated strictly after `date`; `or_unknown` also accepts a null termination.
    TerminatedAfter { date: NaiveDate, or_unknown: bool },
    /// Position retired strictly after `date`; `or_unknown` also accepts a null retirement.
    RetiredAfter { date: NaiveDate, or_unknown: bool },
    /// Person has no recorded death on or before `date`.
    AliveOn(NaiveDate),
}

impl PersonFilter {
    pub fn is_position_filter(&self) -> bool {
        matches!(
            self,
            PersonFilter::Court(_)
                | PersonFilter::StartedBefore { .. }
                | PersonFilter::TerminatedAfter { .. }
                | PersonFilter::RetiredAfter { .. }
        )
    }
}

/// Tenure overlapping `[date - years, date + years]`, treating null bounds as open.
pub fn active_around(date: NaiveDate, years: u32) -> Vec<PersonFilter> {
    let window = Months::new(years.saturating_mul(12));
    // 月底對齊：2/29 加一年為 2/28
    let upper = date.checked_add_months(window).unwrap_or(NaiveDate::MAX);
    let lower = date.checked_sub_months(window).unwrap_or(NaiveDate::MIN);

    vec![
        PersonFilter::StartedBefore {
            date: upper,
            or_unknown: true,
        },
        PersonFilter::TerminatedAfter {
            date: lower,
            or_unknown: true,
        },
    ]
}

/// Sitting on `court_id` on `date`: started before it, not yet retired,
/// terminated or deceased.
pub fn sitting_on(court_id: &str, date: NaiveDate) -> Vec<PersonFilter> {
    vec![
        PersonFilter::Court(court_id.to_string()),
        PersonFilter::StartedBefore {
            date,
            or_unknown: false,
        },
        PersonFilter::RetiredAfter {
            date,
            or_unknown: true,
        },
        PersonFilter::TerminatedAfter {
            date,
            or_unknown: true,
        },
        PersonFilter::AliveOn(date),
    ]
}
