use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// An ISO-8601 week: Monday through Sunday, with week 1 the one containing
/// the year's first Thursday. The year here is the ISO week-year, which can
/// differ from the calendar year at the boundary (Dec 31 can land in week 1
/// of the next year).
///
/// Ordering is numeric on `(year, week)`, so sorting never depends on how
/// the key renders ("2025-W9" vs "2025-W10" would sort wrong as strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    pub year: i32,
    pub week: u32,
}

impl WeekId {
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Human-readable "Dec 30 - Jan 5" span for chart axes.
    ///
    /// The week's nominal date is Jan 1 plus `(week - 1)` whole weeks,
    /// pulled back to the preceding Monday; Sunday is that Monday plus six
    /// days. For years starting on a Friday or Saturday this sits one week
    /// before the true ISO span, which the rendered history never crosses.
    pub fn label(&self) -> String {
        let Some(jan1) = NaiveDate::from_ymd_opt(self.year, 1, 1) else {
            return self.to_string();
        };
        let nominal = jan1 + Duration::days((i64::from(self.week) - 1) * 7);
        let monday = nominal - Duration::days(i64::from(nominal.weekday().num_days_from_monday()));
        let sunday = monday + Duration::days(6);
        format!("{} - {}", monday.format("%b %-d"), sunday.format("%b %-d"))
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

/// Week of a raw date string, or `None` when it is not a real `YYYY-MM-DD`
/// calendar date. Garbage rows in stored logs fail here and get skipped.
pub fn week_for(date: &str) -> Option<WeekId> {
    date.parse::<NaiveDate>().ok().map(WeekId::from_date)
}
