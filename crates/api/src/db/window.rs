use serde::{Deserialize, Serialize};
use time::{macros::date, Date, Duration};

/// Last day recorded in the dataset, the anchor for the "previous year" routes
pub const LAST_OBSERVATION_DATE: Date = date!(2017 - 08 - 23);

/// Station with the most observations in the dataset
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

const TRAILING_DAYS: i64 = 365;

/// Inclusive date bounds, compared as `YYYY-MM-DD` text against stored dates.
///
/// Bounds are not validated: a malformed value simply matches no rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start: String,
    pub end: Option<String>,
}

impl DateWindow {
    pub fn since(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// SQL predicate on the `date` column, one `?` per bound
    pub fn date_clause(&self) -> &'static str {
        match self.end {
            Some(_) => "date >= ? AND date <= ?",
            None => "date >= ?",
        }
    }
}

/// The trailing 365 days ending on [`LAST_OBSERVATION_DATE`].
/// Only the lower bound is applied since no data exists past the anchor.
pub fn last_year_window() -> DateWindow {
    let start = LAST_OBSERVATION_DATE - Duration::days(TRAILING_DAYS);
    DateWindow::since(start.to_string())
}
