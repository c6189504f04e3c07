//! Date window parsing.

use chrono::{Duration, NaiveDate, NaiveTime};
use seed_generator::DateWindow;

use crate::seed::SeedError;

/// Accepted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|source| SeedError::InvalidDate {
        value: s.to_string(),
        source,
    })
}

/// Build the generation window from optional start and end dates.
///
/// A given start begins at midnight and a given end lasts until 23:59:59.
/// A missing end is now; a missing start is the day one year before the end.
pub fn resolve_window(start: Option<&str>, end: Option<&str>) -> Result<DateWindow, SeedError> {
    let start = start.map(parse_date).transpose()?;
    let end = end.map(parse_date).transpose()?;

    let window = match (start, end) {
        (None, None) => DateWindow::last_year(),
        (Some(start), Some(end)) => DateWindow::from_dates(start, end)?,
        (None, Some(end)) => DateWindow::from_dates(end - Duration::days(365), end)?,
        (Some(start), None) => {
            DateWindow::new(start.and_time(NaiveTime::MIN), DateWindow::last_year().end())?
        }
    };
    Ok(window)
}
