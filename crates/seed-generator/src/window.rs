//! Date windows bounding generated timestamps.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;

/// Error type for window construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Start lies after end
    #[error("Start date {start} is after end date {end}")]
    StartAfterEnd {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Inclusive `[start, end]` range of naive timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// Create a window, rejecting `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window from the start of `start` to the last second of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self::new(start.and_time(NaiveTime::MIN), end.and_time(end_of_day))
    }

    /// The one-year window ending now (local time, second precision).
    pub fn last_year() -> Self {
        let now = Local::now().naive_local();
        let end = now.with_nanosecond(0).unwrap_or(now);
        Self {
            start: end - Duration::days(365),
            end,
        }
    }

    /// Lower bound (inclusive).
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Upper bound (inclusive).
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether `ts` lies inside the window.
    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        *ts >= self.start && *ts <= self.end
    }

    /// Draw a uniform timestamp with second precision.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> NaiveDateTime {
        let span = (self.end - self.start).num_seconds();
        if span <= 0 {
            return self.start;
        }
        self.start + Duration::seconds(rng.random_range(0..=span))
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::last_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_dates_spans_whole_days() {
        let window = DateWindow::from_dates(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(window.start().to_string(), "2024-01-01 00:00:00");
        assert_eq!(window.end().to_string(), "2024-01-31 23:59:59");
    }

    #[test]
    fn test_single_day_window() {
        let window = DateWindow::from_dates(date(2024, 6, 1), date(2024, 6, 1)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let ts = window.sample(&mut rng);
            assert_eq!(ts.date(), date(2024, 6, 1));
        }
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = DateWindow::from_dates(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(WindowError::StartAfterEnd { .. })));
    }

    #[test]
    fn test_sample_inside_window() {
        let window = DateWindow::from_dates(date(2020, 1, 1), date(2024, 12, 31)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(window.contains(&window.sample(&mut rng)));
        }
    }

    #[test]
    fn test_default_is_last_year() {
        let window = DateWindow::default();
        assert_eq!((window.end() - window.start()).num_days(), 365);
        assert_eq!(window.end().nanosecond(), 0);
    }
}
