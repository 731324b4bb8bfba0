//! Sample member generators
//!
//! These fill the `transferredMembers` and `prospectiveGains` lists of the
//! output document. Every generator draws from a caller-supplied [`Rng`],
//! ids included, so a seeded source reproduces the same output.

pub mod prospective;
pub mod transferred;

pub use prospective::generate_prospective;
pub use transferred::generate_transferred;

use chrono::{Days, NaiveDate};
use rand::Rng;
use uuid::Uuid;

/// Date format used for every generated date field (`MM/DD/YY`)
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Inclusive range of calendar days to draw dates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    span_days: u64,
}

impl DateWindow {
    /// Window covering `start..=end`; an inverted range collapses to `start`
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let span_days = u64::try_from((end - start).num_days()).unwrap_or(0);
        Self { start, span_days }
    }

    /// Window of `start` plus up to `span_days` days
    pub fn starting_at(start: NaiveDate, span_days: u64) -> Self {
        Self { start, span_days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day in the window
    pub fn end(&self) -> NaiveDate {
        self.offset(self.span_days)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Pick a day uniformly from the window
    pub fn sample<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        self.offset(rng.random_range(0..=self.span_days))
    }

    fn offset(&self, days: u64) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(days))
            .unwrap_or(self.start)
    }
}

/// Calendar date from constant parts; only used with known-valid dates
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Format a date the way the roster file writes them
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Random v4 id drawn from `rng`
pub fn random_id<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// `"LAST, FIRST"` display name
pub(crate) fn display_name(last: &str, first: &str) -> String {
    format!("{}, {}", last, first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_window_between_is_inclusive() {
        let window = DateWindow::between(ymd(2025, 1, 1), ymd(2025, 12, 31));
        assert_eq!(window.start(), ymd(2025, 1, 1));
        assert_eq!(window.end(), ymd(2025, 12, 31));
        assert!(window.contains(ymd(2025, 6, 15)));
        assert!(!window.contains(ymd(2026, 1, 1)));
        assert!(!window.contains(ymd(2024, 12, 31)));
    }

    #[test]
    fn test_window_inverted_collapses() {
        let window = DateWindow::between(ymd(2025, 1, 1), ymd(2024, 1, 1));
        assert_eq!(window.end(), ymd(2025, 1, 1));

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(window.sample(&mut rng), ymd(2025, 1, 1));
    }

    #[test]
    fn test_window_sample_in_range() {
        let window = DateWindow::starting_at(ymd(2022, 1, 1), 600);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(window.contains(window.sample(&mut rng)));
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2025, 3, 4)), "03/04/25");
        assert_eq!(format_date(ymd(2027, 1, 31)), "01/31/27");
    }

    #[test]
    fn test_random_id_reproducible() {
        let a = random_id(&mut StdRng::seed_from_u64(11));
        let b = random_id(&mut StdRng::seed_from_u64(11));
        let c = random_id(&mut StdRng::seed_from_u64(12));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.get_version_num(), 4);
    }
}
