//! Final registration deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Last day on which final registration is accepted.
///
/// The deadline is inclusive. A missing deadline means registration is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDeadline(Option<NaiveDate>);

impl RegistrationDeadline {
    /// Create a deadline from an optional last date.
    #[must_use]
    pub const fn new(last_date: Option<NaiveDate>) -> Self {
        Self(last_date)
    }

    /// Parse a deadline from a `YYYY-MM-DD` setting. Unparseable values yield a closed deadline.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        Self(value.and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()))
    }

    /// The configured last date, if any.
    #[must_use]
    pub const fn last_date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Returns true if registration is still open on `today`.
    #[must_use]
    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.0.is_some_and(|last| today <= last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_day_is_inclusive() {
        let deadline = RegistrationDeadline::new(Some(date(2026, 6, 30)));
        assert!(deadline.is_open(date(2026, 6, 29)));
        assert!(deadline.is_open(date(2026, 6, 30)));
        assert!(!deadline.is_open(date(2026, 7, 1)));
    }

    #[test]
    fn missing_deadline_is_closed() {
        assert!(!RegistrationDeadline::new(None).is_open(date(2000, 1, 1)));
    }

    #[test]
    fn parse_accepts_iso_dates() {
        let deadline = RegistrationDeadline::parse(Some(" 2026-06-30 "));
        assert_eq!(deadline.last_date(), Some(date(2026, 6, 30)));
    }

    #[test]
    fn parse_garbage_is_closed() {
        assert_eq!(RegistrationDeadline::parse(Some("30/06/2026")).last_date(), None);
        assert_eq!(RegistrationDeadline::parse(None).last_date(), None);
    }
}
