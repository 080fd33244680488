//! Caller-side input policy: allowed year range and date strictness.
//!
//! The core accepts any year and any day 1..=31. Front-ends narrow that
//! here.

use bazi_core::{BaziError, CivilMoment, Field, days_in_month};
use chrono::{DateTime, Datelike, Utc};

/// Earliest year accepted by the web front-end.
pub const WEB_MIN_YEAR: i32 = 1900;

/// Restrictions applied on top of the core's range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPolicy {
    /// Inclusive lower year bound.
    pub min_year: Option<i32>,
    /// Inclusive upper year bound.
    pub max_year: Option<i32>,
    /// Reject days past the end of their month (e.g. February 30).
    pub strict_dates: bool,
}

impl InputPolicy {
    /// No year bounds, lenient dates.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// 1900 through the current UTC year, lenient dates.
    pub fn web_default() -> Self {
        Self::web_default_at(Utc::now())
    }

    /// 1900 through the year of `now`.
    pub fn web_default_at(now: DateTime<Utc>) -> Self {
        Self {
            min_year: Some(WEB_MIN_YEAR),
            max_year: Some(now.year()),
            strict_dates: false,
        }
    }

    pub fn check(&self, moment: &CivilMoment) -> Result<(), BaziError> {
        let year = moment.year();
        let below = self.min_year.is_some_and(|min| year < min);
        let above = self.max_year.is_some_and(|max| year > max);
        if below || above {
            return Err(BaziError::OutOfRange {
                field: Field::Year,
                value: year as i64,
                min: self.min_year.unwrap_or(i32::MIN) as i64,
                max: self.max_year.unwrap_or(i32::MAX) as i64,
            });
        }

        if self.strict_dates {
            let len = days_in_month(year, moment.month()).unwrap_or(31);
            if moment.day() > len {
                return Err(BaziError::OutOfRange {
                    field: Field::Day,
                    value: moment.day() as i64,
                    min: 1,
                    max: len as i64,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn moment(y: i32, m: u32, d: u32) -> CivilMoment {
        CivilMoment::new(y, m, d, 0).unwrap()
    }

    #[test]
    fn unbounded_accepts_anything_valid() {
        let p = InputPolicy::unbounded();
        assert!(p.check(&moment(-3000, 2, 31)).is_ok());
        assert!(p.check(&moment(9999, 12, 31)).is_ok());
    }

    #[test]
    fn web_default_bounds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let p = InputPolicy::web_default_at(now);
        assert!(p.check(&moment(1900, 1, 1)).is_ok());
        assert!(p.check(&moment(2025, 12, 31)).is_ok());
        assert_eq!(
            p.check(&moment(1899, 12, 31)).unwrap_err(),
            BaziError::OutOfRange {
                field: Field::Year,
                value: 1899,
                min: 1900,
                max: 2025
            }
        );
        assert_eq!(
            p.check(&moment(2026, 1, 1)).unwrap_err().field(),
            Field::Year
        );
    }

    #[test]
    fn one_sided_bound_reports_open_end() {
        let p = InputPolicy {
            min_year: Some(2000),
            ..InputPolicy::default()
        };
        assert_eq!(
            p.check(&moment(1999, 1, 1)).unwrap_err(),
            BaziError::OutOfRange {
                field: Field::Year,
                value: 1999,
                min: 2000,
                max: i32::MAX as i64
            }
        );
    }

    #[test]
    fn strict_dates_reject_february_30() {
        let p = InputPolicy {
            strict_dates: true,
            ..InputPolicy::default()
        };
        assert_eq!(
            p.check(&moment(2024, 2, 30)).unwrap_err(),
            BaziError::OutOfRange {
                field: Field::Day,
                value: 30,
                min: 1,
                max: 29
            }
        );
        assert!(p.check(&moment(2024, 2, 29)).is_ok());
        assert!(p.check(&moment(2023, 2, 29)).is_err());
        assert!(p.check(&moment(2023, 4, 31)).is_err());
    }

    #[test]
    fn lenient_dates_accept_february_30() {
        assert!(InputPolicy::default().check(&moment(2024, 2, 30)).is_ok());
    }
}
