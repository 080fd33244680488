//! Validated civil date-time input.

use crate::error::{BaziError, Field};

/// A Gregorian civil moment at hour resolution.
///
/// Construction checks only the field ranges (month 1..=12, day 1..=31,
/// hour 0..=23). A day that does not exist in its month, such as
/// February 30, is accepted and rolls over in Julian-day arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
}

impl CivilMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, BaziError> {
        check_range(Field::Month, month as i64, 1, 12)?;
        check_range(Field::Day, day as i64, 1, 31)?;
        check_range(Field::Hour, hour as i64, 0, 23)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }

    /// Build from wide integers as read from loosely-typed input.
    ///
    /// The year must fit in an `i32`; the other fields are range-checked as
    /// in [`CivilMoment::new`].
    pub fn from_fields(year: i64, month: i64, day: i64, hour: i64) -> Result<Self, BaziError> {
        check_range(Field::Year, year, i32::MIN as i64, i32::MAX as i64)?;
        check_range(Field::Month, month, 1, 12)?;
        check_range(Field::Day, day, 1, 31)?;
        check_range(Field::Hour, hour, 0, 23)?;
        Self::new(year as i32, month as u32, day as u32, hour as u32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl std::fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}h",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// Inclusive range check reported as [`BaziError::OutOfRange`].
pub fn check_range(field: Field, value: i64, min: i64, max: i64) -> Result<(), BaziError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BaziError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
