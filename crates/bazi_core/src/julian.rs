//! Gregorian calendar to Julian Day conversion.
//!
//! Uses the Meeus formula with midnight-based (half-integer) results,
//! so 2000-01-01 is JD 2451544.5.

/// Julian Day at which the sexagenary day count is anchored (a 甲子 day).
pub const DAY_CYCLE_EPOCH_JD: f64 = 2_415_010.5;

/// Julian Day of a Gregorian calendar date at 00:00.
///
/// January and February are counted as months 13 and 14 of the previous
/// year. No calendar validity checking is done: 2024-02-30 yields the same
/// value as 2024-03-01.
pub fn to_julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_midnight() {
        assert_eq!(to_julian_day(2000, 1, 1), 2_451_544.5);
    }

    #[test]
    fn epoch_day() {
        // 1899-12-22
        assert_eq!(to_julian_day(1899, 12, 22), DAY_CYCLE_EPOCH_JD);
    }

    #[test]
    fn year_1900() {
        assert_eq!(to_julian_day(1900, 1, 1), 2_415_020.5);
    }

    #[test]
    fn results_are_half_integers() {
        for (y, m, d) in [(1, 1, 1), (1582, 10, 15), (2024, 2, 29), (-100, 3, 1)] {
            let jd = to_julian_day(y, m, d);
            assert_eq!(jd.fract().abs(), 0.5, "{y}-{m}-{d} -> {jd}");
        }
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        assert_eq!(to_julian_day(2024, 3, 1) - to_julian_day(2024, 2, 29), 1.0);
        assert_eq!(to_julian_day(2025, 1, 1) - to_julian_day(2024, 12, 31), 1.0);
    }

    #[test]
    fn invalid_date_rolls_over() {
        assert_eq!(to_julian_day(2024, 2, 30), to_julian_day(2024, 3, 1));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 13), None);
    }
}
