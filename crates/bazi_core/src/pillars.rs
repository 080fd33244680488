//! Derivation of the individual year, month, day and hour pillars.
//!
//! Solar terms are approximated by fixed calendar days: Li Chun (the year
//! boundary) falls on February 4 in Gregorian leap years and February 5
//! otherwise, and each month's term begins on the day given by
//! [`MONTH_START_DAYS`].

use crate::ganzhi::{Branch, Pillar, Stem};
use crate::julian::{DAY_CYCLE_EPOCH_JD, is_leap_year, to_julian_day};

/// Approximate day-of-month on which the solar month begins, indexed by
/// calendar month (entry 0 unused).
pub const MONTH_START_DAYS: [u32; 13] = [0, 6, 5, 6, 5, 6, 7, 8, 8, 8, 8, 7, 6];

/// Year 4 CE was a 甲子 year.
const YEAR_CYCLE_EPOCH: i64 = 4;

/// How the month stem is derived from the year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthStemRule {
    /// `(寅 stem + (branch - 2)) mod 10`. The 子 and 丑 months take the two
    /// stems preceding the 寅 month.
    #[default]
    Simplified,
    /// Months are counted from 寅 modulo 12, so the 子 and 丑 months are the
    /// 11th and 12th months of the year and continue its stem sequence.
    Traditional,
}

/// Sexagenary day pillar for a Gregorian date.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let jd = to_julian_day(year, month, day);
    let day_index = ((jd - DAY_CYCLE_EPOCH_JD).floor() as i64).rem_euclid(60);
    Pillar::from_cycle_index(day_index)
}

/// Day of February on which Li Chun is taken to fall.
pub const fn li_chun_day(year: i32) -> u32 {
    if is_leap_year(year) { 4 } else { 5 }
}

/// The Bazi year a date belongs to: dates before Li Chun count toward the
/// previous year. Widened to `i64` so January of `i32::MIN` has a year to
/// fall back to.
pub const fn effective_year(year: i32, month: u32, day: u32) -> i64 {
    if month < 2 || (month == 2 && day < li_chun_day(year)) {
        year as i64 - 1
    } else {
        year as i64
    }
}

/// Year pillar, applying the Li Chun boundary.
pub fn year_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let offset = effective_year(year, month, day) - YEAR_CYCLE_EPOCH;
    Pillar::new(Stem::from_index(offset), Branch::from_index(offset))
}

/// Month branch from the calendar month and day.
///
/// Before the month's start day the date still belongs to the previous
/// solar month. Bazi month 12 maps to 子; months 1..=11 map to the branch
/// with the same index.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn month_branch(month: u32, day: u32) -> Branch {
    assert!((1..=12).contains(&month), "month {month} not in 1..=12");
    let bazi_month = if day < MONTH_START_DAYS[month as usize] {
        month - 1
    } else {
        month
    };
    let bazi_month = if bazi_month == 0 { 12 } else { bazi_month };
    Branch::from_index(bazi_month as i64 % 12)
}

/// Month stem under [`MonthStemRule::Simplified`] (the "five tigers" rule).
pub fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    month_stem_with(MonthStemRule::Simplified, year_stem, month_branch)
}

/// Month stem under an explicit rule.
///
/// 甲/己 years start the 寅 month on 丙, 乙/庚 on 戊, 丙/辛 on 庚,
/// 丁/壬 on 壬 and 戊/癸 on 甲.
pub fn month_stem_with(rule: MonthStemRule, year_stem: Stem, month_branch: Branch) -> Stem {
    let group = year_stem.index() as i64 % 5;
    let yin_stem = (group * 2 + 2) % 10;
    let from_yin = month_branch.index() as i64 - 2;
    let offset = match rule {
        MonthStemRule::Simplified => from_yin,
        MonthStemRule::Traditional => from_yin.rem_euclid(12),
    };
    Stem::from_index(yin_stem + offset)
}

/// Hour branch. Each branch covers two hours; 子 spans 23:00-00:59.
///
/// Hours past 23 keep cycling through the branches.
pub fn hour_branch(hour: u32) -> Branch {
    Branch::from_index((hour / 2 + hour % 2) as i64 % 12)
}

/// Hour stem from the day stem.
///
/// 甲/己 days start the 子 hour on 甲, 乙/庚 on 丙, 丙/辛 on 戊,
/// 丁/壬 on 庚 and 戊/癸 on 壬.
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let group = day_stem.index() as i64 % 5;
    let zi_stem = (group * 2) % 10;
    Stem::from_index(zi_stem + hour_branch.index() as i64)
}
