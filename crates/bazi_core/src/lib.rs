//! Gregorian civil date-time to Four Pillars (Bazi) conversion.
//!
//! This crate provides:
//! - Julian Day conversion for Gregorian dates
//! - Heavenly stem, earthly branch and sexagenary pillar types
//! - Year, month, day and hour pillar derivation, with the Li Chun year
//!   boundary approximated by a fixed day in February
//! - Range validation of the input moment
//!
//! Everything is pure arithmetic over constant tables; all functions are
//! safe to call concurrently.
//!
//! ```
//! use bazi_core::four_pillars;
//!
//! let p = four_pillars(2024, 2, 4, 23).unwrap();
//! assert_eq!(p.year.to_string(), "甲 辰");
//! assert_eq!(p.hour.to_string(), "壬 子");
//! ```

pub mod chart;
pub mod error;
pub mod ganzhi;
pub mod julian;
pub mod moment;
pub mod pillars;

pub use chart::{FourPillars, compute_four_pillars, compute_four_pillars_with, four_pillars};
pub use error::{ALL_FIELDS, BaziError, Field};
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Pillar, Stem};
pub use julian::{DAY_CYCLE_EPOCH_JD, days_in_month, is_leap_year, to_julian_day};
pub use moment::CivilMoment;
pub use pillars::{
    MONTH_START_DAYS, MonthStemRule, day_pillar, effective_year, hour_branch, hour_stem,
    li_chun_day, month_branch, month_stem, month_stem_with, year_pillar,
};
