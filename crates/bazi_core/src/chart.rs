//! Four Pillars orchestration.

use tracing::trace;

use crate::error::BaziError;
use crate::ganzhi::Pillar;
use crate::moment::CivilMoment;
use crate::pillars::{
    MonthStemRule, day_pillar, hour_branch, hour_stem, month_branch, month_stem_with, year_pillar,
};

/// The four pillars of a civil moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {} | {}", self.year, self.month, self.day, self.hour)
    }
}

/// Compute the four pillars with the default month-stem rule.
pub fn compute_four_pillars(moment: &CivilMoment) -> FourPillars {
    compute_four_pillars_with(MonthStemRule::default(), moment)
}

/// Compute the four pillars with an explicit month-stem rule.
///
/// The month stem depends on the year stem and the hour stem on the day
/// stem; nothing here can fail for a validated moment.
pub fn compute_four_pillars_with(rule: MonthStemRule, moment: &CivilMoment) -> FourPillars {
    let (y, m, d) = (moment.year(), moment.month(), moment.day());

    let year = year_pillar(y, m, d);
    let m_branch = month_branch(m, d);
    let month = Pillar::new(month_stem_with(rule, year.stem, m_branch), m_branch);
    let day = day_pillar(y, m, d);
    let h_branch = hour_branch(moment.hour());
    let hour = Pillar::new(hour_stem(day.stem, h_branch), h_branch);

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };
    trace!(%moment, ?rule, %pillars, "computed four pillars");
    pillars
}

/// Validate raw fields and compute the four pillars.
pub fn four_pillars(year: i32, month: u32, day: u32, hour: u32) -> Result<FourPillars, BaziError> {
    let moment = CivilMoment::new(year, month, day, hour)?;
    Ok(compute_four_pillars(&moment))
}
