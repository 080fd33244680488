//! Shared entry point for every front-end.

use bazi_core::{BaziError, CivilMoment, FourPillars, MonthStemRule, compute_four_pillars_with};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::BaziRsError;
use crate::form::FormFields;
use crate::json::JsonBody;
use crate::policy::InputPolicy;
use crate::response::BaziResponse;
use crate::source::{FieldSource, read_moment};

/// Input policy plus month-stem rule, applied identically by the CLI, JSON
/// and form adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    pub policy: InputPolicy,
    pub rule: MonthStemRule,
}

impl Calculator {
    pub fn new(policy: InputPolicy, rule: MonthStemRule) -> Self {
        Self { policy, rule }
    }

    /// Apply the policy to an already range-checked moment and compute.
    pub fn calculate_moment(&self, moment: &CivilMoment) -> Result<FourPillars, BaziError> {
        self.policy
            .check(moment)
            .inspect_err(|e| debug!(%moment, %e, "rejected by input policy"))?;
        Ok(compute_four_pillars_with(self.rule, moment))
    }

    /// Read, validate and compute from any field source.
    pub fn calculate<S: FieldSource + ?Sized>(&self, source: &S) -> Result<FourPillars, BaziError> {
        let moment = read_moment(source)?;
        self.calculate_moment(&moment)
    }

    /// Compute from a JSON request body.
    pub fn calculate_json(&self, body: &str) -> Result<FourPillars, BaziRsError> {
        let body = JsonBody::parse(body)?;
        Ok(self.calculate(&body)?)
    }

    /// Compute from a urlencoded form body.
    pub fn calculate_form(&self, body: &str) -> Result<FourPillars, BaziRsError> {
        let form = FormFields::parse(body)?;
        Ok(self.calculate(&form)?)
    }

    /// Compute from a JSON body and build the response stamped with `now`.
    pub fn respond_json(&self, body: &str, now: DateTime<Utc>) -> Result<BaziResponse, BaziRsError> {
        let pillars = self.calculate_json(body)?;
        Ok(BaziResponse::from(&pillars).with_timestamp(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_core::Field;

    #[test]
    fn default_calculator_is_unbounded_and_simplified() {
        let calc = Calculator::default();
        assert_eq!(calc.policy, InputPolicy::unbounded());
        assert_eq!(calc.rule, MonthStemRule::Simplified);
    }

    #[test]
    fn policy_applies_to_moment() {
        let calc = Calculator::new(
            InputPolicy {
                max_year: Some(2000),
                ..InputPolicy::default()
            },
            MonthStemRule::Simplified,
        );
        let m = CivilMoment::new(2001, 1, 1, 0).unwrap();
        assert_eq!(calc.calculate_moment(&m).unwrap_err().field(), Field::Year);
    }

    #[test]
    fn rule_is_used() {
        let calc = Calculator::new(InputPolicy::unbounded(), MonthStemRule::Traditional);
        let p = calc
            .calculate_form("year=2000&month=1&day=1&hour=0")
            .unwrap();
        assert_eq!(p.month.to_string(), "丙 子");
    }
}
