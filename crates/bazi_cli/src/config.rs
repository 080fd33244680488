use std::path::Path;

use anyhow::{Context, Result};
use bazi_core::MonthStemRule;
use bazi_rs::{Calculator, InputPolicy};
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

/// Top-level `bazi.toml` configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BaziConfig {
    /// Input restrictions.
    #[serde(default)]
    pub policy: PolicyToml,

    /// Calculation settings.
    #[serde(default)]
    pub calculation: CalculationToml,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PolicyToml {
    pub min_year: Option<i32>,
    pub max_year: Option<YearBound>,
    #[serde(default)]
    pub strict_dates: bool,
}

/// An explicit year or `"current"` for the current UTC year.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum YearBound {
    Year(i32),
    Relative(RelativeYear),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RelativeYear {
    Current,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalculationToml {
    #[serde(default)]
    pub month_stem_rule: RuleToml,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RuleToml {
    #[default]
    Simplified,
    Traditional,
}

impl BaziConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the calculator, resolving `"current"` against `now`.
    pub fn calculator(&self, now: DateTime<Utc>) -> Calculator {
        let max_year = self.policy.max_year.map(|bound| match bound {
            YearBound::Year(y) => y,
            YearBound::Relative(RelativeYear::Current) => now.year(),
        });
        let policy = InputPolicy {
            min_year: self.policy.min_year,
            max_year,
            strict_dates: self.policy.strict_dates,
        };
        let rule = match self.calculation.month_stem_rule {
            RuleToml::Simplified => MonthStemRule::Simplified,
            RuleToml::Traditional => MonthStemRule::Traditional,
        };
        Calculator::new(policy, rule)
    }
}
