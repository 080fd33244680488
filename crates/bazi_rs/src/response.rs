//! Serializable result and error shapes for front-ends.

use bazi_core::FourPillars;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::BaziRsError;

/// Four pillar strings, optionally stamped with the time of calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaziResponse {
    pub year_pillar: String,
    pub month_pillar: String,
    pub day_pillar: String,
    pub hour_pillar: String,
    /// Supplied by the caller, never by the calculation itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
}

impl BaziResponse {
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.calculated_at = Some(at);
        self
    }
}

impl From<&FourPillars> for BaziResponse {
    fn from(p: &FourPillars) -> Self {
        Self {
            year_pillar: p.year.to_string(),
            month_pillar: p.month.to_string(),
            day_pillar: p.day.to_string(),
            hour_pillar: p.hour.to_string(),
            calculated_at: None,
        }
    }
}

/// `{"error": "...", "field": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl From<&BaziRsError> for ErrorResponse {
    fn from(e: &BaziRsError) -> Self {
        let field = match e {
            BaziRsError::Invalid(inner) => Some(inner.field().name()),
            _ => None,
        };
        Self {
            error: e.to_string(),
            field,
        }
    }
}
