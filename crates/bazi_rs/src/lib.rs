//! Front-end adapters for the `bazi_core` Four Pillars calculator.
//!
//! The core takes four validated integers. This crate sits between it and
//! the outside world:
//! - [`FieldSource`] reads year/month/day/hour out of loosely-typed input
//!   (JSON bodies, urlencoded forms, string maps) with uniform
//!   missing/malformed/out-of-range reporting
//! - [`InputPolicy`] adds caller-side restrictions (year range, strict dates)
//! - [`Calculator`] ties both to a month-stem rule
//! - [`BaziResponse`] / [`ErrorResponse`] are the serializable result shapes
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::{Calculator, InputPolicy};
//! use bazi_core::MonthStemRule;
//!
//! let calc = Calculator::new(InputPolicy::unbounded(), MonthStemRule::Simplified);
//! let pillars = calc
//!     .calculate_json(r#"{"year": 2024, "month": 2, "day": 4, "hour": 23}"#)
//!     .unwrap();
//! assert_eq!(pillars.day.to_string(), "戊 戌");
//! ```

pub mod calculator;
pub mod error;
pub mod form;
pub mod json;
pub mod policy;
pub mod response;
pub mod source;

pub use calculator::Calculator;
pub use error::BaziRsError;
pub use form::FormFields;
pub use json::JsonBody;
pub use policy::{InputPolicy, WEB_MIN_YEAR};
pub use response::{BaziResponse, ErrorResponse};
pub use source::{FieldSource, RawValue, parse_value, read_moment};

// Re-export core types so callers don't need to depend on bazi_core directly.
pub use bazi_core::{BaziError, CivilMoment, Field, FourPillars, MonthStemRule, Pillar};
