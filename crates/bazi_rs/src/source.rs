//! Reading a civil moment out of loosely-typed input.
//!
//! Each front-end (JSON body, HTML form, plain string map) implements
//! [`FieldSource`]; [`read_moment`] turns any of them into a validated
//! [`CivilMoment`] with the same error reporting.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

use bazi_core::{ALL_FIELDS, BaziError, CivilMoment, Field};
use tracing::debug;

/// A field value as supplied by the caller, before integer parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// Already an integer.
    Integer(i64),
    /// Text to be parsed as a base-10 integer (surrounding whitespace allowed).
    Text(Cow<'a, str>),
    /// A value that can never be an integer, rendered for error messages.
    Other(String),
}

/// Anything that can look up the year, month, day and hour fields by name.
pub trait FieldSource {
    /// The raw value of `field`, or `None` if it was not supplied.
    fn raw(&self, field: Field) -> Option<RawValue<'_>>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn raw(&self, field: Field) -> Option<RawValue<'_>> {
        self.get(field.name())
            .map(|v| RawValue::Text(Cow::Borrowed(v.as_str())))
    }
}

/// Parse one raw value as an integer.
pub fn parse_value(field: Field, raw: RawValue<'_>) -> Result<i64, BaziError> {
    match raw {
        RawValue::Integer(v) => Ok(v),
        RawValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| BaziError::MalformedInput {
                field,
                input: text.into_owned(),
            }),
        RawValue::Other(input) => Err(BaziError::MalformedInput { field, input }),
    }
}

/// Read and validate all four fields.
///
/// Presence of every field is checked first, then integer parsing, then
/// ranges, each in year, month, day, hour order.
pub fn read_moment<S: FieldSource + ?Sized>(source: &S) -> Result<CivilMoment, BaziError> {
    let mut raws = Vec::with_capacity(ALL_FIELDS.len());
    for field in ALL_FIELDS {
        match source.raw(field) {
            Some(raw) => raws.push((field, raw)),
            None => {
                debug!(%field, "required field missing");
                return Err(BaziError::MissingField { field });
            }
        }
    }

    let mut values = [0i64; 4];
    for (slot, (field, raw)) in values.iter_mut().zip(raws) {
        *slot = parse_value(field, raw).inspect_err(|e| debug!(%e, "field rejected"))?;
    }

    let [year, month, day, hour] = values;
    CivilMoment::from_fields(year, month, day, hour)
}
