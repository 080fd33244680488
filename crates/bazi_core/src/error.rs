//! Error types for Four Pillars input validation.

use std::fmt::{Display, Formatter};

/// One of the four input fields of a civil moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
}

/// All fields in request order.
pub const ALL_FIELDS: [Field; 4] = [Field::Year, Field::Month, Field::Day, Field::Hour];

impl Field {
    /// Lowercase key used by request bodies, forms and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failures detected before any calendrical arithmetic runs.
///
/// Once a [`CivilMoment`](crate::CivilMoment) has been constructed, no
/// derivation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BaziError {
    /// A required field was not supplied.
    #[error("missing required field: {field}")]
    MissingField {
        /// The absent field.
        field: Field,
    },

    /// A field was supplied but lies outside its permitted range.
    #[error("{field} out of range: {value} (must be {min}..={max})")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The value that was supplied.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A field could not be read as an integer.
    #[error("malformed {field}: {input:?} is not an integer")]
    MalformedInput {
        /// The offending field.
        field: Field,
        /// The raw text that failed to parse.
        input: String,
    },
}

impl BaziError {
    /// The field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField { field }
            | Self::OutOfRange { field, .. }
            | Self::MalformedInput { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let err = BaziError::MissingField { field: Field::Hour };
        assert_eq!(err.to_string(), "missing required field: hour");
    }

    #[test]
    fn out_of_range_message() {
        let err = BaziError::OutOfRange {
            field: Field::Month,
            value: 13,
            min: 1,
            max: 12,
        };
        assert_eq!(err.to_string(), "month out of range: 13 (must be 1..=12)");
        assert_eq!(err.field(), Field::Month);
    }

    #[test]
    fn malformed_message() {
        let err = BaziError::MalformedInput {
            field: Field::Day,
            input: "3rd".to_string(),
        };
        assert_eq!(err.to_string(), "malformed day: \"3rd\" is not an integer");
    }

    #[test]
    fn field_names() {
        let names: Vec<_> = ALL_FIELDS.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["year", "month", "day", "hour"]);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<BaziError>();
    }
}
