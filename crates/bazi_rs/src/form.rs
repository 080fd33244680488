//! `application/x-www-form-urlencoded` bodies such as
//! `year=1990&month=5&day=15&hour=14`.

use std::borrow::Cow;

use bazi_core::Field;

use crate::error::BaziRsError;
use crate::source::{FieldSource, RawValue};

/// Decoded form pairs in submission order.
///
/// When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    /// Decode a urlencoded body. `+` decodes to a space.
    pub fn parse(body: &str) -> Result<Self, BaziRsError> {
        let pairs = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<(String, String), BaziRsError> {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Ok((decode(key)?, decode(value)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl FieldSource for FormFields {
    fn raw(&self, field: Field) -> Option<RawValue<'_>> {
        self.get(field.name())
            .map(|v| RawValue::Text(Cow::Borrowed(v)))
    }
}

fn decode(component: &str) -> Result<String, BaziRsError> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|e| BaziRsError::body(format!("invalid form encoding in {component:?}: {e}")))
}
