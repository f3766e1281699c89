use crate::errors::{ErrorKind, TroveError, TroveResult};
use serde_json::Value;

/// A condition object, borrowed from the caller's `{field: value}` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Conditions<'a> {
    /// `null` or `{}`: every record matches.
    All,
    /// The `field: value` pair with the smallest field name; `extra` counts
    /// the ignored pairs.
    Field {
        field: &'a str,
        value: &'a Value,
        extra: usize,
    },
}

impl<'a> Conditions<'a> {
    pub fn parse(conditions: &'a Value) -> TroveResult<Self> {
        match conditions {
            Value::Null => Ok(Conditions::All),
            // smallest key first, independent of the map's iteration order
            Value::Object(map) => match map.iter().min_by(|a, b| a.0.cmp(b.0)) {
                None => Ok(Conditions::All),
                Some((field, value)) => Ok(Conditions::Field {
                    field: field.as_str(),
                    value,
                    extra: map.len() - 1,
                }),
            },
            other => {
                log::error!("Conditions must be an object or null, got {}", other);
                Err(TroveError::new(
                    "Conditions must be an object with one field, or null",
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }

    /// Like [`Conditions::parse`], rejecting objects with more than one field.
    pub fn parse_single(conditions: &'a Value) -> TroveResult<Self> {
        let parsed = Self::parse(conditions)?;
        if let Conditions::Field { extra, .. } = parsed {
            if extra > 0 {
                log::error!("Conditions with {} fields are not supported", extra + 1);
                return Err(TroveError::new(
                    "Not implemented: conditions must have only one field",
                    ErrorKind::NotImplemented,
                ));
            }
        }
        Ok(parsed)
    }
}
